//! # Interactive Loop
//!
//! `run()` wires the process together: arguments, logging, config, then a
//! [`Session`] over stdin/stdout. The session is generic over its reader and
//! writer so tests can drive it with in-memory buffers.
//!
//! Every error a command raises stops here. [`error_message`] maps it to a
//! single user-facing line and the loop carries on; only I/O failures on the
//! session's own reader or writer end it.

use super::parser::{parse_line, Command, COMMANDS};
use super::render::{render_help, render_messages, render_result};
use super::setup::Cli;
use addrbook::api::AddressBookApi;
use addrbook::book::AddressBook;
use addrbook::commands::{CmdMessage, CmdResult};
use addrbook::config::{resolve_config_dir, BookConfig};
use addrbook::error::{BookError, Result};
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const NEW_PHONE_PROMPT: &str = "Input the new phone number: ";
const FAREWELL: &str = "Good bye!";
const NOT_UNDERSTOOD: &str = "I do not understand the command";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    if cli.no_color || !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let page_size = cli.page_size.unwrap_or(config.page_size);
    debug!(page_size, "starting session");
    let mut api = AddressBookApi::new(AddressBook::new(), page_size);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&mut api, stdin.lock(), stdout.lock(), config.prompt).run()
}

/// Rejected input is reported on stdout, so the `warn!` events it also
/// raises stay hidden unless asked for.
fn default_log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "error"
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<BookConfig> {
    match resolve_config_dir(cli.config_dir.as_deref()) {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading config");
            BookConfig::load(dir)
        }
        None => Ok(BookConfig::default()),
    }
}

/// Maps an error to the line shown to the user.
pub(super) fn error_message(err: &BookError) -> CmdMessage {
    match err {
        BookError::InvalidPhoneFormat
        | BookError::InvalidBirthdayFormat
        | BookError::InvalidPageSize(_)
        | BookError::MissingArguments { .. } => CmdMessage::warning(err.to_string()),
        BookError::ContactNotFound(_) | BookError::NoBirthdaySet(_) => {
            CmdMessage::error(err.to_string())
        }
        BookError::Io(_) | BookError::Serialization(_) => {
            CmdMessage::error(format!("Error: {}", err))
        }
    }
}

pub(super) struct Session<'a, R, W> {
    api: &'a mut AddressBookApi,
    input: R,
    output: W,
    prompt: String,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub(super) fn new(api: &'a mut AddressBookApi, input: R, output: W, prompt: String) -> Self {
        Self {
            api,
            input,
            output,
            prompt,
        }
    }

    /// Reads and executes commands until an exit command or end of input.
    pub(super) fn run(&mut self) -> Result<()> {
        let prompt = self.prompt.clone();
        loop {
            let Some(line) = self.ask(&prompt)? else {
                writeln!(self.output)?;
                break;
            };

            let command = match parse_line(&line) {
                Ok(command) => command,
                Err(err) => {
                    self.report(&err)?;
                    continue;
                }
            };

            match command {
                Command::Exit => {
                    writeln!(self.output, "{}", FAREWELL)?;
                    break;
                }
                Command::Empty => continue,
                Command::Help => {
                    let help = render_help(COMMANDS);
                    self.output.write_all(help.as_bytes())?;
                }
                command => match self.dispatch(command) {
                    Ok(result) => self.output.write_all(render_result(&result).as_bytes())?,
                    Err(err) if err.is_user_error() => self.report(&err)?,
                    Err(err) => return Err(err),
                },
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<CmdResult> {
        debug!(?command, "dispatching");
        match command {
            Command::Hello => Ok(self.api.greet()),
            Command::ShowAll => self.api.show_all(),
            Command::ShowPage { page_size } => self.api.show_page(page_size),
            Command::Add { name, phone } => self.api.add_contact(&name, &phone),
            Command::AddPhone { name, phone } => self.api.add_phone(&name, &phone),
            Command::Change { name, old, new } => {
                let new = match new {
                    Some(new) => new,
                    None => self.ask_new_phone()?,
                };
                self.api.change_phone(&name, &old, &new)
            }
            Command::Phone { name } => self.api.show_phones(&name),
            Command::Delete { name, phone } => self.api.delete_phone(&name, &phone),
            Command::AddBirthday { name, birthday } => self.api.add_birthday(&name, &birthday),
            Command::Birthday { name } => self.api.days_to_birthday(&name),
            Command::Remove { name } => self.api.remove_contact(&name),
            Command::Unknown(line) => {
                debug!(%line, "unknown command");
                Ok(CmdResult::default().with_message(CmdMessage::warning(NOT_UNDERSTOOD)))
            }
            Command::Exit | Command::Empty | Command::Help => Ok(CmdResult::default()),
        }
    }

    fn ask_new_phone(&mut self) -> Result<String> {
        let answer = self.ask(NEW_PHONE_PROMPT)?.unwrap_or_default();
        answer
            .split_whitespace()
            .next()
            .map(str::to_string)
            .ok_or(BookError::MissingArguments {
                command: "change",
                usage: "<name> <old_phone> <new_phone>",
            })
    }

    /// Prints `prompt` and reads one line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn report(&mut self, err: &BookError) -> Result<()> {
        warn!(error = %err, "command failed");
        let text = render_messages(&[error_message(err)]);
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrbook::commands::MessageLevel;
    use std::io::Cursor;

    fn session_output(api: &mut AddressBookApi, input: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        Session::new(api, Cursor::new(input.as_bytes()), &mut out, "> ".into())
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn run_lines(input: &str) -> String {
        let mut api = AddressBookApi::new(AddressBook::new(), 3);
        session_output(&mut api, input)
    }

    #[test]
    fn greets_and_says_good_bye() {
        let out = run_lines("hello\ngood bye\nhello\n");
        assert_eq!(out, "> How can I help you?\n> Good bye!\n");
    }

    #[test]
    fn end_of_input_ends_the_session() {
        assert_eq!(run_lines(""), "> \n");
    }

    #[test]
    fn add_and_show_all() {
        let out = run_lines("add Ann 0501234567\nadd_birthday Ann 14-03-1992\nshow all\nexit\n");
        assert!(out.contains("The contact was added"));
        assert!(out.contains("Field Birthday with value 14-03-1992 was added"));
        assert!(out.contains("Ann | phones: 0501234567 | birthday: 14-03-1992"));
    }

    #[test]
    fn errors_do_not_stop_the_loop() {
        let out = run_lines(
            "add Ann 12\nadd\nphone Zed\nadd_birthday Zed 01-01-2000\nadd Ann 0501234567\nexit\n",
        );
        assert!(out.contains("Wrong format of the phone number"));
        assert!(out.contains("Not enough arguments for \"add\""));
        assert!(out.contains("There is no contact with name Zed"));
        assert!(out.contains("The contact was added"));
        assert!(out.ends_with("Good bye!\n"));
    }

    #[test]
    fn change_prompts_for_new_phone() {
        let mut api = AddressBookApi::new(AddressBook::new(), 3);
        let out = session_output(
            &mut api,
            "add Ann 0501234567\nchange Ann 0501234567\n0931112233\nexit\n",
        );

        assert!(out.contains(NEW_PHONE_PROMPT));
        assert!(out.contains("was changed to 0931112233"));
        assert_eq!(
            api.book().get("Ann").unwrap().phone_values(),
            vec!["0931112233"]
        );
    }

    #[test]
    fn change_with_inline_new_phone() {
        let mut api = AddressBookApi::new(AddressBook::new(), 3);
        let out = session_output(
            &mut api,
            "add Ann 0501234567\nchange Ann 0501234567 0931112233\nchange Ann 1111111111 0000000000\n",
        );

        assert!(!out.contains(NEW_PHONE_PROMPT));
        assert!(out.contains("Phone number does not exist"));
        assert_eq!(
            api.book().get("Ann").unwrap().phone_values(),
            vec!["0931112233"]
        );
    }

    #[test]
    fn change_without_answer_is_missing_arguments() {
        let out = run_lines("add Ann 0501234567\nchange Ann 0501234567\n\n");
        assert!(out.contains("Not enough arguments for \"change\""));
    }

    #[test]
    fn show_participate_uses_default_and_explicit_size() {
        let out = run_lines(
            "add A 0000000001\nadd B 0000000002\nadd C 0000000003\nadd D 0000000004\n\
             show_participate\nshow_participate 1\nshow_participate x\n",
        );
        assert!(out.contains("Showing 3 of 4 contacts"));
        assert!(out.contains("Showing 1 of 4 contacts"));
        assert!(out.contains("Page size must be a non-negative number, got \"x\""));
    }

    #[test]
    fn unknown_command_is_reported() {
        let out = run_lines("dance\n");
        assert!(out.contains(NOT_UNDERSTOOD));
    }

    #[test]
    fn help_lists_commands() {
        let out = run_lines("help\n");
        assert!(out.contains("add_birthday <name> <dd-mm-yyyy>"));
        assert!(out.contains("exit | close | good bye"));
    }

    #[test]
    fn birthday_without_date_is_an_error_line() {
        let out = run_lines("add Ann 0501234567\nbirthday Ann\nremove Ann\nphone Ann\n");
        assert!(out.contains("Contact with name Ann has no birthday set"));
        assert!(out.contains("The contact with name Ann was removed"));
        assert!(out.contains("There is no contact with name Ann"));
    }

    #[test]
    fn error_levels() {
        assert_eq!(
            error_message(&BookError::InvalidPhoneFormat).level,
            MessageLevel::Warning
        );
        assert_eq!(
            error_message(&BookError::ContactNotFound("Zed".into())).level,
            MessageLevel::Error
        );
        assert_eq!(
            error_message(&BookError::InvalidBirthdayFormat).content,
            "Wrong format of birthday, put data in format \"dd-mm-yyyy\""
        );
    }

    #[test]
    fn log_level_defaults_to_error_unless_verbose() {
        assert_eq!(default_log_level(false), "error");
        assert_eq!(default_log_level(true), "debug");
    }
}
