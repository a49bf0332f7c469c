//! Line parsing for the interactive loop.
//!
//! A line is split on whitespace. Two-word commands (`show all`, `good bye`)
//! and the bare commands are matched against the whole line; everything else
//! is a command word followed by positional arguments. Command words are
//! case-insensitive, arguments are kept as typed.

use addrbook::error::{BookError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    ShowAll,
    Exit,
    Add {
        name: String,
        phone: String,
    },
    AddPhone {
        name: String,
        phone: String,
    },
    /// `new` is `None` when the user left it for the follow-up prompt.
    Change {
        name: String,
        old: String,
        new: Option<String>,
    },
    Phone {
        name: String,
    },
    Delete {
        name: String,
        phone: String,
    },
    AddBirthday {
        name: String,
        birthday: String,
    },
    Birthday {
        name: String,
    },
    Remove {
        name: String,
    },
    ShowPage {
        page_size: Option<usize>,
    },
    Empty,
    Unknown(String),
}

pub struct CommandHelp {
    pub usage: &'static str,
    pub about: &'static str,
}

pub const COMMANDS: &[CommandHelp] = &[
    CommandHelp {
        usage: "hello",
        about: "Greeting",
    },
    CommandHelp {
        usage: "show all",
        about: "List every contact",
    },
    CommandHelp {
        usage: "show_participate [page_size]",
        about: "List the first contacts",
    },
    CommandHelp {
        usage: "add <name> <phone>",
        about: "Create a contact",
    },
    CommandHelp {
        usage: "add_phone <name> <phone>",
        about: "Add a phone to a contact",
    },
    CommandHelp {
        usage: "change <name> <old_phone> [new_phone]",
        about: "Replace a phone (asks for the new one if omitted)",
    },
    CommandHelp {
        usage: "phone <name>",
        about: "Show the phones of a contact",
    },
    CommandHelp {
        usage: "delete <name> <phone>",
        about: "Delete a phone from a contact",
    },
    CommandHelp {
        usage: "add_birthday <name> <dd-mm-yyyy>",
        about: "Set the birthday of a contact",
    },
    CommandHelp {
        usage: "birthday <name>",
        about: "Days until the next birthday",
    },
    CommandHelp {
        usage: "remove <name>",
        about: "Delete a contact",
    },
    CommandHelp {
        usage: "exit | close | good bye",
        about: "Leave",
    },
];

pub fn parse_line(line: &str) -> Result<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return Ok(Command::Empty);
    };

    let phrase = tokens.join(" ").to_lowercase();
    match phrase.as_str() {
        "exit" | "close" | "good bye" => return Ok(Command::Exit),
        "hello" => return Ok(Command::Hello),
        "help" => return Ok(Command::Help),
        "show all" => return Ok(Command::ShowAll),
        _ => {}
    }

    let word = first.to_lowercase();
    let args = Args(&tokens[1..]);

    let command = match word.as_str() {
        "add" => Command::Add {
            name: args.required(0, "add", "<name> <phone>")?,
            phone: args.required(1, "add", "<name> <phone>")?,
        },
        "add_phone" => Command::AddPhone {
            name: args.required(0, "add_phone", "<name> <phone>")?,
            phone: args.required(1, "add_phone", "<name> <phone>")?,
        },
        "change" => Command::Change {
            name: args.required(0, "change", "<name> <old_phone> [new_phone]")?,
            old: args.required(1, "change", "<name> <old_phone> [new_phone]")?,
            new: args.optional(2),
        },
        "phone" => Command::Phone {
            name: args.required(0, "phone", "<name>")?,
        },
        "delete" => Command::Delete {
            name: args.required(0, "delete", "<name> <phone>")?,
            phone: args.required(1, "delete", "<name> <phone>")?,
        },
        "add_birthday" => Command::AddBirthday {
            name: args.required(0, "add_birthday", "<name> <dd-mm-yyyy>")?,
            birthday: args.required(1, "add_birthday", "<name> <dd-mm-yyyy>")?,
        },
        "birthday" => Command::Birthday {
            name: args.required(0, "birthday", "<name>")?,
        },
        "remove" => Command::Remove {
            name: args.required(0, "remove", "<name>")?,
        },
        "show_participate" => Command::ShowPage {
            page_size: args.optional(0).map(|s| parse_page_size(&s)).transpose()?,
        },
        _ => Command::Unknown(line.trim().to_string()),
    };
    Ok(command)
}

fn parse_page_size(raw: &str) -> Result<usize> {
    raw.parse()
        .map_err(|_| BookError::InvalidPageSize(raw.to_string()))
}

struct Args<'a>(&'a [&'a str]);

impl Args<'_> {
    fn required(&self, pos: usize, command: &'static str, usage: &'static str) -> Result<String> {
        self.optional(pos)
            .ok_or(BookError::MissingArguments { command, usage })
    }

    fn optional(&self, pos: usize) -> Option<String> {
        self.0.get(pos).map(|s| s.to_string())
    }
}
