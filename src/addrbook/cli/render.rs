use super::parser::CommandHelp;
use addrbook::commands::{CmdMessage, CmdResult, MessageLevel};
use addrbook::model::Record;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

const NO_PHONES: &str = "-";

/// Renders everything a command produced, records first, messages last.
pub(super) fn render_result(result: &CmdResult) -> String {
    let mut out = String::new();
    out.push_str(&render_records(&result.listed_records));
    out.push_str(&render_phones(&result.phone_numbers));
    out.push_str(&render_messages(&result.messages));
    out
}

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

/// One line per contact: `name | phones: a, b | birthday: dd-mm-yyyy`,
/// names padded to a common display width.
pub(super) fn render_records(records: &[Record]) -> String {
    let width = records
        .iter()
        .map(|r| r.name.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for record in records {
        let padding = " ".repeat(width - record.name.width());
        let phones = if record.phones.is_empty() {
            NO_PHONES.to_string()
        } else {
            record.phone_values().join(", ")
        };

        out.push_str(&format!(
            "{}{} | phones: {}",
            record.name.bold(),
            padding,
            phones
        ));
        if let Some(birthday) = &record.birthday {
            out.push_str(&format!(" | birthday: {}", birthday.value().cyan()));
        }
        out.push('\n');
    }
    out
}

pub(super) fn render_phones(phones: &[String]) -> String {
    phones.iter().map(|p| format!("{}\n", p)).collect()
}

pub(super) fn render_help(commands: &[CommandHelp]) -> String {
    let width = commands.iter().map(|c| c.usage.width()).max().unwrap_or(0);
    commands
        .iter()
        .map(|c| {
            format!(
                "  {}{}  {}\n",
                c.usage.yellow(),
                " ".repeat(width - c.usage.width()),
                c.about.dimmed()
            )
        })
        .collect()
}
