use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use tracing::{info, warn};

/// Creates a contact with its first phone. Refuses names already present.
pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    if book.contains(name) {
        warn!(contact = %name, "contact already exists");
        return Ok(CmdResult::default()
            .with_message(CmdMessage::warning(format!("Contact {} already exists", name))));
    }

    let mut record = Record::new(name);
    record.add_phone(phone)?;
    book.add_record(record);
    info!(contact = %name, "contact added");

    Ok(CmdResult::default().with_message(CmdMessage::success("The contact was added")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::BookError;

    #[test]
    fn adds_contact_with_phone() {
        let mut book = AddressBook::new();
        let result = run(&mut book, "Ann", "0501234567").unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(book.get("Ann").unwrap().phone_values(), vec!["0501234567"]);
        assert!(result.listed_records.is_empty());
    }

    #[test]
    fn rejects_existing_name() {
        let mut book = AddressBook::new();
        run(&mut book, "Ann", "0501234567").unwrap();
        let result = run(&mut book, "Ann", "0671112233").unwrap();

        assert!(result.has_warnings());
        assert_eq!(book.get("Ann").unwrap().phone_values(), vec!["0501234567"]);
    }

    #[test]
    fn invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        let err = run(&mut book, "Ann", "12345").unwrap_err();

        assert!(matches!(err, BookError::InvalidPhoneFormat));
        assert!(book.is_empty());
    }
}
