use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use tracing::debug;

const EMPTY_BOOK: &str = "Your contacts book is empty.";

pub fn all(book: &AddressBook) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(EMPTY_BOOK)));
    }
    let records = book.iter().map(|(_, record)| record.clone()).collect();
    Ok(CmdResult::default().with_listed_records(records))
}

/// The first `page_size` contacts.
pub fn page(book: &AddressBook, page_size: usize) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(EMPTY_BOOK)));
    }
    let records: Vec<_> = book
        .page(page_size)
        .map(|(_, record)| record.clone())
        .collect();
    debug!(page_size, shown = records.len(), total = book.len(), "page listed");

    let mut result = CmdResult::default();
    if records.len() < book.len() {
        result.add_message(CmdMessage::info(format!(
            "Showing {} of {} contacts",
            records.len(),
            book.len()
        )));
    }
    Ok(result.with_listed_records(records))
}
