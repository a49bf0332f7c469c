use crate::book::AddressBook;
use crate::error::{BookError, Result};
use crate::model::Record;

pub fn find_record<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.get(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}

pub fn find_record_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.get_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
}
