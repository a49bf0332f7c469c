//! # Address Book
//!
//! [`AddressBook`] maps contact names to [`Record`]s and remembers the order
//! in which names were first added. It composes a `Vec` of records with a
//! name index instead of exposing a generic map, so the only ways in and out
//! are the operations below.
//!
//! Uniqueness of names is a caller concern: [`AddressBook::add_record`]
//! overwrites an existing entry (keeping its position), while the `add`
//! command checks [`AddressBook::contains`] first and refuses duplicates.

use crate::model::Record;
use std::collections::HashMap;

pub const DEFAULT_PAGE_SIZE: usize = 3;

#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record` under its name. Last write wins.
    pub fn add_record(&mut self, record: Record) {
        match self.index.get(&record.name) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.index.insert(record.name.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&pos| &self.records[pos])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.index.get(name).map(|&pos| &mut self.records[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Record> {
        let pos = self.index.remove(name)?;
        let record = self.records.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Record)> + '_ {
        self.records.iter().map(|r| (r.name.as_str(), r))
    }

    /// The first `page_size` entries in insertion order. Every call starts
    /// from the beginning.
    pub fn page(&self, page_size: usize) -> Page<'_> {
        Page {
            inner: self.records.iter().take(page_size),
        }
    }
}

/// Lazy view over the first entries of an [`AddressBook`].
pub struct Page<'a> {
    inner: std::iter::Take<std::slice::Iter<'a, Record>>,
}

impl<'a> Iterator for Page<'a> {
    type Item = (&'a str, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|r| (r.name.as_str(), r))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Page<'_> {}
