//! Contact data types.
//!
//! [`Phone`] and [`Birthday`] are value objects: they can only be obtained
//! through their constructors, which reject malformed input. A [`Record`]
//! therefore never holds an invalid field, not even transiently.

use crate::error::{BookError, Result};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 13;

const BIRTHDAY_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self> {
        let len = raw.len();
        if raw.bytes().all(|b| b.is_ascii_digit())
            && (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&len)
        {
            Ok(Self(raw.to_string()))
        } else {
            Err(BookError::InvalidPhoneFormat)
        }
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Parses a strict `dd-mm-yyyy` date.
    pub fn new(raw: &str) -> Result<Self> {
        if !has_birthday_shape(raw) {
            return Err(BookError::InvalidBirthdayFormat);
        }
        let date = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map_err(|_| BookError::InvalidBirthdayFormat)?;
        Ok(Self {
            raw: raw.to_string(),
            date,
        })
    }

    pub fn value(&self) -> &str {
        &self.raw
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The birthday as it falls in `year`. 29 February maps to 28 February
    /// in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> NaiveDate {
        let (month, day) = (self.date.month(), self.date.day());
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, day - 1))
            .unwrap_or(self.date)
    }

    /// Days from `today` until the next occurrence, 0 when it is today.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        let mut next = self.occurrence_in(today.year());
        if today > next {
            next = self.occurrence_in(today.year() + 1);
        }
        (next - today).num_days()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

// chrono accepts single-digit days and months for %d/%m, the literal
// pattern does not.
fn has_birthday_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub phones: Vec<Phone>,
    pub birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<bool> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(true)
    }

    /// Replaces the first phone equal to `old` with `new`, keeping its
    /// position. Returns `Ok(false)` when `old` is not present.
    pub fn change_phone(&mut self, old: &str, new: &str) -> Result<bool> {
        let Some(pos) = self.position_of(old) else {
            return Ok(false);
        };
        self.phones[pos] = Phone::new(new)?;
        Ok(true)
    }

    pub fn delete_phone(&mut self, target: &str) -> bool {
        match self.position_of(target) {
            Some(pos) => {
                self.phones.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Sets the birthday once. A second call returns `Ok(false)` and keeps
    /// the first value.
    pub fn add_birthday(&mut self, raw: &str) -> Result<bool> {
        if self.birthday.is_some() {
            return Ok(false);
        }
        self.birthday = Some(Birthday::new(raw)?);
        Ok(true)
    }

    pub fn days_to_birthday(&self) -> Result<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Result<i64> {
        self.birthday
            .as_ref()
            .map(|b| b.days_until(today))
            .ok_or_else(|| BookError::NoBirthdaySet(self.name.clone()))
    }

    pub fn phone_values(&self) -> Vec<String> {
        self.phones.iter().map(|p| p.value().to_string()).collect()
    }

    fn position_of(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.value() == value)
    }
}
