use addrbook::book::AddressBook;
use addrbook::error::BookError;
use addrbook::model::{Birthday, Phone, Record};
use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1000i32..=9999, 1u32..=12, 1u32..=31)
        .prop_filter_map("real calendar date", |(y, m, d)| {
            NaiveDate::from_ymd_opt(y, m, d)
        })
}

proptest! {
    #[test]
    fn digit_strings_in_range_are_phones(raw in "[0-9]{10,13}") {
        let phone = Phone::new(&raw).unwrap();
        prop_assert_eq!(phone.value(), raw.as_str());
    }

    #[test]
    fn short_or_long_digit_strings_are_rejected(raw in "[0-9]{0,9}|[0-9]{14,20}") {
        prop_assert!(matches!(Phone::new(&raw), Err(BookError::InvalidPhoneFormat)));
    }

    #[test]
    fn any_non_digit_is_rejected(
        prefix in "[0-9]{5}",
        bad in "[^0-9]",
        suffix in "[0-9]{5}",
    ) {
        let raw = format!("{prefix}{bad}{suffix}");
        prop_assert!(matches!(Phone::new(&raw), Err(BookError::InvalidPhoneFormat)));
    }

    #[test]
    fn real_dates_are_birthdays(date in any_date()) {
        let raw = date.format("%d-%m-%Y").to_string();
        let birthday = Birthday::new(&raw).unwrap();
        prop_assert_eq!(birthday.value(), raw.as_str());
        prop_assert_eq!(birthday.date(), date);
    }

    #[test]
    fn impossible_days_are_rejected(month in 1u32..=12, year in 1000i32..=9999, day in 29u32..=99) {
        let raw = format!("{day:02}-{month:02}-{year}");
        let exists = NaiveDate::from_ymd_opt(year, month, day).is_some();
        prop_assert_eq!(Birthday::new(&raw).is_ok(), exists);
    }

    #[test]
    fn countdown_is_within_a_year(birth in any_date(), today in any_date()) {
        let birthday = Birthday::new(&birth.format("%d-%m-%Y").to_string()).unwrap();
        let days = birthday.days_until(today);
        prop_assert!((0..=365).contains(&days));

        let next = today + Duration::days(days);
        prop_assert_eq!(next, birthday.occurrence_in(next.year()));
    }

    #[test]
    fn yesterday_is_almost_a_year_away(today in any_date()) {
        prop_assume!(today.year() < 9999);
        let yesterday = today - Duration::days(1);
        prop_assume!(yesterday.year() == today.year());
        prop_assume!(!(yesterday.month() == 2 && yesterday.day() == 29));

        let mut record = Record::new("X");
        record.add_birthday(&yesterday.format("%d-%m-%Y").to_string()).unwrap();
        let days = record.days_to_birthday_from(today).unwrap();
        prop_assert!(days == 364 || days == 365);
    }

    #[test]
    fn page_never_exceeds_requested_size(count in 0usize..20, size in 0usize..25) {
        let mut book = AddressBook::new();
        for i in 0..count {
            book.add_record(Record::new(format!("c{i}")));
        }
        let names: Vec<&str> = book.page(size).map(|(name, _)| name).collect();
        prop_assert_eq!(names.len(), count.min(size));
        for (i, name) in names.iter().enumerate() {
            prop_assert_eq!(*name, format!("c{i}"));
        }
    }
}
