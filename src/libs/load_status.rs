//! Detection of days that already carry the user's time.

use crate::api::TimeEntry;
use chrono::NaiveDate;

/// Date an entry was recorded on, read from the leading `YYYY-MM-DD` of
/// `record_date`. Time-of-day suffixes are ignored.
pub fn record_day(entry: &TimeEntry) -> Option<NaiveDate> {
    NaiveDate::parse_and_remainder(entry.record_date.trim(), "%Y-%m-%d")
        .ok()
        .map(|(date, _)| date)
}

/// True when `user_id` already has an entry dated exactly `day`.
pub fn is_day_loaded(day: NaiveDate, entries: &[TimeEntry], user_id: u64) -> bool {
    entries
        .iter()
        .any(|entry| entry.owner_id() == Some(user_id) && record_day(entry) == Some(day))
}
