//! Monday to Friday week spans.

use chrono::{Datelike, Duration, NaiveDate};

/// Working week containing an anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Week {
    pub fn of(anchor: NaiveDate) -> Self {
        let (start, end) = week_of(anchor);
        Self { start, end }
    }

    /// Monday through Friday, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + Clone {
        days_between(self.start, self.end)
    }
}

/// Monday and Friday of the week containing `anchor`.
pub fn week_of(anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = anchor - Duration::days(anchor.weekday().num_days_from_monday() as i64);
    (monday, monday + Duration::days(4))
}

/// Every date from `start` to `end`, both included. Empty when `end` is
/// before `start`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> + Clone {
    start.iter_days().take_while(move |day| *day <= end)
}
