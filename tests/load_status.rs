#[cfg(test)]
mod tests {
    use actime::api::{TimeEntry, UserRef};
    use actime::libs::load_status::{is_day_loaded, record_day};
    use chrono::NaiveDate;

    const USER: u64 = 7;

    fn entry(record_date: &str, user: u64) -> TimeEntry {
        TimeEntry {
            record_date: record_date.to_string(),
            user: Some(UserRef { id: user }),
            user_id: None,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_day_loaded_by_current_user() {
        let entries = vec![entry("2024-01-08", USER)];
        assert!(is_day_loaded(day(8), &entries, USER));
        assert!(!is_day_loaded(day(9), &entries, USER));
    }

    #[test]
    fn test_time_of_day_suffix_is_tolerated() {
        let entries = vec![entry("2024-01-08 00:00:00", USER)];
        assert!(is_day_loaded(day(8), &entries, USER));
    }

    #[test]
    fn test_other_users_entries_do_not_count() {
        let entries = vec![entry("2024-01-08", 99)];
        assert!(!is_day_loaded(day(8), &entries, USER));
    }

    #[test]
    fn test_flat_user_id_is_used_when_nested_is_missing() {
        let entries = vec![TimeEntry {
            record_date: "2024-01-08".to_string(),
            user: None,
            user_id: Some(USER),
        }];
        assert!(is_day_loaded(day(8), &entries, USER));
    }

    #[test]
    fn test_partial_dates_are_not_a_match() {
        // "2024-01-0" is contained in "2024-01-05" textually; it is not a date.
        let entries = vec![entry("2024-01-0", USER), entry("garbage", USER)];
        assert!(!is_day_loaded(day(5), &entries, USER));
        assert_eq!(record_day(&entries[0]), None);
    }

    #[test]
    fn test_no_entries_means_not_loaded() {
        assert!(!is_day_loaded(day(8), &[], USER));
    }
}
