#[cfg(test)]
mod tests {
    use actime::libs::hours::{HoursTree, HOURS_FILE_NAME};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct HoursTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for HoursTestContext {
        fn setup() -> Self {
            HoursTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl HoursTestContext {
        fn path(&self) -> PathBuf {
            self.temp_dir.path().join(HOURS_FILE_NAME)
        }
    }

    #[test]
    fn test_ticket_count_flattens_all_levels() {
        let hours = HoursTree::parse(
            r#"{
                "Alpha": {
                    "Sprint1": { "Fix bug": 2.0, "Write docs": 1.0 },
                    "Sprint2": { "Fix bug": 3.0 }
                },
                "Beta": {
                    "Backlog": { "Fix bug": 1.5 },
                    "Empty": {}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(hours.ticket_count(), 4);
        assert!(!hours.is_empty());
    }

    #[test]
    fn test_tree_without_tickets_is_empty() {
        let hours = HoursTree::parse(r#"{ "Alpha": { "Sprint1": {} }, "Beta": {} }"#).unwrap();
        assert_eq!(hours.ticket_count(), 0);
        assert!(hours.is_empty());
    }

    #[test]
    fn test_non_object_root_is_invalid() {
        for content in ["[1, 2]", "42", "\"Alpha\"", "null"] {
            let err = HoursTree::parse(content).unwrap_err();
            assert!(err.to_string().contains("Hours file is not valid"), "{}", content);
        }
    }

    #[test]
    fn test_wrong_nesting_is_invalid() {
        assert!(HoursTree::parse(r#"{ "Alpha": { "Fix bug": 2.0 } }"#).is_err());
        assert!(HoursTree::parse(r#"{ "Alpha": { "Sprint1": { "Fix bug": "two" } } }"#).is_err());
    }

    #[test_context(HoursTestContext)]
    #[test]
    fn test_save_and_load(ctx: &mut HoursTestContext) {
        let sample = HoursTree::sample();
        sample.save(&ctx.path()).unwrap();

        let loaded = HoursTree::load(&ctx.path()).unwrap();
        assert_eq!(loaded, sample);
        assert!(loaded.ticket_count() > 0);
    }

    #[test_context(HoursTestContext)]
    #[test]
    fn test_load_broken_file(ctx: &mut HoursTestContext) {
        fs::write(ctx.path(), "Alpha:\n  Sprint1:\n    Fix bug: 2\n").unwrap();
        assert!(HoursTree::load(&ctx.path()).is_err());
    }

    #[test_context(HoursTestContext)]
    #[test]
    fn test_load_missing_file(ctx: &mut HoursTestContext) {
        assert!(HoursTree::load(&ctx.path()).is_err());
    }
}
