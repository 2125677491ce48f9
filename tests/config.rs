#[cfg(test)]
mod tests {
    use actime::api::ActiveCollabConfig;
    use actime::libs::config::{Config, SyncConfig};
    use actime::libs::data_storage::DataStorage;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Tests in this file redirect HOME, so they must not overlap.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
        api_url: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
                api_url: "https://ac.example.com/api.php".to_string(),
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.activecollab.is_none());
        assert!(config.sync.is_none());
        assert_eq!(config.sync_or_default(), SyncConfig::default());
    }

    #[test]
    fn test_default_sync_config() {
        let sync = SyncConfig::default();
        assert_eq!(sync.daily_hours, 8.0);
        assert_eq!(sync.step, 0.5);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            activecollab: Some(ActiveCollabConfig {
                api_url: ctx.api_url.clone(),
            }),
            sync: Some(SyncConfig {
                daily_hours: 6.0,
                step: 0.25,
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config.activecollab.as_ref().unwrap().api_url, ctx.api_url);
        assert_eq!(read_config.sync_or_default().daily_hours, 6.0);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_sections_are_not_written(_ctx: &mut ConfigTestContext) {
        Config::default().save().unwrap();
        let path = DataStorage::new().get_path("config.json").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap().trim(), "{}");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(ctx: &mut ConfigTestContext) {
        Config {
            activecollab: Some(ActiveCollabConfig {
                api_url: ctx.api_url.clone(),
            }),
            sync: None,
        }
        .save()
        .unwrap();

        Config::delete().unwrap();
        assert_eq!(Config::read().unwrap(), Config::default());
        // Deleting twice is fine.
        Config::delete().unwrap();
    }
}
