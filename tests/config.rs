#[cfg(test)]
mod tests {
    use kanbo::db::tasks::IdStrategy;
    use kanbo::libs::config::{Config, CONFIG_FILE_NAME};
    use kanbo::libs::data_storage::DataStorage;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_missing_file_uses_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config.statuses, vec!["todo", "doing", "done"]);
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_read_roundtrip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            statuses: vec!["backlog".to_string(), "active".to_string(), "shipped".to_string()],
            id_strategy: IdStrategy::Max,
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, r#"{"id_strategy":"max"}"#).unwrap();

        let config = Config::read().unwrap();
        assert_eq!(config.statuses, vec!["todo", "doing", "done"]);
        assert_eq!(config.id_strategy, IdStrategy::Max);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupted_file_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(&path, "not json").unwrap();

        assert!(Config::read().is_err());
    }
}
