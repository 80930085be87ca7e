//! Repository Integration Tests
//!
//! TodoRepository against in-memory and file-backed storage.

#[cfg(test)]
mod tests {
    use crate::config::StoreConfig;
    use crate::domain::{StoreError, StoreResult, Todo};
    use crate::repository::{
        FileStorage, KeyValueStorage, MemoryStorage, SequentialIds, TodoRepository,
    };

    /// Storage whose writes always fail, like a full localStorage quota
    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> StoreResult<Option<String>> {
            Ok(None)
        }

        fn set_item(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Storage("QuotaExceededError".to_string()))
        }
    }

    fn setup_repo() -> (MemoryStorage, TodoRepository<MemoryStorage, SequentialIds>) {
        let storage = MemoryStorage::new();
        let repo = TodoRepository::new(storage.clone()).with_ids(SequentialIds::new());
        (storage, repo)
    }

    #[test]
    fn test_load_from_empty_storage() {
        let (_, repo) = setup_repo();
        assert!(repo.load_todos().expect("Load failed").is_empty());
    }

    #[test]
    fn test_save_writes_full_array_under_todos_key() {
        let (storage, repo) = setup_repo();
        let todos = vec![Todo::new("1", "Buy milk"), Todo::new("2", "Walk dog")];

        repo.save_todos(&todos).expect("Save failed");

        assert_eq!(
            storage.raw("todos").as_deref(),
            Some(r#"[{"value":"Buy milk","id":"1"},{"value":"Walk dog","id":"2"}]"#)
        );
        assert_eq!(repo.load_todos().unwrap(), todos);
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let storage = MemoryStorage::with_item("todos", "{not json");
        let repo = TodoRepository::new(storage);

        let err = repo.load_todos().unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[test]
    fn test_non_array_top_level_is_a_parse_error() {
        let storage = MemoryStorage::with_item("todos", r#"{"todos":[]}"#);
        let repo = TodoRepository::new(storage);
        assert!(matches!(repo.load_todos(), Err(StoreError::Parse(_))));
    }

    #[test]
    fn test_records_with_null_or_missing_fields_still_load() {
        let storage = MemoryStorage::with_item("todos", r#"[{"value":null,"id":"a"}]"#);
        let loaded = TodoRepository::new(storage).load_todos().expect("Load failed");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "a");
        assert_eq!(loaded[0].value, "");

        let storage = MemoryStorage::with_item("todos", r#"[{"value":"x"}]"#);
        let loaded = TodoRepository::new(storage).load_todos().expect("Load failed");
        assert_eq!(loaded[0].value, "x");
        assert_eq!(loaded[0].id, "");
    }

    #[test]
    fn test_write_failure_propagates() {
        let repo = TodoRepository::new(ReadOnlyStorage);
        let err = repo.save_todos(&[Todo::new("1", "x")]).unwrap_err();
        assert!(matches!(err, StoreError::Storage(msg) if msg == "QuotaExceededError"));
    }

    #[test]
    fn test_custom_storage_key() {
        let storage = MemoryStorage::new();
        let config = StoreConfig {
            storage_key: "work-todos".to_string(),
        };
        let repo = TodoRepository::with_config(storage.clone(), SequentialIds::new(), config);

        repo.save_todos(&[Todo::new("1", "Ship it")]).unwrap();

        assert!(storage.raw("todos").is_none());
        assert!(storage.raw("work-todos").is_some());
    }

    #[test]
    fn test_file_storage_persists_across_repositories() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let first = TodoRepository::new(FileStorage::new(dir.path()));
        first.save_todos(&[Todo::new("1", "Persist me")]).unwrap();

        let second = TodoRepository::new(FileStorage::new(dir.path()));
        let loaded = second.load_todos().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].value, "Persist me");
    }
}
