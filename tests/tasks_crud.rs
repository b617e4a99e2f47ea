#[cfg(test)]
mod tests {
    use kanbo::db::store::{Store, KEY_TASKS};
    use kanbo::db::tasks::{IdStrategy, Tasks};
    use kanbo::libs::task::{Task, TaskDraft, TaskFilter, TaskPatch};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct TaskTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    fn task(id: i32, title: &str, status: &str, board: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: String::new(),
            status: status.to_string(),
            board: board.to_string(),
        }
    }

    fn seed(tasks: &[Task]) {
        let mut store = Store::new().unwrap();
        store.set(KEY_TASKS, &serde_json::to_string(tasks).unwrap()).unwrap();
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_on_empty_storage(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let created = tasks.create(&TaskDraft::new("First", "", "todo", "Dev")).unwrap();

        assert_eq!(created.id, 1);
        let all = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], created);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_sequential_ids(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        for i in 1..=3 {
            let created = tasks.create(&TaskDraft::new(&format!("Task {}", i), "", "todo", "Dev")).unwrap();
            assert_eq!(created.id, i);
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_id_from_last_element_not_max(_ctx: &mut TaskTestContext) {
        // Ids come from the tail of the list, so deleting the highest id
        // makes it available for reuse.
        seed(&[task(1, "One", "todo", "Dev"), task(10, "Ten", "todo", "Dev")]);

        let mut tasks = Tasks::new().unwrap();
        assert!(tasks.delete(10).unwrap());

        let created = tasks.create(&TaskDraft::new("New", "", "todo", "Dev")).unwrap();
        assert_eq!(created.id, 2);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_id_strategies_diverge(_ctx: &mut TaskTestContext) {
        // A higher id sitting before the tail is invisible to the
        // sequential policy but not to the max policy.
        seed(&[task(10, "Ten", "todo", "Dev"), task(1, "One", "todo", "Dev")]);

        let mut sequential = Tasks::new().unwrap();
        let created = sequential.create(&TaskDraft::new("Seq", "", "todo", "Dev")).unwrap();
        assert_eq!(created.id, 2);

        seed(&[task(10, "Ten", "todo", "Dev"), task(1, "One", "todo", "Dev")]);

        let mut max_based = Tasks::with_strategy(IdStrategy::Max).unwrap();
        let created = max_based.create(&TaskDraft::new("Max", "", "todo", "Dev")).unwrap();
        assert_eq!(created.id, 11);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_patch_merges_present_fields(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.create(&TaskDraft::new("Original", "Original desc", "todo", "Dev")).unwrap();

        let patch = TaskPatch {
            status: Some("doing".to_string()),
            ..Default::default()
        };
        let updated = tasks.patch(1, &patch).unwrap().unwrap();

        assert_eq!(updated.status, "doing");
        assert_eq!(updated.title, "Original");
        assert_eq!(updated.description, "Original desc");
        assert_eq!(updated.board, "Dev");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_patch_not_found(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let patch = TaskPatch {
            title: Some("Nope".to_string()),
            ..Default::default()
        };
        assert!(tasks.patch(42, &patch).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_put_overwrites_whole_record(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.create(&TaskDraft::new("Original", "Keep me?", "todo", "Dev")).unwrap();

        let replacement = task(1, "Replaced", "done", "Dev");
        let updated = tasks.put(1, &replacement).unwrap().unwrap();

        assert_eq!(updated, replacement);
        assert_eq!(tasks.get_by_id(1).unwrap().unwrap().description, "");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_put_keeps_addressed_id(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.create(&TaskDraft::new("Original", "", "todo", "Dev")).unwrap();

        // A mismatched id in the payload does not re-number the record.
        let replacement = task(99, "Replaced", "todo", "Dev");
        let updated = tasks.put(1, &replacement).unwrap().unwrap();
        assert_eq!(updated.id, 1);
        assert!(tasks.get_by_id(99).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_put_not_found(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        assert!(tasks.put(7, &task(7, "Ghost", "todo", "Dev")).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.create(&TaskDraft::new("Doomed", "", "todo", "Dev")).unwrap();

        assert!(tasks.delete(1).unwrap());
        assert!(!tasks.delete(1).unwrap());
        assert_eq!(tasks.fetch(TaskFilter::All).unwrap().len(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_mutation_sequence_net_effect(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.create(&TaskDraft::new("A", "", "todo", "Dev")).unwrap();
        tasks.create(&TaskDraft::new("B", "", "todo", "Dev")).unwrap();
        tasks.create(&TaskDraft::new("C", "", "todo", "Dev")).unwrap();
        tasks.delete(2).unwrap();
        tasks
            .patch(
                3,
                &TaskPatch {
                    title: Some("C2".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let all = tasks.fetch(TaskFilter::All).unwrap();
        let summary: Vec<(i32, &str)> = all.iter().map(|t| (t.id, t.title.as_str())).collect();
        assert_eq!(summary, vec![(1, "A"), (3, "C2")]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_filters(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.create(&TaskDraft::new("A", "", "todo", "Dev")).unwrap();
        tasks.create(&TaskDraft::new("B", "", "done", "Dev")).unwrap();
        tasks.create(&TaskDraft::new("C", "", "todo", "Home")).unwrap();

        assert_eq!(tasks.fetch(TaskFilter::All).unwrap().len(), 3);
        assert_eq!(tasks.fetch(TaskFilter::Board("Dev".to_string())).unwrap().len(), 2);

        let filtered = tasks
            .fetch(TaskFilter::BoardStatus("Dev".to_string(), "todo".to_string()))
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "A");
    }
}
