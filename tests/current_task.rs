#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use std::fs;
    use std::path::PathBuf;
    use tasktrack::libs::current_task::{parse_timestamp, ActiveTask, CurrentTaskFile, TaskStatus};
    use tasktrack::libs::error::TrackerError;
    use tasktrack::libs::tag::TagVocabulary;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const EMPTY_RECORD: &str = r#"{"tag":"NONE","start_time":null,"last_resumed":null,"duration":0.0,"status":null}"#;

    struct StateFileContext {
        temp_dir: TempDir,
    }

    impl TestContext for StateFileContext {
        fn setup() -> Self {
            StateFileContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl StateFileContext {
        fn path(&self) -> PathBuf {
            self.temp_dir.path().join("current_task.json")
        }

        fn file(&self) -> CurrentTaskFile {
            CurrentTaskFile::new(self.path(), TagVocabulary::default())
        }
    }

    fn at(time: &str) -> NaiveDateTime {
        parse_timestamp(time).unwrap()
    }

    fn paused_task() -> ActiveTask {
        let vocabulary = TagVocabulary::default();
        let mut task = ActiveTask::start(vocabulary.resolve("meeting").unwrap(), at("2024-05-02 08:30:00"));
        task.last_resumed = at("2024-05-02 09:10:15");
        task.duration = 1834.0;
        task.status = TaskStatus::Paused;
        task
    }

    #[test_context(StateFileContext)]
    #[test]
    fn test_first_run_creates_empty_record(ctx: &mut StateFileContext) {
        assert!(!ctx.path().exists());

        let current = ctx.file().load().unwrap();

        assert_eq!(current, None);
        assert_eq!(fs::read_to_string(ctx.path()).unwrap(), EMPTY_RECORD);
    }

    #[test_context(StateFileContext)]
    #[test]
    fn test_missing_parent_directory_is_created(ctx: &mut StateFileContext) {
        let nested = ctx.temp_dir.path().join("nested").join("current_task.json");
        let file = CurrentTaskFile::new(&nested, TagVocabulary::default());

        assert_eq!(file.load().unwrap(), None);
        assert!(nested.exists());
    }

    #[test_context(StateFileContext)]
    #[test]
    fn test_save_then_load_returns_same_task(ctx: &mut StateFileContext) {
        let task = paused_task();
        let file = ctx.file();

        file.save(&Some(task.clone())).unwrap();

        assert_eq!(file.load().unwrap(), Some(task));
    }

    #[test_context(StateFileContext)]
    #[test]
    fn test_save_of_loaded_state_is_byte_identical(ctx: &mut StateFileContext) {
        let file = ctx.file();
        file.save(&Some(paused_task())).unwrap();
        let before = fs::read(ctx.path()).unwrap();

        let loaded = file.load().unwrap();
        file.save(&loaded).unwrap();

        assert_eq!(fs::read(ctx.path()).unwrap(), before);
    }

    #[test_context(StateFileContext)]
    #[test]
    fn test_state_file_uses_documented_fields(ctx: &mut StateFileContext) {
        ctx.file().save(&Some(paused_task())).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(ctx.path()).unwrap()).unwrap();
        assert_eq!(value["tag"], "MEETING");
        assert_eq!(value["start_time"], "2024-05-02 08:30:00");
        assert_eq!(value["last_resumed"], "2024-05-02 09:10:15");
        assert_eq!(value["duration"], 1834.0);
        assert_eq!(value["status"], "PAUSED");
    }

    #[test_context(StateFileContext)]
    #[test]
    fn test_save_leaves_no_temporary_file(ctx: &mut StateFileContext) {
        ctx.file().save(&Some(paused_task())).unwrap();
        ctx.file().save(&None).unwrap();

        let entries: Vec<_> = fs::read_dir(ctx.temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(entries, vec!["current_task.json".to_string()]);
    }

    #[test_context(StateFileContext)]
    #[test]
    fn test_corrupt_json_is_reported_and_kept(ctx: &mut StateFileContext) {
        fs::write(ctx.path(), "tag = CODING").unwrap();

        let result = ctx.file().load();

        match result {
            Err(TrackerError::CorruptState { path, .. }) => assert_eq!(path, ctx.path()),
            other => panic!("expected CorruptState, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(ctx.path()).unwrap(), "tag = CODING");
    }

    #[test_context(StateFileContext)]
    #[test]
    fn test_tag_outside_vocabulary_in_file_loads(ctx: &mut StateFileContext) {
        let contents = r#"{"tag":"GARDENING","start_time":"2024-05-02 08:30:00","last_resumed":"2024-05-02 08:30:00","duration":0.0,"status":"IN PROGRESS"}"#;
        fs::write(ctx.path(), contents).unwrap();

        let task = ctx.file().load().unwrap().unwrap();
        assert_eq!(task.tag.as_str(), "GARDENING");
        assert_eq!(fs::read_to_string(ctx.path()).unwrap(), contents);
    }

    #[test_context(StateFileContext)]
    #[test]
    fn test_blank_tag_in_file_is_corrupt(ctx: &mut StateFileContext) {
        let contents = r#"{"tag":"  ","start_time":"2024-05-02 08:30:00","last_resumed":"2024-05-02 08:30:00","duration":0.0,"status":"IN PROGRESS"}"#;
        fs::write(ctx.path(), contents).unwrap();

        assert!(matches!(ctx.file().load(), Err(TrackerError::CorruptState { .. })));
        assert_eq!(fs::read_to_string(ctx.path()).unwrap(), contents);
    }

    #[test_context(StateFileContext)]
    #[test]
    fn test_missing_timestamps_are_corrupt(ctx: &mut StateFileContext) {
        let contents = r#"{"tag":"CODING","start_time":null,"last_resumed":null,"duration":0.0,"status":"IN PROGRESS"}"#;
        fs::write(ctx.path(), contents).unwrap();

        assert!(matches!(ctx.file().load(), Err(TrackerError::CorruptState { .. })));
    }

    #[test_context(StateFileContext)]
    #[test]
    fn test_negative_duration_is_corrupt(ctx: &mut StateFileContext) {
        let contents = r#"{"tag":"CODING","start_time":"2024-05-02 08:30:00","last_resumed":"2024-05-02 08:30:00","duration":-3.0,"status":"PAUSED"}"#;
        fs::write(ctx.path(), contents).unwrap();

        assert!(matches!(ctx.file().load(), Err(TrackerError::CorruptState { .. })));
    }

    #[test_context(StateFileContext)]
    #[test]
    fn test_lowercase_tag_in_file_is_accepted(ctx: &mut StateFileContext) {
        let contents = r#"{"tag":"coding","start_time":"2024-05-02 08:30:00","last_resumed":"2024-05-02 08:45:00","duration":60.0,"status":"IN PROGRESS"}"#;
        fs::write(ctx.path(), contents).unwrap();

        let task = ctx.file().load().unwrap().unwrap();
        assert_eq!(task.tag.as_str(), "CODING");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.last_resumed, at("2024-05-02 08:45:00"));
    }

    #[test_context(StateFileContext)]
    #[test]
    fn test_task_survives_vocabulary_change(ctx: &mut StateFileContext) {
        let vocabulary = TagVocabulary::new(["writing", "review"]).unwrap();
        let task = ActiveTask::start(vocabulary.resolve("review").unwrap(), at("2024-05-02 08:30:00"));
        CurrentTaskFile::new(ctx.path(), vocabulary).save(&Some(task.clone())).unwrap();

        assert_eq!(ctx.file().load().unwrap(), Some(task));
    }

    #[test_context(StateFileContext)]
    #[test]
    fn test_failed_rename_removes_temporary_file(ctx: &mut StateFileContext) {
        // A non-empty directory at the target path makes the rename fail
        fs::create_dir(ctx.path()).unwrap();
        fs::write(ctx.path().join("keep"), "x").unwrap();

        let result = ctx.file().save(&Some(paused_task()));

        assert!(matches!(result, Err(TrackerError::StorageUnavailable(_))));
        assert!(!ctx.temp_dir.path().join("current_task.json.tmp").exists());
        assert!(ctx.path().join("keep").exists());
    }
}
