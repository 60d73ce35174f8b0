#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === LIFECYCLE MESSAGES ===
    TaskStarted(String, String), // tag, start time
    AlreadyWorkingOn(String),
    TaskPaused(String),
    TaskAlreadyPaused(String),
    TaskResumed(String),
    TaskResumedFromStart(String),
    TaskAlreadyInProgress(String),
    TaskFinished(String, String), // tag, duration
    TaskAborted(String),
    TaskReset(String),
    NoTaskRunning,

    // === STATUS MESSAGES ===
    StatusTag(String),
    StatusStartedAt(String),
    StatusState(String),
    StatusElapsed(String),

    // === TAG MESSAGES ===
    UnknownTag(String, String), // tag, valid tags
    FallingBackToTag(String),
    TagsConfigured(String),

    // === STORE MESSAGES ===
    ConfirmClearDatabase,
    DatabaseCleared(usize),
    NoCompletedTasks,
    RecentTasksHeader(u32),
    ReportHeader,
    CorruptStateHint(String), // path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError(String), // path
    ConfigModuleTags,
    PromptSelectTags,
    PromptCustomTags,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
