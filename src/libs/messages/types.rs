#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i32),
    TaskUpdated(i32),
    TaskDeleted(i32),
    TaskNotFoundWithId(i32),
    TasksHeader,
    NoTasksFound,
    ConfirmDeleteTask(i32),
    UnknownStatus(String),
    EditingTask(i32),

    // === BOARD MESSAGES ===
    BoardsHeader,
    BoardHeader(String),
    NoBoardsFound,
    BoardSwitched(String),
    BoardNotFound(String),
    BoardEmpty(String),

    // === STORAGE MESSAGES ===
    StorageInitialized,
    StorageAlreadyInitialized,
    DemoDataSeeded(usize),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,

    // === UI STATE MESSAGES ===
    ThemeLightEnabled,
    ThemeLightDisabled,
    SidebarShown,
    SidebarHidden,

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskStatus,
    PromptTaskBoard,
    PromptStatuses,
    PromptIdStrategy,

    // === GENERIC ===
    OperationCancelled,
}
