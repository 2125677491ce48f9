#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleActiveCollab,
    ConfigModuleSync,
    ActiveCollabConfigNotFound,

    // === HOURS FILE MESSAGES ===
    HoursFileNotFound(String), // path
    HoursFileInvalid(String),  // parse error
    HoursFileCreated(String),  // path
    HoursFileLoaded(usize),    // ticket count
    HoursFileEmpty,
    LaunchingEditor(String), // editor command
    EditorFailed(String),    // error

    // === DATE MESSAGES ===
    NoDateSpecified,
    InvalidDateFormat(String), // input
    WeekRange { start: String, end: String },

    // === SYNC MESSAGES ===
    CommitDisabled,
    UserIdUnresolved,
    NoRemoteProjects,
    NoTicketsConfigured,
    DayAlreadyLoaded { project: String, date: String },
    RandomValuesExhausted { ticket: String, date: String },
    IntentPlanned { date: String, project: String, ticket: String, hours: f64 },
    IntentSubmitting { date: String, project: String, ticket: String, hours: f64 },
    TimeRecordCreated(u64),
    TimeRecordRejected { ticket: String, errors: String },
    SyncSummary { planned: usize, created: usize, rejected: usize, skipped_days: usize },
    SyncNothingToDo,

    // === API MESSAGES ===
    ApiRequestFailed(String), // error
    ApiMalformedResponse(String), // path_info

    // === TOKEN MESSAGES ===
    TokenStored,

    // === PROMPTS ===
    PromptSelectModules,
    PromptApiUrl,
    PromptApiToken,
    PromptDailyHours,
    PromptStep,
    PromptWeekDate,
    PromptCreateHoursFile,
}
