use crate::libs::sync::Operation;

/// Every piece of user-facing text the application prints.
///
/// The wording lives in the `Display` impl (`display.rs`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskEdited(String),
    TaskDeleted(String),
    TaskCompleted(String),
    TaskReopened(String),
    ConfirmDeleteTask(String),
    DeleteCancelled,
    FillAllFields,
    FieldError { field: String, message: String },
    TasksHeader(String),
    NoTasks,
    PageFooter { page: usize, pages: usize, records: usize },
    EditFormHeader(String),
    AddFormHeader,

    // === REQUEST FAILURES ===
    SomethingWentWrong,
    NotAuthenticated,
    Unauthorized(Operation),
    TaskNotFound,
    GenericError,

    // === AUTH MESSAGES ===
    LoggedIn(String),
    LoginFailed,
    LoggedOut,
    Registered,
    RegisterFailed,
    CheckingAvailability,
    FullnameRequired,
    FullnameLettersOnly,
    UsernameRequired,
    UsernameTaken,
    PasswordRequired,
    PasswordTooShort,
    PasswordNeedsUppercase,
    PasswordNeedsLowercase,
    PasswordNeedsDigit,
    PasswordNeedsSymbol,
    ConfirmPasswordRequired,
    PasswordsDoNotMatch,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigServerMissing,
    OwnerUnknown,
    PromptServerUrl,
    PromptUserId,
    PromptPageSize,
    PromptWeekStart,
    PromptFullname,
    PromptUsername,
    PromptPassword,
    PromptConfirmPassword,
    PromptTitle,
    PromptDescription,
    PromptExecutionTime,
    PromptExecutionDay,
    PromptExecutionDate,
}
