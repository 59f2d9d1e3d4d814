//! Display implementation for taskmaster messages.
//!
//! All message text is defined here, in one place. Toasts raised by the
//! synchronization controller, validation messages of the auth forms and
//! the prompts of the interactive commands all come through this impl.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(title) => format!("Task '{}' has been added successfully.", title),
            Message::TaskEdited(title) => format!("Task '{}' has been edited successfully.", title),
            Message::TaskDeleted(title) => format!("Task '{}' has been deleted.", title),
            Message::TaskCompleted(title) => format!("Task '{}' has been completed.", title),
            Message::TaskReopened(title) => format!("Task '{}' is no longer completed.", title),
            Message::ConfirmDeleteTask(title) => format!("Are you sure you want to delete task {} ?", title),
            Message::DeleteCancelled => "Deletion cancelled.".to_string(),
            Message::FillAllFields => "Please fill all the fields.".to_string(),
            Message::FieldError { field, message } => format!("{}: {}", field, message),
            Message::TasksHeader(kind) => format!("{} tasks", kind),
            Message::NoTasks => "No tasks yet.".to_string(),
            Message::PageFooter { page, pages, records } => {
                format!("Page {} of {} ({} tasks)", page, pages, records)
            }
            Message::EditFormHeader(title) => format!("Editing task '{}'", title),
            Message::AddFormHeader => "New task".to_string(),

            // === REQUEST FAILURES ===
            Message::SomethingWentWrong => "Something went wrong.".to_string(),
            Message::NotAuthenticated => "You are not authenticated. Please login first.".to_string(),
            Message::Unauthorized(operation) => format!("You are unauthorized to {} this task.", operation.verb()),
            Message::TaskNotFound => "Task is not found.".to_string(),
            Message::GenericError => "An error occurred. Please try again later.".to_string(),

            // === AUTH MESSAGES ===
            Message::LoggedIn(username) => format!("Logged in as {}.", username),
            Message::LoginFailed => "Invalid username or password.".to_string(),
            Message::LoggedOut => "Logged out successfully.".to_string(),
            Message::Registered => "Registration successful. You can now log in.".to_string(),
            Message::RegisterFailed => "Registration failed. Please check the form and try again.".to_string(),
            Message::CheckingAvailability => "Checking availability...".to_string(),
            Message::FullnameRequired => "Please enter your full name".to_string(),
            Message::FullnameLettersOnly => "Full name should only contain alphabetic characters".to_string(),
            Message::UsernameRequired => "Please enter your username".to_string(),
            Message::UsernameTaken => "This username is already taken".to_string(),
            Message::PasswordRequired => "Please enter your password".to_string(),
            Message::PasswordTooShort => "Password must be at least 8 characters long".to_string(),
            Message::PasswordNeedsUppercase => "Password must contain at least one uppercase letter.".to_string(),
            Message::PasswordNeedsLowercase => "Password must contain at least one lowercase letter.".to_string(),
            Message::PasswordNeedsDigit => "Password must contain at least one digit.".to_string(),
            Message::PasswordNeedsSymbol => "Password must contain at least one special character.".to_string(),
            Message::ConfirmPasswordRequired => "Please confirm your password".to_string(),
            Message::PasswordsDoNotMatch => "Passwords do not match".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully.".to_string(),
            Message::ConfigServerMissing => {
                "Server URL is not configured. Run 'taskmaster init' or set TASKMASTER_URL.".to_string()
            }
            Message::OwnerUnknown => "Unknown user id. Log in again or set it with 'taskmaster init'.".to_string(),
            Message::PromptServerUrl => "Enter the Task Master server URL".to_string(),
            Message::PromptUserId => "Enter your user id (leave 0 to read it at login)".to_string(),
            Message::PromptPageSize => "Rows per page".to_string(),
            Message::PromptWeekStart => "First day of the week".to_string(),
            Message::PromptFullname => "Full name".to_string(),
            Message::PromptUsername => "Username".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptConfirmPassword => "Confirm password".to_string(),
            Message::PromptTitle => "Title".to_string(),
            Message::PromptDescription => "Description".to_string(),
            Message::PromptExecutionTime => "Execution time (HH:MM)".to_string(),
            Message::PromptExecutionDay => "Execution day".to_string(),
            Message::PromptExecutionDate => "Execution day of month (1-31)".to_string(),
        };
        write!(f, "{}", text)
    }
}
