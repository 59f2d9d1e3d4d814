//! Login and registration forms.
//!
//! Only one of the two forms is live at a time. [`AuthForms`] owns the live
//! one; switching forms tears the previous one down first, and
//! [`AuthForms::teardown`] detaches whatever is live.
//!
//! Validation reports at most one message per field: the first rule that
//! fails, in the order the rules are listed.

use super::messages::Message;

/// Passwords shorter than this are rejected at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        if self.username.trim().is_empty() {
            issues.push(issue("username", Message::UsernameRequired));
        }
        if self.password.is_empty() {
            issues.push(issue("password", Message::PasswordRequired));
        }
        issues
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub fullname: String,
    pub username: String,
    pub password1: String,
    pub password2: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();

        if self.fullname.trim().is_empty() {
            issues.push(issue("fullname", Message::FullnameRequired));
        } else if !self.fullname.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()) {
            issues.push(issue("fullname", Message::FullnameLettersOnly));
        }

        if self.username.trim().is_empty() {
            issues.push(issue("username", Message::UsernameRequired));
        }

        if let Some(message) = password_problem(&self.password1) {
            issues.push(issue("password1", message));
        }

        if self.password2.is_empty() {
            issues.push(issue("password2", Message::ConfirmPasswordRequired));
        } else if self.password2 != self.password1 {
            issues.push(issue("password2", Message::PasswordsDoNotMatch));
        }

        issues
    }
}

fn password_problem(password: &str) -> Option<Message> {
    if password.is_empty() {
        Some(Message::PasswordRequired)
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Some(Message::PasswordTooShort)
    } else if !password.chars().any(|c| c.is_ascii_uppercase()) {
        Some(Message::PasswordNeedsUppercase)
    } else if !password.chars().any(|c| c.is_ascii_lowercase()) {
        Some(Message::PasswordNeedsLowercase)
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        Some(Message::PasswordNeedsDigit)
    } else if !password.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        Some(Message::PasswordNeedsSymbol)
    } else {
        None
    }
}

fn issue(field: &'static str, message: Message) -> FieldIssue {
    FieldIssue { field, message }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveForm {
    Login(LoginForm),
    Register(RegisterForm),
}

impl ActiveForm {
    pub fn mode(&self) -> AuthMode {
        match self {
            ActiveForm::Login(_) => AuthMode::Login,
            ActiveForm::Register(_) => AuthMode::Register,
        }
    }

    pub fn validate(&self) -> Vec<FieldIssue> {
        match self {
            ActiveForm::Login(form) => form.validate(),
            ActiveForm::Register(form) => form.validate(),
        }
    }
}

#[derive(Debug, Default)]
pub struct AuthForms {
    active: Option<ActiveForm>,
}

impl AuthForms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates a fresh, empty form for `mode`.
    ///
    /// Returns the form that was live before, already detached.
    pub fn toggle(&mut self, mode: AuthMode) -> Option<ActiveForm> {
        let previous = self.teardown();
        self.active = Some(match mode {
            AuthMode::Login => ActiveForm::Login(LoginForm::default()),
            AuthMode::Register => ActiveForm::Register(RegisterForm::default()),
        });
        previous
    }

    /// Detaches the live form, if any, and returns it.
    pub fn teardown(&mut self) -> Option<ActiveForm> {
        self.active.take()
    }

    pub fn mode(&self) -> Option<AuthMode> {
        self.active.as_ref().map(ActiveForm::mode)
    }

    pub fn active(&self) -> Option<&ActiveForm> {
        self.active.as_ref()
    }

    pub fn login_mut(&mut self) -> Option<&mut LoginForm> {
        match &mut self.active {
            Some(ActiveForm::Login(form)) => Some(form),
            _ => None,
        }
    }

    pub fn register_mut(&mut self) -> Option<&mut RegisterForm> {
        match &mut self.active {
            Some(ActiveForm::Register(form)) => Some(form),
            _ => None,
        }
    }

    /// Validates the live form; no live form has nothing to report.
    pub fn validate(&self) -> Vec<FieldIssue> {
        self.active.as_ref().map(ActiveForm::validate).unwrap_or_default()
    }
}
