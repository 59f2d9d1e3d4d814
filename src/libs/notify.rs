//! Toasts and confirmation dialogs.
//!
//! The controller never prints: it hands [`Toast`]s to a [`Notifier`] and
//! asks a [`Dialog`] for confirmation. The console implementations route
//! toasts through the message macros and confirmations through dialoguer.

use super::messages::Message;
use crate::{msg_error, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: Message,
}

impl Toast {
    pub fn success(message: Message) -> Self {
        Self {
            level: ToastLevel::Success,
            message,
        }
    }

    pub fn error(message: Message) -> Self {
        Self {
            level: ToastLevel::Error,
            message,
        }
    }
}

pub trait Notifier {
    fn notify(&mut self, toast: Toast);
}

pub trait Dialog {
    /// Shows the prompt and waits for an answer.
    fn confirm(&mut self, prompt: &Message) -> Result<bool>;

    /// Closes the dialog after the confirmed action succeeded.
    fn close(&mut self);
}

#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, toast: Toast) {
        match toast.level {
            ToastLevel::Success => msg_success!(toast.message),
            ToastLevel::Error => msg_error!(toast.message),
        }
    }
}

/// Confirmation on the terminal; `assume_yes` skips the prompt.
#[derive(Debug, Default)]
pub struct ConsoleDialog {
    pub assume_yes: bool,
}

impl Dialog for ConsoleDialog {
    fn confirm(&mut self, prompt: &Message) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .default(false)
            .interact()?)
    }

    fn close(&mut self) {}
}
