use crate::api::auth::{AuthApi, Registration};
use crate::libs::auth::{AuthForms, AuthMode};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error, msg_info, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password};

pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let api = AuthApi::new(&config.base_url()?)?;
    let theme = ColorfulTheme::default();

    let mut forms = AuthForms::new();
    forms.toggle(AuthMode::Register);
    let Some(form) = forms.register_mut() else {
        msg_bail_anyhow!(Message::RegisterFailed);
    };
    form.fullname = Input::with_theme(&theme)
        .with_prompt(Message::PromptFullname.to_string())
        .allow_empty(true)
        .interact_text()?;
    form.username = Input::with_theme(&theme)
        .with_prompt(Message::PromptUsername.to_string())
        .allow_empty(true)
        .interact_text()?;
    form.password1 = Password::with_theme(&theme)
        .with_prompt(Message::PromptPassword.to_string())
        .allow_empty_password(true)
        .interact()?;
    form.password2 = Password::with_theme(&theme)
        .with_prompt(Message::PromptConfirmPassword.to_string())
        .allow_empty_password(true)
        .interact()?;
    let registration = Registration {
        fullname: form.fullname.trim().to_string(),
        username: form.username.trim().to_string(),
        password1: form.password1.clone(),
        password2: form.password2.clone(),
    };

    let issues = forms.validate();
    forms.teardown();
    if !issues.is_empty() {
        for issue in issues {
            msg_error!(Message::FieldError {
                field: issue.field.to_string(),
                message: issue.message.to_string(),
            });
        }
        msg_bail_anyhow!(Message::RegisterFailed);
    }

    msg_info!(Message::CheckingAvailability);
    if !api.check_username_availability(&registration.username).await? {
        msg_bail_anyhow!(Message::UsernameTaken);
    }

    match api.register(&registration).await {
        Ok(()) => {
            msg_success!(Message::Registered);
            Ok(())
        }
        Err(_) => msg_bail_anyhow!(Message::RegisterFailed),
    }
}
