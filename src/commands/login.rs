use crate::api::auth::AuthApi;
use crate::libs::auth::{AuthForms, AuthMode};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username; prompted for when omitted
    #[arg(short, long)]
    username: Option<String>,
}

pub async fn cmd(args: LoginArgs) -> Result<()> {
    let config = Config::read()?;
    let api = AuthApi::new(&config.base_url()?)?;
    let theme = ColorfulTheme::default();

    let mut forms = AuthForms::new();
    forms.toggle(AuthMode::Login);
    if let Some(form) = forms.login_mut() {
        form.username = match args.username {
            Some(username) => username,
            None => Input::with_theme(&theme)
                .with_prompt(Message::PromptUsername.to_string())
                .interact_text()?,
        };
        form.password = Password::with_theme(&theme)
            .with_prompt(Message::PromptPassword.to_string())
            .interact()?;
    }

    let issues = forms.validate();
    if !issues.is_empty() {
        for issue in issues {
            msg_error!(issue.message);
        }
        msg_bail_anyhow!(Message::LoginFailed);
    }

    let Some(form) = forms.login_mut() else {
        msg_bail_anyhow!(Message::LoginFailed);
    };
    let session = match api.login(&form.username, &form.password).await {
        Ok(session) => session,
        Err(_) => msg_bail_anyhow!(Message::LoginFailed),
    };
    session.save()?;
    msg_success!(Message::LoggedIn(form.username.clone()));
    forms.teardown();
    Ok(())
}
