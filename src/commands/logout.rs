use crate::api::auth::AuthApi;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::msg_success;
use anyhow::Result;
use tracing::warn;

pub async fn cmd() -> Result<()> {
    let session = Session::read()?;
    if session.is_authenticated() {
        let config = Config::read()?;
        if let Err(err) = AuthApi::new(&config.base_url()?)?.logout(&session).await {
            warn!(error = %err, "server-side logout failed");
        }
    }
    Session::delete()?;
    msg_success!(Message::LoggedOut);
    Ok(())
}
