//! Persisted login session.
//!
//! After a successful login the session cookie, the CSRF token and the
//! signed-in user's id are written to `.session.json` in the data directory
//! so later commands can talk to the API without logging in again. Logging
//! out, or any 401 from the API, removes the file.

use super::data_storage::DataStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;

pub const SESSION_FILE: &str = ".session.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub session_id: Option<String>,
    pub csrf_token: Option<String>,
    pub user_id: Option<i64>,
}

impl Session {
    /// Loads the stored session; a missing file is an empty session.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(SESSION_FILE)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(SESSION_FILE)?;
        let mut file = fs::OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
        file.write_all(serde_json::to_string_pretty(self)?.as_bytes())?;
        Ok(())
    }

    /// Removes the stored session. A missing file is not an error.
    pub fn delete() -> Result<()> {
        let path = DataStorage::new().get_path(SESSION_FILE)?;
        match fs::remove_file(path) {
            Err(err) if err.kind() != std::io::ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session_id.is_some()
    }

    /// `Cookie` header value for the stored cookies, if there are any.
    pub fn cookie_header(&self) -> Option<String> {
        let cookies: Vec<String> = [
            self.session_id.as_ref().map(|id| format!("sessionid={}", id)),
            self.csrf_token.as_ref().map(|token| format!("csrftoken={}", token)),
        ]
        .into_iter()
        .flatten()
        .collect();
        (!cookies.is_empty()).then(|| cookies.join("; "))
    }
}
