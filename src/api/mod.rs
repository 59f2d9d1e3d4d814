//! Client side of the Task Master HTTP API.
//!
//! Every exchange with the server ends in an [`ApiResult`]: either the
//! decoded body or an [`ApiError`] that classifies what went wrong by HTTP
//! status. Callers match on the error instead of wiring separate success
//! and failure callbacks.
//!
//! ## Modules
//!
//! - [`tasks`]: the task endpoints (`/api/tasks/...`), implementing [`TaskStore`]
//! - [`auth`]: login, logout, registration and username availability
//! - [`page`]: values scraped from the server-rendered pages (CSRF token, user id)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmaster::api::{tasks::TaskApi, ListFilter, TaskStore};
//! use taskmaster::libs::session::Session;
//!
//! # async fn run() -> Result<(), taskmaster::api::ApiError> {
//! let api = TaskApi::new("http://localhost:8000", Session::default());
//! let tasks = api.list(&ListFilter::default()).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::task::{CompletionStatus, RecurrenceKind, Task, TaskId};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

pub mod auth;
pub mod page;
pub mod tasks;

pub type ApiResult<T> = Result<T, ApiError>;

/// Per-field validation messages from a 400 response.
///
/// The server normally sends a list of messages per field but a bare string
/// is accepted too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

#[derive(Deserialize)]
#[serde(untagged)]
enum Messages {
    Many(Vec<String>),
    One(String),
}

impl<'de> Deserialize<'de> for FieldErrors {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, Messages>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .map(|(field, messages)| match messages {
                    Messages::Many(list) => (field, list),
                    Messages::One(one) => (field, vec![one]),
                })
                .collect(),
        ))
    }
}

impl FieldErrors {
    /// Parses a 400 body; anything that isn't a field map gives no field errors.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// The first message of every field that has one.
    pub fn first_messages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter_map(|(field, messages)| messages.first().map(|m| (field.as_str(), m.as_str())))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(FieldErrors),
    #[error("not authenticated")]
    Unauthenticated,
    #[error("not allowed to access this task")]
    Forbidden,
    #[error("task not found")]
    NotFound,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classifies a non-success status; `body` is only read for 400.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::BAD_REQUEST => ApiError::Validation(FieldErrors::from_body(body)),
            StatusCode::UNAUTHORIZED => ApiError::Unauthenticated,
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::NOT_FOUND => ApiError::NotFound,
            other => ApiError::Status(other.as_u16()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Query for the task list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub user_id: Option<i64>,
    pub kind: Option<RecurrenceKind>,
    pub completed_only: bool,
}

impl ListFilter {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(user_id) = self.user_id {
            query.push(("user_id", user_id.to_string()));
        }
        if let Some(kind) = self.kind {
            query.push((kind.flag(), "true".to_string()));
        }
        if self.completed_only {
            query.push(("completed", "true".to_string()));
        }
        query
    }
}

/// The remote task store.
#[allow(async_fn_in_trait)]
pub trait TaskStore {
    async fn list(&self, filter: &ListFilter) -> ApiResult<Vec<Task>>;

    /// Creates a task from a form payload and returns it as stored.
    async fn create(&self, payload: &Value) -> ApiResult<Task>;

    async fn fetch(&self, id: TaskId) -> ApiResult<Task>;

    /// Replaces a task with a form payload.
    async fn update(&self, id: TaskId, payload: &Value) -> ApiResult<Task>;

    async fn delete(&self, id: TaskId) -> ApiResult<()>;

    /// Flips completion; the returned state is the server's decision.
    async fn toggle_complete(&self, id: TaskId) -> ApiResult<CompletionStatus>;
}
