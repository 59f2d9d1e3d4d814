//! Task endpoints of the Task Master API.

use super::{ApiError, ApiResult, ListFilter, TaskStore};
use crate::libs::session::Session;
use crate::libs::task::{CompletionStatus, Task, TaskId};
use reqwest::{
    header::{HeaderMap, HeaderValue, COOKIE, REFERER},
    Client, RequestBuilder, Response,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

const TASKS_URL: &str = "api/tasks/";
pub const CSRF_HEADER: &str = "X-CSRFToken";

pub struct TaskApi {
    client: Client,
    base_url: String,
    session: Session,
}

impl TaskApi {
    pub fn new(base_url: &str, session: Session) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn task_url(&self, id: TaskId, action: Option<&str>) -> String {
        match action {
            Some(action) => self.url(&format!("{}{}/{}/", TASKS_URL, id, action)),
            None => self.url(&format!("{}{}/", TASKS_URL, id)),
        }
    }

    /// Session cookie on every request; CSRF token and referer on mutating ones.
    fn headers(&self, mutating: bool) -> ApiResult<HeaderMap> {
        let invalid = |_| ApiError::Transport("invalid header value".to_string());
        let mut headers = HeaderMap::new();
        if let Some(cookie) = self.session.cookie_header() {
            headers.insert(COOKIE, HeaderValue::from_str(&cookie).map_err(invalid)?);
        }
        if mutating {
            if let Some(token) = &self.session.csrf_token {
                headers.insert(CSRF_HEADER, HeaderValue::from_str(token).map_err(invalid)?);
            }
            headers.insert(REFERER, HeaderValue::from_str(&self.url("")).map_err(invalid)?);
        }
        Ok(headers)
    }

    async fn send(&self, request: RequestBuilder) -> ApiResult<Response> {
        let res = request.send().await?;
        let status = res.status();
        debug!(%status, url = %res.url(), "task api response");
        if status.is_success() {
            return Ok(res);
        }
        let body = res.text().await.unwrap_or_default();
        let err = ApiError::from_status(status, &body);
        warn!(%status, error = %err, "task api request failed");
        Err(err)
    }

    async fn json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let body = self.send(request).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl TaskStore for TaskApi {
    async fn list(&self, filter: &ListFilter) -> ApiResult<Vec<Task>> {
        let request = self.client.get(self.url(TASKS_URL)).headers(self.headers(false)?).query(&filter.query());
        self.json(request).await
    }

    async fn create(&self, payload: &Value) -> ApiResult<Task> {
        let request = self.client.post(self.url(TASKS_URL)).headers(self.headers(true)?).json(payload);
        self.json(request).await
    }

    async fn fetch(&self, id: TaskId) -> ApiResult<Task> {
        let request = self.client.get(self.task_url(id, None)).headers(self.headers(false)?);
        self.json(request).await
    }

    async fn update(&self, id: TaskId, payload: &Value) -> ApiResult<Task> {
        let request = self.client.put(self.task_url(id, None)).headers(self.headers(true)?).json(payload);
        self.json(request).await
    }

    async fn delete(&self, id: TaskId) -> ApiResult<()> {
        let request = self.client.delete(self.task_url(id, None)).headers(self.headers(true)?);
        self.send(request).await.map(|_| ())
    }

    async fn toggle_complete(&self, id: TaskId) -> ApiResult<CompletionStatus> {
        let request = self.client.post(self.task_url(id, Some("complete"))).headers(self.headers(true)?);
        self.json(request).await
    }
}
