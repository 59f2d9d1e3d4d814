//! Authentication against the server-rendered auth pages.
//!
//! Login and registration are plain HTML form posts protected by CSRF. The
//! flow mirrors what the browser does:
//!
//! 1. `GET /auth/` to receive the `csrftoken` cookie and the hidden
//!    `csrfmiddlewaretoken` input
//! 2. post the form with both, without following redirects
//! 3. a redirect means success; a re-rendered page (200) means the form was
//!    rejected
//!
//! After login the index page is read once more for the `data-user-id` the
//! task forms carry, which becomes the owner of tasks created later.

use super::page::{attribute, input_value, set_cookie_value, CSRF_COOKIE, CSRF_INPUT, SESSION_COOKIE};
use super::{ApiError, ApiResult, FieldErrors};
use crate::libs::session::Session;
use reqwest::{
    header::{HeaderMap, HeaderValue, COOKIE, REFERER},
    redirect, Client, StatusCode,
};
use serde::Deserialize;
use tracing::{debug, warn};

const AUTH_URL: &str = "auth/";
const LOGIN_URL: &str = "auth/login/";
const REGISTER_URL: &str = "auth/register/";
const LOGOUT_URL: &str = "logout/";
const USERNAME_AVAILABILITY_URL: &str = "check_username_availability/";

/// A CSRF token together with the cookie it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken {
    pub form_token: String,
    pub cookie: String,
}

#[derive(Debug, Clone)]
pub struct Registration {
    pub fullname: String,
    pub username: String,
    pub password1: String,
    pub password2: String,
}

#[derive(Deserialize)]
struct Availability {
    is_available: bool,
}

pub struct AuthApi {
    client: Client,
    base_url: String,
}

impl AuthApi {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let client = Client::builder().redirect(redirect::Policy::none()).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn headers(&self, cookie: &str) -> ApiResult<HeaderMap> {
        let invalid = |_| ApiError::Transport("invalid header value".to_string());
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).map_err(invalid)?);
        headers.insert(REFERER, HeaderValue::from_str(&self.url(AUTH_URL)).map_err(invalid)?);
        Ok(headers)
    }

    /// Reads a fresh CSRF token from the auth page.
    pub async fn csrf_token(&self) -> ApiResult<CsrfToken> {
        let res = self.client.get(self.url(AUTH_URL)).send().await?;
        let cookie = set_cookie_value(res.headers(), CSRF_COOKIE);
        let html = res.text().await?;
        let form_token = input_value(&html, CSRF_INPUT);

        match (form_token, cookie) {
            (Some(form_token), Some(cookie)) => Ok(CsrfToken { form_token, cookie }),
            (None, Some(cookie)) => Ok(CsrfToken {
                form_token: cookie.clone(),
                cookie,
            }),
            _ => Err(ApiError::Decode("no CSRF token on the auth page".to_string())),
        }
    }

    /// Logs in and returns the resulting session.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<Session> {
        let csrf = self.csrf_token().await?;
        let res = self
            .client
            .post(self.url(LOGIN_URL))
            .headers(self.headers(&format!("{}={}", CSRF_COOKIE, csrf.cookie))?)
            .form(&[(CSRF_INPUT, csrf.form_token.as_str()), ("username", username), ("password", password)])
            .send()
            .await?;

        let status = res.status();
        let session_id = set_cookie_value(res.headers(), SESSION_COOKIE);
        // The token is rotated on login.
        let csrf_token = set_cookie_value(res.headers(), CSRF_COOKIE).unwrap_or(csrf.cookie);
        debug!(%status, "login response");

        match (status.is_redirection(), session_id) {
            (true, Some(session_id)) => {
                let mut session = Session {
                    session_id: Some(session_id),
                    csrf_token: Some(csrf_token),
                    user_id: None,
                };
                session.user_id = self.user_id(&session).await.unwrap_or(None);
                Ok(session)
            }
            _ => {
                warn!(%status, "login rejected");
                Err(ApiError::Unauthenticated)
            }
        }
    }

    /// Id of the signed-in user, read from the index page's task forms.
    pub async fn user_id(&self, session: &Session) -> ApiResult<Option<i64>> {
        let cookie = session.cookie_header().unwrap_or_default();
        let res = self.client.get(self.url("")).headers(self.headers(&cookie)?).send().await?;
        if !res.status().is_success() {
            return Ok(None);
        }
        let html = res.text().await?;
        Ok(attribute(&html, "data-user-id").and_then(|id| id.parse().ok()))
    }

    /// Posts the registration form. A redirect to the login page means success.
    pub async fn register(&self, registration: &Registration) -> ApiResult<()> {
        let csrf = self.csrf_token().await?;
        let res = self
            .client
            .post(self.url(REGISTER_URL))
            .headers(self.headers(&format!("{}={}", CSRF_COOKIE, csrf.cookie))?)
            .form(&[
                (CSRF_INPUT, csrf.form_token.as_str()),
                ("fullname", registration.fullname.as_str()),
                ("username", registration.username.as_str()),
                ("password1", registration.password1.as_str()),
                ("password2", registration.password2.as_str()),
            ])
            .send()
            .await?;

        match res.status() {
            status if status.is_redirection() => Ok(()),
            StatusCode::OK => Err(ApiError::Validation(FieldErrors::default())),
            status => Err(ApiError::from_status(status, "")),
        }
    }

    pub async fn check_username_availability(&self, username: &str) -> ApiResult<bool> {
        let csrf = self.csrf_token().await?;
        let res = self
            .client
            .post(self.url(USERNAME_AVAILABILITY_URL))
            .headers(self.headers(&format!("{}={}", CSRF_COOKIE, csrf.cookie))?)
            .form(&[(CSRF_INPUT, csrf.form_token.as_str()), ("username", username)])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ApiError::from_status(status, ""));
        }
        let availability: Availability = serde_json::from_str(&res.text().await?)?;
        Ok(availability.is_available)
    }

    /// Ends the server-side session. The local session file is not touched.
    pub async fn logout(&self, session: &Session) -> ApiResult<()> {
        let cookie = session.cookie_header().unwrap_or_default();
        let res = self.client.get(self.url(LOGOUT_URL)).headers(self.headers(&cookie)?).send().await?;
        let status = res.status();
        if status.is_success() || status.is_redirection() {
            Ok(())
        } else {
            Err(ApiError::from_status(status, ""))
        }
    }
}
