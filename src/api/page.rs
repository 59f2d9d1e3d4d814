//! Values read from the server-rendered HTML pages and response cookies.
//!
//! The web pages carry the CSRF token in a hidden `csrfmiddlewaretoken`
//! input and the signed-in user's id in `data-user-id` attributes of the
//! task forms. Neither is available from the JSON API, so they are scraped
//! from the markup.

use reqwest::header::{HeaderMap, SET_COOKIE};

pub const CSRF_INPUT: &str = "csrfmiddlewaretoken";
pub const CSRF_COOKIE: &str = "csrftoken";
pub const SESSION_COOKIE: &str = "sessionid";

/// Value of the first `<input name="{name}" value="...">` in the page.
pub fn input_value(html: &str, name: &str) -> Option<String> {
    let marker = format!("name=\"{}\"", name);
    let at = html.find(&marker)?;
    let tag_start = html[..at].rfind('<')?;
    let tag_end = at + html[at..].find('>')?;
    attribute(&html[tag_start..tag_end], "value")
}

/// Value of the first `{name}="..."` attribute anywhere in `html`.
pub fn attribute(html: &str, name: &str) -> Option<String> {
    let marker = format!("{}=\"", name);
    let mut search = 0;
    while let Some(found) = html[search..].find(&marker) {
        let at = search + found;
        // Skip matches that are the tail of a longer attribute name.
        let preceded_by_name = html[..at].chars().next_back().is_some_and(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        let start = at + marker.len();
        if !preceded_by_name {
            let end = start + html[start..].find('"')?;
            return Some(html[start..end].to_string());
        }
        search = start;
    }
    None
}

/// Value of a cookie set by a response, if any `Set-Cookie` header names it.
pub fn set_cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|cookie| cookie.split(';').next())
        .find_map(|pair| pair.trim().strip_prefix(&prefix).map(str::to_string))
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn csrf_token_is_read_from_hidden_input() {
        let html = r#"<form><input type="hidden" name="csrfmiddlewaretoken" value="abc123"><input name="username"></form>"#;
        assert_eq!(input_value(html, CSRF_INPUT).as_deref(), Some("abc123"));
        assert_eq!(input_value(html, "username"), None);
    }

    #[test]
    fn attribute_skips_longer_names() {
        let html = r#"<form mydata-user-id="9" data-user-id="4">"#;
        assert_eq!(attribute(html, "data-user-id").as_deref(), Some("4"));
    }

    #[test]
    fn cookie_value_from_set_cookie_headers() {
        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, HeaderValue::from_static("csrftoken=tok; Path=/"));
        headers.append(SET_COOKIE, HeaderValue::from_static("sessionid=sess; HttpOnly; Path=/"));
        assert_eq!(set_cookie_value(&headers, SESSION_COOKIE).as_deref(), Some("sess"));
        assert_eq!(set_cookie_value(&headers, CSRF_COOKIE).as_deref(), Some("tok"));
    }
}
