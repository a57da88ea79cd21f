//! Text and JSON output for decoded cookies.

use crate::base::cookieerror::CookieError;
use crate::cookies::binarycookie::{unix_now, Cookie};
use serde::Serialize;

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `Cookie : name=value; ...` line per cookie.
    #[default]
    Text,
    /// JSON array with dates rendered as text.
    Json,
    /// JSON array that also carries raw epochs and the expired state.
    JsonExtended,
}

/// Serializable view of a cookie.
///
/// Field order is the key order of the output.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct JsonCookie<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub url: &'a str,
    pub path: &'a str,
    pub create_date: String,
    pub expiry_date: String,
    pub cookie_flags: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_epoch: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_epoch: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,
}

impl<'a> JsonCookie<'a> {
    pub fn new(cookie: &'a Cookie) -> Self {
        Self {
            name: &cookie.name,
            value: &cookie.value,
            url: &cookie.domain,
            path: &cookie.path,
            create_date: cookie.create_date(),
            expiry_date: cookie.expiry_date(),
            cookie_flags: cookie.flags.as_str(),
            create_epoch: None,
            expiry_epoch: None,
            expired: None,
        }
    }

    /// Add raw epochs and whether the cookie is expired at `now`.
    pub fn extended(cookie: &'a Cookie, now: f64) -> Self {
        Self {
            create_epoch: Some(cookie.creation_time),
            expiry_epoch: Some(cookie.expiry_time),
            expired: Some(cookie.is_expired_at(now)),
            ..Self::new(cookie)
        }
    }
}

/// Text lines, one per cookie, each terminated by a newline.
pub fn render_text(cookies: &[Cookie]) -> String {
    let mut out = String::new();
    for cookie in cookies {
        out.push_str(&cookie.to_string());
        out.push('\n');
    }
    out
}

/// JSON array of cookies; `extended` adds epochs and the expired state
/// evaluated against `now`.
pub fn render_json_at(cookies: &[Cookie], extended: bool, now: f64) -> Result<String, CookieError> {
    let view: Vec<JsonCookie<'_>> = cookies
        .iter()
        .map(|c| {
            if extended {
                JsonCookie::extended(c, now)
            } else {
                JsonCookie::new(c)
            }
        })
        .collect();
    Ok(serde_json::to_string(&view)?)
}

pub fn render_json(cookies: &[Cookie], extended: bool) -> Result<String, CookieError> {
    render_json_at(cookies, extended, unix_now())
}

/// Render in the requested format. JSON output ends with a newline.
pub fn render(cookies: &[Cookie], format: OutputFormat) -> Result<String, CookieError> {
    match format {
        OutputFormat::Text => Ok(render_text(cookies)),
        OutputFormat::Json => render_json(cookies, false).map(|s| s + "\n"),
        OutputFormat::JsonExtended => render_json(cookies, true).map(|s| s + "\n"),
    }
}
