//! Locating and loading Safari's cookie store.
//!
//! Reads `Cookies.binarycookies` fully into memory and hands the bytes to
//! [`decode_container`]. Missing files and permission problems surface here,
//! before the decoder runs.

use crate::base::context::IoResultExt;
use crate::base::cookieerror::CookieError;
use crate::cookies::binarycookie::Cookie;
use crate::cookies::filter::CookieFilter;
use crate::cookies::safari::decode_container;
use std::path::{Path, PathBuf};

/// Default location of Safari's cookie store on macOS.
pub const DEFAULT_COOKIE_PATH: &str = "~/Library/Cookies/Cookies.binarycookies";

/// Reader for a Safari cookie file.
#[derive(Debug, Clone)]
pub struct SafariCookieReader {
    path: String,
    filter: CookieFilter,
}

impl Default for SafariCookieReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SafariCookieReader {
    /// Create a reader for the default cookie store.
    pub fn new() -> Self {
        Self {
            path: DEFAULT_COOKIE_PATH.to_string(),
            filter: CookieFilter::new(),
        }
    }

    /// Read a specific file instead (a leading `~` is expanded).
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Keep only cookies whose domain contains `domain`.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.filter = self.filter.domain_contains(domain);
        self
    }

    /// Replace the filter applied after decoding.
    pub fn with_filter(mut self, filter: CookieFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The path that will be read, with `~` expanded.
    pub fn resolve_path(&self) -> PathBuf {
        expand_home(&self.path)
    }

    /// Load, decode and filter the cookie file.
    pub fn read_cookies(&self) -> Result<Vec<Cookie>, CookieError> {
        let path = self.resolve_path();
        let data = read_cookie_file(&path)?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "loaded cookie file");
        let cookies = decode_container(&data)?;
        Ok(self.filter.apply(cookies))
    }
}

/// Read the whole file, rejecting missing paths and non-files up front.
pub fn read_cookie_file(path: &Path) -> Result<Vec<u8>, CookieError> {
    if !path.exists() {
        return Err(CookieError::file_not_found(path.display().to_string()));
    }
    if !path.is_file() {
        return Err(CookieError::not_a_file(path.display().to_string()));
    }
    std::fs::read(path).file_context(path)
}

/// Expand a leading `~` using `HOME`. Other paths are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
    };

    match (rest, std::env::var_os("HOME")) {
        (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => PathBuf::from(path),
    }
}
