//! Ergonomic error context helpers.
//!
//! Provides an extension trait for adding the offending path to `Result`
//! types, converting IO errors into context-rich `CookieError` variants.

use crate::base::cookieerror::CookieError;
use std::io;
use std::path::Path;

/// Extension trait for adding context to IO Results.
pub trait IoResultExt<T> {
    /// Attach the path being read to an IO error.
    ///
    /// # Example
    /// ```ignore
    /// use binarycookies::base::context::IoResultExt;
    ///
    /// let data = std::fs::read(&path).file_context(&path)?;
    /// // Error: "Failed to read /tmp/Cookies.binarycookies: permission denied"
    /// ```
    fn file_context(self, path: &Path) -> Result<T, CookieError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn file_context(self, path: &Path) -> Result<T, CookieError> {
        self.map_err(|e| {
            let path = path.display().to_string();
            match e.kind() {
                io::ErrorKind::NotFound => CookieError::file_not_found(path),
                _ => CookieError::io(path, e),
            }
        })
    }
}
