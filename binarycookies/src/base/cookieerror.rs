use thiserror::Error;

/// Errors produced while loading or decoding a `Cookies.binarycookies` file.
///
/// Every decode-time error is fatal for the whole container: the format has no
/// resynchronization marker, so nothing after a structural fault can be trusted.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CookieError {
    // Decode Errors
    #[error("Not a Cookies.binarycookies file (magic {found:02x?})")]
    BadMagic { found: Vec<u8> },
    #[error("Truncated input: needed {needed} bytes at offset {offset}, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("Position {position} is outside a buffer of {len} bytes")]
    OutOfBounds { position: i64, len: usize },
    #[error("Negative {field}: {value}")]
    NegativeLength { field: &'static str, value: i32 },

    // Loader Errors
    #[error("File not found: {path}")]
    FileNotFound { path: String },
    #[error("Not a file: {path}")]
    NotAFile { path: String },
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    // Output Errors
    #[error("Failed to serialize cookies: {message}")]
    Serialize { message: String },
}

impl CookieError {
    pub fn bad_magic(found: &[u8]) -> Self {
        CookieError::BadMagic {
            found: found.to_vec(),
        }
    }

    pub fn truncated(offset: usize, needed: usize, available: usize) -> Self {
        CookieError::Truncated {
            offset,
            needed,
            available,
        }
    }

    pub fn out_of_bounds(position: i64, len: usize) -> Self {
        CookieError::OutOfBounds { position, len }
    }

    pub fn negative_length(field: &'static str, value: i32) -> Self {
        CookieError::NegativeLength { field, value }
    }

    pub fn file_not_found(path: impl Into<String>) -> Self {
        CookieError::FileNotFound { path: path.into() }
    }

    pub fn not_a_file(path: impl Into<String>) -> Self {
        CookieError::NotAFile { path: path.into() }
    }

    pub fn io(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        CookieError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn serialize(err: impl std::fmt::Display) -> Self {
        CookieError::Serialize {
            message: err.to_string(),
        }
    }

    /// True for errors raised by the decoder itself rather than the loader.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            CookieError::BadMagic { .. }
                | CookieError::Truncated { .. }
                | CookieError::OutOfBounds { .. }
                | CookieError::NegativeLength { .. }
        )
    }

    /// Process exit status reported by the command line front end.
    pub fn exit_code(&self) -> i32 {
        match self {
            CookieError::BadMagic { .. } => 2,
            CookieError::Truncated { .. } => 3,
            CookieError::OutOfBounds { .. } => 4,
            CookieError::NegativeLength { .. } => 5,
            CookieError::FileNotFound { .. } => 10,
            CookieError::NotAFile { .. } => 11,
            CookieError::Io { .. } => 12,
            CookieError::Serialize { .. } => 20,
        }
    }
}

impl From<serde_json::Error> for CookieError {
    fn from(err: serde_json::Error) -> Self {
        CookieError::serialize(err)
    }
}
