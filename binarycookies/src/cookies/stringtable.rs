//! String resolution inside a cookie record.
//!
//! The four string offsets in a record header are measured from the start of
//! the record *including* its 4-byte size field, but the decoder hands each
//! record over as a slice that begins after that field. [`RecordOrigin`] holds
//! that shift in one place.

use crate::base::cookieerror::CookieError;
use crate::base::cursor::ByteCursor;

/// Local coordinate space of one record slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordOrigin {
    shift: i64,
}

impl RecordOrigin {
    /// Origin used by `Cookies.binarycookies`: string offsets sit 4 bytes
    /// ahead of the record slice (the size field consumed by the page).
    pub const BINARY_COOKIES: RecordOrigin = RecordOrigin { shift: 4 };

    pub const fn with_shift(shift: i64) -> Self {
        Self { shift }
    }

    /// Translate a header offset into a position within the record slice.
    pub fn resolve(self, offset: i32) -> i64 {
        i64::from(offset) - self.shift
    }
}

/// Decodes NUL-terminated strings from a record slice.
pub struct StringTable<'a> {
    cursor: ByteCursor<'a>,
    origin: RecordOrigin,
}

impl<'a> StringTable<'a> {
    pub fn new(record: &'a [u8], origin: RecordOrigin) -> Self {
        Self {
            cursor: ByteCursor::new(record),
            origin,
        }
    }

    /// Read the string that starts at header offset `offset`.
    pub fn string_at(&mut self, offset: i32) -> Result<String, CookieError> {
        self.cursor.read_cstring_at(self.origin.resolve(offset))
    }
}
