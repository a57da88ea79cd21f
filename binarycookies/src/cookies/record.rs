//! Single cookie record decoding.
//!
//! ## Record layout
//! The slice handed over by the page decoder starts right after the record's
//! little-endian size field:
//!
//! | Slice offset | Size | Field |
//! |--------------|------|-------|
//! | 0  | 4 | unknown |
//! | 4  | 4 | flags |
//! | 8  | 4 | unknown |
//! | 12 | 4 | domain offset |
//! | 16 | 4 | name offset |
//! | 20 | 4 | path offset |
//! | 24 | 4 | value offset |
//! | 28 | 8 | end of header |
//! | 36 | 8 | expiry (Mac absolute time) |
//! | 44 | 8 | creation (Mac absolute time) |
//! | 52 | .. | NUL-terminated strings |

use crate::base::cookieerror::CookieError;
use crate::base::cursor::ByteCursor;
use crate::cookies::binarycookie::{mac_to_unix, Cookie, CookieFlags};
use crate::cookies::stringtable::{RecordOrigin, StringTable};

/// Fixed header length of a record slice, before the string region.
pub const RECORD_HEADER_LEN: usize = 52;

/// Header fields of one record, before string resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordHeader {
    pub flags: CookieFlags,
    pub domain_offset: i32,
    pub name_offset: i32,
    pub path_offset: i32,
    pub value_offset: i32,
    /// Unix seconds.
    pub expiry_time: f64,
    /// Unix seconds.
    pub creation_time: f64,
}

impl RecordHeader {
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self, CookieError> {
        cursor.skip(4)?;
        let flags = CookieFlags::from_word(cursor.read_i32_le()?);
        cursor.skip(4)?;

        let domain_offset = cursor.read_i32_le()?;
        let name_offset = cursor.read_i32_le()?;
        let path_offset = cursor.read_i32_le()?;
        let value_offset = cursor.read_i32_le()?;

        cursor.skip(8)?;

        let expiry_time = mac_to_unix(cursor.read_f64_le()?);
        let creation_time = mac_to_unix(cursor.read_f64_le()?);

        Ok(Self {
            flags,
            domain_offset,
            name_offset,
            path_offset,
            value_offset,
            expiry_time,
            creation_time,
        })
    }
}

/// Decode one cookie record slice.
pub fn decode_record(record: &[u8]) -> Result<Cookie, CookieError> {
    decode_record_with_origin(record, RecordOrigin::BINARY_COOKIES)
}

/// Decode one cookie record slice whose string offsets are measured from
/// `origin`.
pub fn decode_record_with_origin(
    record: &[u8],
    origin: RecordOrigin,
) -> Result<Cookie, CookieError> {
    let mut cursor = ByteCursor::new(record);
    let header = RecordHeader::read(&mut cursor)?;

    let mut strings = StringTable::new(record, origin);
    let domain = strings.string_at(header.domain_offset)?;
    let name = strings.string_at(header.name_offset)?;
    let path = strings.string_at(header.path_offset)?;
    let value = strings.string_at(header.value_offset)?;

    if let CookieFlags::Unknown(word) = header.flags {
        tracing::warn!(domain = %domain, name = %name, flags = word, "unknown cookie flag word");
    }

    Ok(Cookie::new(
        name,
        value,
        domain,
        path,
        header.creation_time,
        header.expiry_time,
        header.flags,
    ))
}
