//! Safari binary cookies parser (`Cookies.binarycookies`).
//!
//! Safari stores cookies in a proprietary binary format on macOS and iOS.
//! This module decodes the container into [`Cookie`] values.
//!
//! ## File Format
//! The file consists of:
//! 1. Header: "cook" magic + page count + page sizes (big-endian)
//! 2. Pages: Each page contains a directory of cookie offsets and the
//!    cookie records themselves (little-endian)
//! 3. Footer: Checksum (ignored)
//!
//! ## References
//! - https://github.com/libyal/dtformats/blob/main/documentation/Safari%20Cookies.asciidoc
//! - https://github.com/als0052/BinaryCookieReader

use crate::base::cookieerror::CookieError;
use crate::base::cursor::ByteCursor;
use crate::cookies::binarycookie::Cookie;
use crate::cookies::page::decode_page;

/// Magic bytes at the start of a Safari binary cookies file.
pub const MAGIC: &[u8; 4] = b"cook";

/// Decode a Safari binary cookies file.
///
/// # Arguments
/// * `data` - The raw bytes of the Cookies.binarycookies file
///
/// # Returns
/// * `Ok(cookies)` - Every cookie, in page order then directory order
/// * `Err(...)` - The first structural fault; no partial result is returned
pub fn decode_container(data: &[u8]) -> Result<Vec<Cookie>, CookieError> {
    let pages = split_pages(data)?;

    let mut all_cookies = Vec::new();
    for page in pages {
        all_cookies.extend(decode_page(page)?);
    }

    tracing::debug!(cookies = all_cookies.len(), "decoded binary cookies");
    Ok(all_cookies)
}

/// Check the magic and cut the page table into per-page slices.
///
/// Slices are taken back to back from a single forward cursor; the trailing
/// checksum is never consulted.
pub fn split_pages(data: &[u8]) -> Result<Vec<&[u8]>, CookieError> {
    let mut cursor = ByteCursor::new(data);

    // A short file compares unequal to the magic just like a wrong one.
    let magic = cursor.read_up_to(MAGIC.len());
    if magic != MAGIC {
        return Err(CookieError::bad_magic(magic));
    }

    let num_pages = cursor.read_len_be("page count")?;
    tracing::debug!(pages = num_pages, bytes = data.len(), "reading page table");

    let mut page_sizes = Vec::with_capacity(num_pages.min(cursor.remaining() / 4));
    for _ in 0..num_pages {
        page_sizes.push(cursor.read_len_be("page size")?);
    }

    let mut pages = Vec::with_capacity(page_sizes.len());
    for page_size in page_sizes {
        pages.push(cursor.read_exact(page_size)?);
    }

    Ok(pages)
}
