//! Bounds-checked, seekable reader over an in-memory byte buffer.
//!
//! Every level of the container (file, page, record) owns its own cursor over
//! its own buffer, so a seek inside a record never disturbs the forward-only
//! cursor walking the file.

use crate::base::cookieerror::CookieError;

#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current absolute position.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Read the next `n` bytes and advance past them.
    pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8], CookieError> {
        if n > self.remaining() {
            return Err(CookieError::truncated(self.pos, n, self.remaining()));
        }
        let start = self.pos;
        self.pos += n;
        Ok(&self.data[start..self.pos])
    }

    /// Read at most `n` bytes, stopping early at the end of the buffer.
    pub fn read_up_to(&mut self, n: usize) -> &'a [u8] {
        let take = n.min(self.remaining());
        let start = self.pos;
        self.pos += take;
        &self.data[start..self.pos]
    }

    /// Advance past `n` bytes without interpreting them.
    pub fn skip(&mut self, n: usize) -> Result<(), CookieError> {
        self.read_exact(n).map(|_| ())
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CookieError> {
        let bytes = self.read_exact(N)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(bytes);
        Ok(buf)
    }

    /// Read a 32-bit unsigned integer in big-endian.
    pub fn read_u32_be(&mut self) -> Result<u32, CookieError> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    /// Read a 32-bit signed integer in big-endian.
    pub fn read_i32_be(&mut self) -> Result<i32, CookieError> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    /// Read a 32-bit signed integer in little-endian.
    pub fn read_i32_le(&mut self) -> Result<i32, CookieError> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    /// Read a 64-bit float in little-endian.
    pub fn read_f64_le(&mut self) -> Result<f64, CookieError> {
        Ok(f64::from_le_bytes(self.read_array()?))
    }

    /// Read a big-endian count or size field that must not be negative.
    pub fn read_len_be(&mut self, field: &'static str) -> Result<usize, CookieError> {
        let value = self.read_i32_be()?;
        usize::try_from(value).map_err(|_| CookieError::negative_length(field, value))
    }

    /// Read a little-endian count or size field that must not be negative.
    pub fn read_len_le(&mut self, field: &'static str) -> Result<usize, CookieError> {
        let value = self.read_i32_le()?;
        usize::try_from(value).map_err(|_| CookieError::negative_length(field, value))
    }

    /// Move to an absolute position.
    ///
    /// Signed so offsets read from the file can be passed through unchanged;
    /// negative positions are out of bounds. Seeking exactly to the end is
    /// allowed.
    pub fn seek_absolute(&mut self, pos: i64) -> Result<(), CookieError> {
        match usize::try_from(pos) {
            Ok(p) if p <= self.data.len() => {
                self.pos = p;
                Ok(())
            }
            _ => Err(CookieError::out_of_bounds(pos, self.data.len())),
        }
    }

    /// Seek to `pos` and read a NUL-terminated string, terminator excluded.
    ///
    /// Fails with `Truncated` when the buffer ends before a `0x00` byte.
    pub fn read_cstring_at(&mut self, pos: i64) -> Result<String, CookieError> {
        self.seek_absolute(pos)?;
        let start = self.pos;
        match self.data[start..].iter().position(|&b| b == 0) {
            Some(end) => {
                self.pos = start + end + 1;
                Ok(String::from_utf8_lossy(&self.data[start..start + end]).into_owned())
            }
            None => {
                let available = self.remaining();
                self.pos = self.data.len();
                Err(CookieError::truncated(start, available + 1, available))
            }
        }
    }
}
