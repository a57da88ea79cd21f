//! Base types and error handling.
//!
//! Provides the foundations every decoder layer builds on:
//! - [`ByteCursor`](cursor::ByteCursor): bounds-checked reads over a byte buffer
//! - [`CookieError`](cookieerror::CookieError): error kinds and exit codes

pub mod context;
pub mod cookieerror;
pub mod cursor;

#[cfg(test)]
mod tests;
