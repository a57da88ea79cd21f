//! # binarycookies
//!
//! A reader for Safari's `Cookies.binarycookies` store.
//!
//! `binarycookies` decodes the proprietary container Safari uses to persist
//! cookies on macOS and iOS, then filters and renders the result as text or
//! JSON. Decoding is read-only and works entirely on an in-memory buffer.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use binarycookies::cookies::browser::SafariCookieReader;
//! use binarycookies::cookies::filter::CookieFilter;
//! use binarycookies::cookies::binarycookie::unix_now;
//!
//! let cookies = SafariCookieReader::new()
//!     .with_filter(CookieFilter::new().domain_contains("apple.com").not_expired_at(unix_now()))
//!     .read_cookies()?;
//! for cookie in &cookies {
//!     println!("{}", cookie);
//! }
//! # Ok::<(), binarycookies::base::cookieerror::CookieError>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Byte cursor and error definitions
//! - [`cookies`] - Container decoding, filtering, rendering and file loading
//! - [`telemetry`] - Logging setup for the command line tool

pub mod base;
pub mod cookies;
pub mod telemetry;

pub use base::cookieerror::CookieError;
pub use cookies::binarycookie::{Cookie, CookieFlags};
pub use cookies::safari::decode_container;
