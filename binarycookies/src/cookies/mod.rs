//! Safari cookie store decoding, filtering and output.
//!
//! Decoding is layered; each layer owns its own cursor over its own slice:
//!
//! | Layer | Module | Input |
//! |-------|--------|-------|
//! | Container | [`safari`] | whole file, big-endian page table |
//! | Page | [`page`] | one page, little-endian cookie directory |
//! | Record | [`record`] | one record slice |
//! | Strings | [`stringtable`] | record slice + record-local origin |
//!
//! # Reading the default store
//!
//! ```rust,no_run
//! use binarycookies::cookies::browser::SafariCookieReader;
//!
//! let reader = SafariCookieReader::new().domain("example.com");
//!
//! match reader.read_cookies() {
//!     Ok(cookies) => println!("Found {} cookies", cookies.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! # Decoding bytes already in memory
//!
//! ```rust,no_run
//! use binarycookies::cookies::safari::decode_container;
//!
//! let data = std::fs::read("Cookies.binarycookies")?;
//! for cookie in decode_container(&data)? {
//!     println!("{}", cookie);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod binarycookie;
pub mod browser;
pub mod filter;
pub mod page;
pub mod record;
pub mod render;
pub mod safari;
pub mod stringtable;

#[cfg(test)]
mod testutil;
