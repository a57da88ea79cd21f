//! Example: Dump Safari cookies for one domain.
//!
//! Usage: cargo run --example dumpcookies -- [domain] [path]
//!
//! Note: On recent macOS versions the cookie store sits inside Safari's
//! container and requires Full Disk Access for the terminal.

use binarycookies::cookies::browser::{SafariCookieReader, DEFAULT_COOKIE_PATH};

fn main() {
    let mut args = std::env::args().skip(1);
    let domain = args.next();
    let path = args.next().unwrap_or_else(|| DEFAULT_COOKIE_PATH.to_string());

    println!("=== Safari Cookie Dump ===\n");

    let mut reader = SafariCookieReader::new().with_path(path);
    if let Some(domain) = &domain {
        reader = reader.domain(domain.clone());
    }
    println!("  File: {}", reader.resolve_path().display());

    match reader.read_cookies() {
        Ok(cookies) => {
            println!("  Found {} cookies", cookies.len());

            // Print first 5 cookies as sample
            for cookie in cookies.iter().take(5) {
                println!(
                    "    - {} = {} (domain: {}, flags: {:?}, expires: {})",
                    cookie.name,
                    if cookie.value.chars().count() > 20 {
                        format!("{}...", cookie.value.chars().take(20).collect::<String>())
                    } else {
                        cookie.value.clone()
                    },
                    cookie.domain,
                    cookie.flags,
                    cookie.expiry_date()
                );
            }

            if cookies.len() > 5 {
                println!("    ... and {} more", cookies.len() - 5);
            }
        }
        Err(e) => {
            println!("  Error: {}", e);
        }
    }
}
