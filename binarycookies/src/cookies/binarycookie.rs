use std::fmt;
use time::macros::format_description;
use time::OffsetDateTime;

/// Seconds between the Unix epoch and the Mac absolute-time epoch
/// (2001-01-01 00:00:00 UTC).
pub const MAC_EPOCH_OFFSET: f64 = 978_307_200.0;

/// Convert Mac absolute time (seconds since 2001-01-01) to Unix seconds.
pub fn mac_to_unix(timestamp: f64) -> f64 {
    timestamp + MAC_EPOCH_OFFSET
}

/// Current time as fractional Unix seconds.
pub fn unix_now() -> f64 {
    OffsetDateTime::now_utc().unix_timestamp_nanos() as f64 / 1e9
}

/// Cookie attribute flags as stored in the record's flag word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CookieFlags {
    None,
    Secure,
    HttpOnly,
    SecureAndHttpOnly,
    /// Any other value. Reported as-is rather than rejected.
    Unknown(i32),
}

impl CookieFlags {
    pub fn from_word(word: i32) -> Self {
        match word {
            0 => CookieFlags::None,
            1 => CookieFlags::Secure,
            4 => CookieFlags::HttpOnly,
            5 => CookieFlags::SecureAndHttpOnly,
            other => CookieFlags::Unknown(other),
        }
    }

    pub fn is_secure(self) -> bool {
        matches!(self, CookieFlags::Secure | CookieFlags::SecureAndHttpOnly)
    }

    pub fn is_http_only(self) -> bool {
        matches!(self, CookieFlags::HttpOnly | CookieFlags::SecureAndHttpOnly)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CookieFlags::None => "",
            CookieFlags::Secure => "Secure",
            CookieFlags::HttpOnly => "HttpOnly",
            CookieFlags::SecureAndHttpOnly => "Secure; HttpOnly",
            CookieFlags::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for CookieFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One decoded cookie record.
///
/// All fields are owned copies; nothing refers back into the page buffer the
/// record was decoded from. Times are fractional Unix seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    /// Domain scope of the cookie (the "url" field of the file).
    pub domain: String,
    pub path: String,
    pub creation_time: f64,
    pub expiry_time: f64,
    pub flags: CookieFlags,
}

impl Cookie {
    pub fn new(
        name: String,
        value: String,
        domain: String,
        path: String,
        creation_time: f64,
        expiry_time: f64,
        flags: CookieFlags,
    ) -> Self {
        Self {
            name,
            value,
            domain,
            path,
            creation_time,
            expiry_time,
            flags,
        }
    }

    /// Strictly past its expiry at `instant`; expiring exactly at `instant`
    /// does not count.
    pub fn is_expired_at(&self, instant: f64) -> bool {
        self.expiry_time < instant
    }

    pub fn is_expired_now(&self) -> bool {
        self.is_expired_at(unix_now())
    }

    pub fn creation_datetime(&self) -> Option<OffsetDateTime> {
        unix_to_datetime(self.creation_time)
    }

    pub fn expiry_datetime(&self) -> Option<OffsetDateTime> {
        unix_to_datetime(self.expiry_time)
    }

    /// Creation time as `"Dow, DD Mon YYYY HH:MM:SS GMT"`.
    pub fn create_date(&self) -> String {
        format_http_date(self.creation_time)
    }

    /// Expiry time as `"Dow, DD Mon YYYY HH:MM:SS GMT"`.
    pub fn expiry_date(&self) -> String {
        format_http_date(self.expiry_time)
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cookie : {}={}; domain={}; path={}; expires={}; {}",
            self.name,
            self.value,
            self.domain,
            self.path,
            self.expiry_date(),
            self.flags
        )
    }
}

/// Whole seconds are taken with floor, so fractional instants before the
/// epoch render as the preceding second.
fn unix_to_datetime(timestamp: f64) -> Option<OffsetDateTime> {
    if !timestamp.is_finite() {
        return None;
    }
    let secs = timestamp.floor();
    if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
        return None;
    }
    OffsetDateTime::from_unix_timestamp(secs as i64).ok()
}

/// Render Unix seconds in the RFC 1123 style used by `Expires` headers.
///
/// Instants outside the representable calendar range fall back to the raw
/// number.
pub fn format_http_date(timestamp: f64) -> String {
    let format = format_description!(
        "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
    );
    unix_to_datetime(timestamp)
        .and_then(|dt| dt.format(format).ok())
        .unwrap_or_else(|| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(expiry_time: f64) -> Cookie {
        Cookie::new(
            "id".to_string(),
            "42".to_string(),
            ".example.com".to_string(),
            "/".to_string(),
            0.0,
            expiry_time,
            CookieFlags::Secure,
        )
    }

    #[test]
    fn test_flag_mapping() {
        assert_eq!(CookieFlags::from_word(0), CookieFlags::None);
        assert_eq!(CookieFlags::from_word(1), CookieFlags::Secure);
        assert_eq!(CookieFlags::from_word(4), CookieFlags::HttpOnly);
        assert_eq!(CookieFlags::from_word(5), CookieFlags::SecureAndHttpOnly);
        for word in [2, 3, -1, 1000] {
            assert_eq!(CookieFlags::from_word(word), CookieFlags::Unknown(word));
        }
    }

    #[test]
    fn test_flag_rendering() {
        assert_eq!(CookieFlags::None.to_string(), "");
        assert_eq!(CookieFlags::Secure.to_string(), "Secure");
        assert_eq!(CookieFlags::HttpOnly.to_string(), "HttpOnly");
        assert_eq!(
            CookieFlags::SecureAndHttpOnly.to_string(),
            "Secure; HttpOnly"
        );
        assert_eq!(CookieFlags::Unknown(8).to_string(), "Unknown");
    }

    #[test]
    fn test_flag_bits() {
        assert!(CookieFlags::SecureAndHttpOnly.is_secure());
        assert!(CookieFlags::SecureAndHttpOnly.is_http_only());
        assert!(!CookieFlags::HttpOnly.is_secure());
        assert!(!CookieFlags::Unknown(5).is_secure());
    }

    #[test]
    fn test_epoch_conversion() {
        assert_eq!(mac_to_unix(0.0), 978_307_200.0);
        assert_eq!(mac_to_unix(-978_307_200.0), 0.0);
    }

    #[test]
    fn test_is_expired_at_is_strict() {
        let cookie = sample(1000.0);
        assert!(cookie.is_expired_at(1000.1));
        assert!(!cookie.is_expired_at(1000.0));
        assert!(!cookie.is_expired_at(999.9));
    }

    #[test]
    fn test_is_expired_now() {
        assert!(sample(0.0).is_expired_now());
        assert!(!sample(f64::MAX).is_expired_now());
    }

    #[test]
    fn test_http_date_format() {
        assert_eq!(format_http_date(0.0), "Thu, 01 Jan 1970 00:00:00 GMT");
        assert_eq!(
            format_http_date(mac_to_unix(0.0)),
            "Mon, 01 Jan 2001 00:00:00 GMT"
        );
        assert_eq!(format_http_date(-0.5), "Wed, 31 Dec 1969 23:59:59 GMT");
    }

    #[test]
    fn test_http_date_out_of_range() {
        assert_eq!(format_http_date(f64::NAN), "NaN");
        assert_eq!(format_http_date(1e300), 1e300f64.to_string());
    }

    #[test]
    fn test_display_line() {
        let cookie = sample(978_307_300.0);
        assert_eq!(
            cookie.to_string(),
            "Cookie : id=42; domain=.example.com; path=/; \
             expires=Mon, 01 Jan 2001 00:01:40 GMT; Secure"
        );
    }
}
