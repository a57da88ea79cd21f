//! Cookie filtering.
//!
//! Predicates are plain tests over a decoded [`Cookie`]; a [`CookieFilter`]
//! keeps the cookies that pass all of them.

use crate::cookies::binarycookie::Cookie;

#[derive(Debug, Clone, PartialEq)]
pub enum CookiePredicate {
    /// Domain equals the given text exactly.
    DomainEquals(String),
    /// Domain contains the given text anywhere.
    DomainContains(String),
    /// Name equals the given text exactly.
    NameEquals(String),
    /// Not expired at the given instant (Unix seconds).
    NotExpiredAt(f64),
}

impl CookiePredicate {
    pub fn test(&self, cookie: &Cookie) -> bool {
        match self {
            CookiePredicate::DomainEquals(domain) => cookie.domain == *domain,
            CookiePredicate::DomainContains(needle) => cookie.domain.contains(needle.as_str()),
            CookiePredicate::NameEquals(name) => cookie.name == *name,
            CookiePredicate::NotExpiredAt(instant) => !cookie.is_expired_at(*instant),
        }
    }
}

/// Conjunction of predicates. An empty filter keeps everything.
#[derive(Debug, Clone, Default)]
pub struct CookieFilter {
    predicates: Vec<CookiePredicate>,
}

impl CookieFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, predicate: CookiePredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Keep cookies whose domain is exactly `domain`.
    pub fn domain(self, domain: impl Into<String>) -> Self {
        self.with(CookiePredicate::DomainEquals(domain.into()))
    }

    /// Keep cookies whose domain contains `needle`.
    pub fn domain_contains(self, needle: impl Into<String>) -> Self {
        self.with(CookiePredicate::DomainContains(needle.into()))
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.with(CookiePredicate::NameEquals(name.into()))
    }

    /// Drop cookies already expired at `instant`.
    pub fn not_expired_at(self, instant: f64) -> Self {
        self.with(CookiePredicate::NotExpiredAt(instant))
    }

    pub fn predicates(&self) -> &[CookiePredicate] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, cookie: &Cookie) -> bool {
        self.predicates.iter().all(|p| p.test(cookie))
    }

    /// Filter `cookies`, preserving their order.
    pub fn apply(&self, cookies: Vec<Cookie>) -> Vec<Cookie> {
        if self.is_empty() {
            return cookies;
        }
        let before = cookies.len();
        let kept: Vec<Cookie> = cookies.into_iter().filter(|c| self.matches(c)).collect();
        tracing::debug!(before, after = kept.len(), "filtered cookies");
        kept
    }
}
