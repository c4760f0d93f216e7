//! Contact email extraction from affiliation text.

use std::sync::LazyLock;

use regex::Regex;

/// Standard email shape: local part, "@", domain with at least one dot.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});

/// Extract the first email address from `text`, scanning left to right.
///
/// Returns `None` when no email-shaped token is present. Casing of the
/// matched address is preserved.
#[must_use]
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}
