//! Property tests for the email extractor.

use pharma_papers::heuristics::extract_email;
use proptest::prelude::*;

proptest! {
    /// An email embedded in otherwise plain text is always found intact.
    #[test]
    fn embedded_email_is_found(
        local in "[a-z][a-z0-9]{0,9}",
        domain in "[a-z][a-z0-9]{0,9}",
        tld in "[a-z]{2,5}",
        prefix in "[a-z ]{0,20}",
        suffix in "[a-z ]{0,20}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        let text = format!("{prefix} {email} {suffix}");
        let found = extract_email(&text);
        prop_assert_eq!(found.as_deref(), Some(email.as_str()));
    }

    /// Text without an "@" never yields a match.
    #[test]
    fn text_without_at_sign_has_no_email(text in "[a-zA-Z0-9 .,;:-]{0,80}") {
        prop_assert_eq!(extract_email(&text), None);
    }

    /// Extraction is idempotent: re-extracting from a match returns it.
    #[test]
    fn extraction_is_idempotent(
        local in "[a-z][a-z0-9]{0,9}",
        domain in "[a-z][a-z0-9]{0,9}",
        tld in "[a-z]{2,5}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        let found = extract_email(&email).unwrap();
        prop_assert_eq!(extract_email(&found), Some(found.clone()));
    }
}
