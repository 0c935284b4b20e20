use once_cell::sync::Lazy;
use regex::Regex;

/// local-part@domain.tld, where the final label is two or more letters of either case.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern must compile")
});

/// Extract email-like substrings from text, in order of occurrence.
///
/// Matching is purely lexical: no deduplication and no deliverability checks.
/// Returns an empty vector when nothing matches.
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
