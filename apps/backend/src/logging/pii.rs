//! PII redaction for log output.
//!
//! Raw database and request errors can carry member emails or tokens.
//! Anything logged at warn/error level from error-mapping code goes through
//! `Redacted` so those values never reach the log stream verbatim.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
    });
    &EMAIL_REGEX
}

fn token_regex() -> &'static Regex {
    static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Za-z0-9+/_-]{24,}={0,2}\b").unwrap()
    });
    &TOKEN_REGEX
}

/// Redacts sensitive information from a string.
///
/// - Emails: keeps the first character of the local part and the domain.
/// - Opaque token-like runs (>= 24 chars): replaced with [REDACTED_TOKEN].
pub fn redact(input: &str) -> String {
    let email_redacted = email_regex().replace_all(input, |caps: &regex::Captures| {
        let full_match = &caps[0];
        match full_match.find('@') {
            Some(at_pos) => {
                let local = &full_match[..at_pos];
                let domain = &full_match[at_pos..];
                let first = local.chars().next().map(String::from).unwrap_or_default();
                format!("{first}***{domain}")
            }
            None => "[REDACTED_EMAIL]".to_string(),
        }
    });

    token_regex()
        .replace_all(&email_redacted, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Display wrapper applying `redact` lazily at format time.
pub struct Redacted<T: AsRef<str>>(pub T);

impl<T: AsRef<str>> fmt::Display for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_email_local_part() {
        let out = redact("duplicate key for coach@example.com in memberships");
        assert!(out.contains("c***@example.com"), "got: {out}");
        assert!(!out.contains("coach@example.com"));
    }

    #[test]
    fn redacts_long_tokens() {
        let out = redact("bearer abcdefABCDEF0123456789abcdef rejected");
        assert!(out.contains("[REDACTED_TOKEN]"));
    }

    #[test]
    fn leaves_plain_messages_alone() {
        assert_eq!(redact("fixture not found"), "fixture not found");
    }

    #[test]
    fn display_wrapper_redacts() {
        let wrapped = Redacted("mail to coach@example.com");
        assert_eq!(format!("{wrapped}"), "mail to c***@example.com");
    }
}
