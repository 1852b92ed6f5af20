use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// A submitted identifier, classified as an email address or a login name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Email(String),
    Name(String),
}

impl Identifier {
    /// Classifies free text. Anything that does not match the email pattern
    /// is treated as a login name.
    pub fn classify(value: &str) -> Self {
        if is_email(value) {
            Identifier::Email(value.to_string())
        } else {
            Identifier::Name(value.to_string())
        }
    }
}

pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}
