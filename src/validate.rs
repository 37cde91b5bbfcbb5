use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum message length accepted on submit.
pub const MESSAGE_LIMIT: usize = 300;

// local@domain.tld shape: no whitespace or extra '@' inside the parts.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

// Anything outside the whitelist is illegal in both fields. Known gap
// carried over from the original rules: '+' and international
// characters are rejected even though they are valid in addresses.
static ILLEGAL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9@._-]").expect("illegal chars regex"));

/// Identifier of the first rule a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    EmptyEmail,
    InvalidFormat,
    IllegalCharacters,
    EmptyMessage,
    TooLong,
}

impl FieldError {
    /// Human-readable text shown next to the field.
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyEmail => "Email cannot be empty.",
            Self::InvalidFormat => "Email format is invalid.",
            Self::IllegalCharacters => "Email contains illegal characters.",
            Self::EmptyMessage => "Message cannot be empty.",
            Self::TooLong => "Message exceeds 300 characters.",
        }
    }

    /// Variant of the illegal-character rule worded for the message field.
    pub fn message_field_text(self) -> &'static str {
        match self {
            Self::IllegalCharacters => "Message contains illegal characters.",
            other => other.message(),
        }
    }
}

/// One named check in a field's rule list. Rules run in order and the
/// first failure wins, so the ordering here is observable behavior.
struct Rule {
    error: FieldError,
    fails: fn(&str) -> bool,
}

const EMAIL_RULES: &[Rule] = &[
    Rule {
        error: FieldError::EmptyEmail,
        fails: |value| value.is_empty(),
    },
    Rule {
        error: FieldError::InvalidFormat,
        fails: |value| !EMAIL_SHAPE.is_match(value),
    },
    Rule {
        error: FieldError::IllegalCharacters,
        fails: |value| ILLEGAL_CHARS.is_match(value),
    },
];

const MESSAGE_RULES: &[Rule] = &[
    Rule {
        error: FieldError::EmptyMessage,
        fails: |value| value.is_empty(),
    },
    Rule {
        error: FieldError::IllegalCharacters,
        fails: |value| ILLEGAL_CHARS.is_match(value),
    },
    Rule {
        error: FieldError::TooLong,
        fails: |value| value.chars().count() > MESSAGE_LIMIT,
    },
];

fn first_failure(rules: &[Rule], value: &str) -> Result<(), FieldError> {
    match rules.iter().find(|rule| (rule.fails)(value)) {
        Some(rule) => Err(rule.error),
        None => Ok(()),
    }
}

/// Validate the email field. The raw input is trimmed before any rule runs.
pub fn validate_email(raw: &str) -> Result<(), FieldError> {
    first_failure(EMAIL_RULES, raw.trim())
}

/// Validate the message field. The raw input is trimmed before any rule runs.
pub fn validate_message(raw: &str) -> Result<(), FieldError> {
    first_failure(MESSAGE_RULES, raw.trim())
}

/// Live counter text for the message field, e.g. `Characters: 12/300`.
/// Counts the raw (untrimmed) input, like the live input listener does.
pub fn counter_label(length: usize) -> String {
    format!("Characters: {length}/{MESSAGE_LIMIT}")
}
