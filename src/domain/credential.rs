use std::fmt;

/// An opaque API token. Lives for one request or one session, never persisted.
/// `preview` is the only representation allowed to reach logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

const PREVIEW_CHARS: usize = 8;

impl Credential {
    /// Returns `None` for blank input so empty form fields and unset
    /// environment variables never count as a resolved credential.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn preview(&self) -> String {
        let visible: String = self.0.chars().take(PREVIEW_CHARS).collect();
        if self.0.chars().count() > PREVIEW_CHARS {
            format!("{}...", visible)
        } else {
            visible
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential([REDACTED])")
    }
}
