//! Mock sign-in status shown in the header.
//!
//! Purely cosmetic: the token is never sent with any request.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Connecting,
    SignedIn,
}

impl SessionStatus {
    /// An empty token means the sign-in call failed; keep showing "Connecting..."
    pub fn from_token(token: &str) -> Self {
        if token.is_empty() {
            SessionStatus::Connecting
        } else {
            SessionStatus::SignedIn
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Connecting => "Connecting...",
            SessionStatus::SignedIn => "Admin User",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token() {
        assert_eq!(SessionStatus::from_token("abc"), SessionStatus::SignedIn);
        assert_eq!(SessionStatus::from_token(""), SessionStatus::Connecting);
        assert_eq!(SessionStatus::default().label(), "Connecting...");
    }
}
