/// Key the sign-in flow stores the API token under in `localStorage`
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Credentials of the signed-in user, passed explicitly to calls that may authenticate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Builds a session from a stored token, treating blank tokens as signed out
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.token.is_some()
    }
}

/// Session context shared with the component tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub session: Session,
    /// Whether the stored token has been read yet
    pub fetched: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect blank stored tokens to be treated as no session
    #[test]
    fn blank_token_is_anonymous() {
        assert!(!Session::new(Some("   ".to_string())).is_present());
        assert!(!Session::new(None).is_present());
        assert_eq!(Session::new(Some("abc".to_string())).token(), Some("abc"));
    }
}
