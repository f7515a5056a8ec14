use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error("User name is required")]
    EmptyUserName,
}

/// Who is using the app right now
///
/// An immutable value: transitions return a new state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub logged_in: bool,
    pub user_name: String,
}

impl SessionState {
    pub fn signed_out() -> Self {
        SessionState::default()
    }

    /// Session for `user_name`, trimmed. Blank names are refused.
    pub fn signed_in(user_name: &str) -> Result<Self, SessionError> {
        let name = user_name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyUserName);
        }
        Ok(SessionState {
            logged_in: true,
            user_name: name.to_string(),
        })
    }

    pub fn display_name(&self) -> Option<&str> {
        self.logged_in.then_some(self.user_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_out_by_default() {
        let session = SessionState::default();
        assert!(!session.logged_in);
        assert_eq!(session.display_name(), None);
    }

    #[test]
    fn test_signed_in_trims_name() {
        let session = SessionState::signed_in("  neo ").unwrap();
        assert!(session.logged_in);
        assert_eq!(session.display_name(), Some("neo"));
    }

    #[test]
    fn test_blank_name_is_refused() {
        assert_eq!(
            SessionState::signed_in("   "),
            Err(SessionError::EmptyUserName)
        );
    }
}
