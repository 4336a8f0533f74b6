use super::role::Role;
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One entry of the session log, either a question or an answer entry
pub struct Message {
    pub role: Role,
    pub created: i64,
    pub text: String,
}

impl Message {
    fn new<S: Into<String>>(role: Role, text: S) -> Self {
        Message {
            role,
            created: Utc::now().timestamp(),
            text: text.into(),
        }
    }

    /// Create a new user message with the current timestamp
    pub fn user<S: Into<String>>(text: S) -> Self {
        Self::new(Role::User, text)
    }

    /// Create a new assistant message with the current timestamp
    pub fn assistant<S: Into<String>>(text: S) -> Self {
        Self::new(Role::Assistant, text)
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}
