use serde::{Deserialize, Serialize};

/// Profile of the logged-in user.
///
/// Set atomically with the session on login and left untouched until logout
/// or the next login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
