// ABOUTME: Local roster of self-registered users
// ABOUTME: Usernames are unique; each user is bound to the workspace id issued at registration

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AuthError, AuthResult};
use crate::verifier::CredentialVerifier;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub username: String,
    /// Plaintext demo credential; never written out
    #[serde(skip_serializing, default)]
    pub password: String,
    pub workspace_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct UserRoster {
    users: Vec<RegisteredUser>,
}

impl UserRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, username: &str) -> Option<&RegisteredUser> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.get(username).is_some()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn insert(&mut self, user: RegisteredUser) -> AuthResult<&RegisteredUser> {
        if self.contains(&user.username) {
            return Err(AuthError::UsernameTaken(user.username));
        }
        debug!(
            "Registered {} bound to workspace {}",
            user.username, user.workspace_id
        );
        self.users.push(user);
        Ok(&self.users[self.users.len() - 1])
    }
}

impl CredentialVerifier for UserRoster {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.get(username)
            .map(|u| u.password == password)
            .unwrap_or(false)
    }
}
