// ABOUTME: Identity types shared by the session and directory layers
// ABOUTME: A logged-in user, their role, and the workspace they are bound to

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

/// The user of the current session. Lives from login until logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub role: Role,
    /// Workspace a regular user is bound to. Admins see every workspace and carry none.
    pub workspace_id: Option<String>,
}

impl User {
    pub fn admin(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            role: Role::Admin,
            workspace_id: None,
        }
    }

    pub fn regular(username: impl Into<String>, workspace_id: Option<String>) -> Self {
        Self {
            username: username.into(),
            role: Role::User,
            workspace_id,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
