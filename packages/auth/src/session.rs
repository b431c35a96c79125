// ABOUTME: Session identity: who is logged in and which workspace they are bound to
// ABOUTME: Login checks the admin account first, then the policy selected by the auth mode

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use taskboard_core::{User, ADMIN_USERNAME};
use tracing::{debug, info, warn};

use crate::error::{AuthError, AuthResult};
use crate::roster::{RegisteredUser, UserRoster};
use crate::verifier::{AdminCredentials, CredentialVerifier, OpenAccess};

/// How non-admin logins are checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Any non-empty username/password pair is accepted
    Open,
    /// The pair must match a registered user exactly
    #[default]
    Registered,
}

impl FromStr for AuthMode {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(AuthMode::Open),
            "registered" => Ok(AuthMode::Registered),
            _ => Err(AuthError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::Open => f.write_str("open"),
            AuthMode::Registered => f.write_str("registered"),
        }
    }
}

pub struct Session {
    mode: AuthMode,
    admin: Box<dyn CredentialVerifier>,
    roster: UserRoster,
    /// Workspace bindings of open-mode users who never registered
    bindings: HashMap<String, String>,
    current: Option<User>,
}

impl Session {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            admin: Box::new(AdminCredentials),
            roster: UserRoster::new(),
            bindings: HashMap::new(),
            current: None,
        }
    }

    /// Replace the administrator check
    pub fn with_admin_verifier(mut self, verifier: impl CredentialVerifier + 'static) -> Self {
        self.admin = Box::new(verifier);
        self
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn roster(&self) -> &UserRoster {
        &self.roster
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn login(&mut self, username: &str, password: &str) -> AuthResult<User> {
        if username.is_empty() || password.is_empty() {
            debug!("Login rejected: missing username or password");
            return Err(AuthError::MissingFields);
        }

        let user = if self.admin.verify(username, password) {
            User::admin(username)
        } else if self.policy().verify(username, password) {
            User::regular(username, self.binding_of(username))
        } else {
            warn!("Login rejected for {}", username);
            return Err(AuthError::InvalidCredentials);
        };

        info!("{} logged in as {}", user.username, user.role.as_str());
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Register a new user bound to `workspace_id` and log them in
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        workspace_id: String,
    ) -> AuthResult<User> {
        if username.is_empty() || password.is_empty() {
            debug!("Registration rejected: missing username or password");
            return Err(AuthError::MissingFields);
        }
        if username == ADMIN_USERNAME {
            return Err(AuthError::UsernameTaken(username.to_string()));
        }

        let registered = self.roster.insert(RegisteredUser {
            username: username.to_string(),
            password: password.to_string(),
            workspace_id,
        })?;

        let user = User::regular(
            registered.username.clone(),
            Some(registered.workspace_id.clone()),
        );
        info!("Registered and logged in {}", user.username);
        self.current = Some(user.clone());
        Ok(user)
    }

    /// End the session, returning who was logged in
    pub fn logout(&mut self) -> Option<User> {
        let user = self.current.take();
        if let Some(user) = &user {
            info!("{} logged out", user.username);
        }
        user
    }

    /// Bind the current unbound regular user to their first workspace
    pub fn bind_workspace(&mut self, workspace_id: &str) -> Option<&User> {
        let user = self.current.as_mut()?;
        if user.is_admin() || user.workspace_id.is_some() {
            return Some(&*user);
        }
        debug!("Binding {} to workspace {}", user.username, workspace_id);
        user.workspace_id = Some(workspace_id.to_string());
        self.bindings
            .insert(user.username.clone(), workspace_id.to_string());
        Some(&*user)
    }

    fn policy(&self) -> &dyn CredentialVerifier {
        match self.mode {
            AuthMode::Open => &OpenAccess,
            AuthMode::Registered => &self.roster,
        }
    }

    fn binding_of(&self, username: &str) -> Option<String> {
        self.roster
            .get(username)
            .map(|u| u.workspace_id.clone())
            .or_else(|| self.bindings.get(username).cloned())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("mode", &self.mode)
            .field("registered_users", &self.roster.len())
            .field("current", &self.current)
            .finish()
    }
}
