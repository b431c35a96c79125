// ABOUTME: Pluggable credential verification
// ABOUTME: The built-in admin literal and the accept-anything policy of the open mode

use taskboard_core::{ADMIN_PASSWORD, ADMIN_USERNAME};

/// Checks a username/password pair
pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// The fixed administrator account
#[derive(Debug, Clone, Default)]
pub struct AdminCredentials;

impl CredentialVerifier for AdminCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == ADMIN_USERNAME && password == ADMIN_PASSWORD
    }
}

/// Accepts any pair; the session has already rejected empty fields
#[derive(Debug, Clone, Default)]
pub struct OpenAccess;

impl CredentialVerifier for OpenAccess {
    fn verify(&self, _username: &str, _password: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_literal() {
        assert!(AdminCredentials.verify("admin", "qwerty12+"));
        assert!(!AdminCredentials.verify("admin", "qwerty12"));
        assert!(!AdminCredentials.verify("Admin", "qwerty12+"));
    }
}
