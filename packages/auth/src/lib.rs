// ABOUTME: Taskboard authentication library providing login, registration and logout
// ABOUTME: Credential checks sit behind a verifier trait so real backends can replace the demo ones

pub mod error;
pub mod roster;
pub mod session;
pub mod verifier;

// Re-export main types
pub use error::{AuthError, AuthResult};
pub use roster::{RegisteredUser, UserRoster};
pub use session::{AuthMode, Session};
pub use verifier::{AdminCredentials, CredentialVerifier, OpenAccess};
