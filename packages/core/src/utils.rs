// ABOUTME: Shared utility functions for Taskboard
// ABOUTME: ID generation and required-input checks

use crate::constants::ID_LENGTH;
use rand::Rng;

/// Generate an 8-character alphanumeric id
pub fn generate_id() -> String {
    const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Generate an id for which `is_taken` returns false
pub fn generate_unique_id(is_taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = generate_id();
        if !is_taken(&id) {
            return id;
        }
        tracing::debug!("Generated id {} collides with an existing one, retrying", id);
    }
}

/// True when a required text input has no content
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
