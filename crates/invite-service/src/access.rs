//! Shared access-code check.

/// Exact, case-sensitive comparison of the supplied code with the
/// configured secret.
pub fn verify_access_code(supplied: &str, secret: &str) -> bool {
    supplied == secret
}
