//! Common utility functions shared across the codebase.

use std::path::Path;

/// Joins a dotted value path with a child segment.
///
/// # Examples
///
/// ```
/// use keymint::utils::join_key_path;
///
/// assert_eq!(join_key_path("", "auth"), "auth");
/// assert_eq!(join_key_path("auth", "signin_required"), "auth.signin_required");
/// ```
pub fn join_key_path(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

/// Renders a path for user-facing messages, lossily.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
