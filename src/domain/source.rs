//! Call-site trimming for log messages.

/// Keep only the last two path segments of `source`.
///
/// `src/store/user.rs:42` becomes `store/user.rs:42`. Paths with two or
/// fewer segments are returned unchanged. Windows separators are treated the
/// same as `/`.
#[must_use]
pub fn source_short(source: &str) -> String {
    let normalized = source.replace('\\', "/");
    let parts: Vec<&str> = normalized.split('/').collect();
    if parts.len() <= 2 {
        return normalized;
    }
    parts[parts.len() - 2..].join("/")
}
