//! Filename safety helpers for the flat documents directory.

/// Returns whether `name` may be used in a destructive filesystem
/// operation without escaping the documents directory.
///
/// Rejects path separators and parent-directory sequences; every other
/// plain string is allowed.
pub fn is_safe(name: &str) -> bool {
    !name.contains('/') && !name.contains('\\') && !name.contains("..")
}

/// Reduce a client-supplied filename to a filesystem-safe token.
///
/// Directory components are stripped, whitespace becomes `_`, characters
/// outside `[A-Za-z0-9._-]` are dropped, and leading dots are removed so
/// the result can neither traverse nor hide. May return an empty string;
/// callers must treat that as an unusable name.
pub fn sanitize(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let cleaned: String = base
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    cleaned.trim_start_matches('.').to_string()
}
