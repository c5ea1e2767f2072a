//! Helpers for turning caller-supplied names into safe path components and
//! log fields.

use std::path::Path;

/// Returns only the filename component of a path (no directory).
///
/// Used for tracing fields so logs do not carry absolute workspace paths.
pub fn redact_path(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
        .to_string()
}

/// Last component of a `/`- or `\`-separated name.
///
/// Fixture names are resolved inside a fixed folder, so any directory part a
/// caller passes in is dropped rather than allowed to escape that folder.
pub fn file_name(name: &str) -> &str {
    name.rsplit(&['/', '\\'][..]).next().unwrap_or(name)
}
