//! Lexical path handling.
//!
//! Paths are treated as `/`-separated strings so that classification gives
//! the same answer for Windows and Unix inputs. Nothing here touches the
//! filesystem.

use std::path::Path;

/// Convert a path to a `/`-separated string.
pub(crate) fn to_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Whether a `/`-separated path is absolute (`/x` or a `C:/x` drive path).
pub(crate) fn is_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    path.starts_with('/')
        || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
}

/// Collapse `.` and `..` segments and repeated separators.
///
/// `..` never climbs above an absolute root or a drive prefix. In a relative
/// path, leading `..` segments that cannot be collapsed are kept.
pub(crate) fn collapse(path: &str) -> String {
    let absolute = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {},
            ".." => match parts.last() {
                Some(last) if *last != ".." && !is_drive(last) => {
                    parts.pop();
                },
                Some(_) | None if absolute || parts.first().is_some_and(|p| is_drive(p)) => {},
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }
    let joined = parts.join("/");
    if absolute {
        format!("/{joined}")
    } else {
        joined
    }
}

fn is_drive(segment: &str) -> bool {
    segment.len() == 2 && segment.ends_with(':')
}

/// Directory part of a `/`-separated path (empty for a bare file name).
pub(crate) fn parent(path: &str) -> &str {
    match path.rsplit_once('/') {
        Some(("", _)) => "/",
        Some((dir, _)) => dir,
        None => "",
    }
}

/// Join a directory and a relative specifier, then collapse.
pub(crate) fn resolve(dir: &str, relative: &str) -> String {
    if dir.is_empty() {
        collapse(relative)
    } else {
        collapse(&format!("{dir}/{relative}"))
    }
}

/// Normalize a root or base-directory string: `/` separators, no leading
/// `./` or `/`, no trailing `/`.
pub(crate) fn normalize_prefix(raw: &str) -> String {
    let slashed = raw.trim().replace('\\', "/");
    let mut rest = slashed.as_str();
    loop {
        if let Some(stripped) = rest.strip_prefix("./") {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('/') {
            rest = stripped;
        } else {
            break;
        }
    }
    rest.trim_end_matches('/').to_owned()
}

/// Express a collapsed path relative to the workspace root.
///
/// Relative inputs are taken to be workspace-relative already. Returns
/// `None` when an absolute path lies outside the workspace root.
pub(crate) fn relative_to(path: &str, workspace_root: &str) -> Option<String> {
    if !is_absolute(path) {
        return Some(path.trim_start_matches("./").to_owned());
    }
    if workspace_root.is_empty() {
        return Some(path.trim_start_matches('/').to_owned());
    }
    let rest = path.strip_prefix(workspace_root)?;
    if rest.is_empty() || rest.starts_with('/') || workspace_root.ends_with('/') {
        Some(rest.trim_start_matches('/').to_owned())
    } else {
        None
    }
}
