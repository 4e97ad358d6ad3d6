//! Path normalization utilities.
//!
//! - `normalize_path` - file system paths (canonicalize + fallback)
//! - `expand_path` - tilde expansion, then resolve against a root
//! - `stays_inside` / `relative_to` - containment checks

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Expand `~` and resolve a configured path against the project root.
///
/// # Example
/// ```ignore
/// expand_path(Path::new("public"), root)       -> /site/public
/// expand_path(Path::new("~/shared/img"), root) -> /home/alice/shared/img
/// ```
pub fn expand_path(path: &Path, root: &Path) -> PathBuf {
    let expanded = match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    };
    let full = if expanded.is_relative() {
        root.join(expanded)
    } else {
        expanded
    };
    normalize_path(&full)
}

/// Whether joining `path` onto a directory stays inside that directory.
///
/// Rejects absolute paths and any `..` component.
pub fn stays_inside(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Express `path` relative to `base`.
///
/// Relative paths are taken as already relative to `base`. Absolute paths
/// outside `base` yield `None`.
pub fn relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    if path.is_relative() {
        return Some(path.to_path_buf());
    }
    normalize_path(path)
        .strip_prefix(base)
        .ok()
        .map(Path::to_path_buf)
}
