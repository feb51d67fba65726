//! Theme path resolution.
//!
//! Only the first segment of the raw text is inspected: a lone `~` maps to
//! the home directory, a lone `.` maps to the theme file's own directory,
//! anything else passes through untouched. Output always uses forward
//! slashes so stored paths compare the same across platforms.

use std::path::{Component, Path, PathBuf};

/// Resolves raw path text against the theme file's location.
///
/// Empty input stays empty. Segments are inspected through
/// [`Path::components`] rather than raw string prefixes, so a file that
/// merely *starts* with `~` or `.` (e.g. `~backup.png`) is left alone.
pub fn resolve_path(raw: &str, theme_file: &Path) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let path = Path::new(raw);
    let mut components = path.components();

    let resolved: PathBuf = match components.next() {
        Some(Component::Normal(seg)) if seg == "~" => match dirs::home_dir() {
            Some(home) => home.join(components.as_path()),
            None => path.to_path_buf(),
        },
        Some(Component::CurDir) => {
            let base = theme_file.parent().unwrap_or_else(|| Path::new(""));
            base.join(components.as_path())
        }
        _ => path.to_path_buf(),
    };

    to_generic(&resolved)
}

/// Renders a path with forward-slash separators.
fn to_generic(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::RootDir => {
                if out.is_empty() {
                    out.push('/');
                }
            }
            Component::Prefix(prefix) => {
                out.push_str(&prefix.as_os_str().to_string_lossy());
            }
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const THEME: &str = "/a/b/theme.xml";

    #[test]
    fn theme_relative_dot_resolves_to_theme_dir() {
        assert_eq!(resolve_path("./img.png", Path::new(THEME)), "/a/b/img.png");
        assert_eq!(
            resolve_path("./art/bg.png", Path::new(THEME)),
            "/a/b/art/bg.png"
        );
    }

    #[test]
    fn tilde_resolves_to_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let expected = to_generic(&home.join("img.png"));
        assert_eq!(resolve_path("~/img.png", Path::new(THEME)), expected);
    }

    #[test]
    fn absolute_paths_pass_through() {
        assert_eq!(
            resolve_path("/abs/img.png", Path::new(THEME)),
            "/abs/img.png"
        );
    }

    #[test]
    fn bare_relative_paths_pass_through() {
        assert_eq!(resolve_path("img.png", Path::new(THEME)), "img.png");
    }

    #[test]
    fn marker_must_be_a_whole_segment() {
        // a leading character is not a leading segment
        assert_eq!(resolve_path("~backup.png", Path::new(THEME)), "~backup.png");
        assert_eq!(resolve_path(".hidden", Path::new(THEME)), ".hidden");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(resolve_path("", Path::new(THEME)), "");
    }
}
