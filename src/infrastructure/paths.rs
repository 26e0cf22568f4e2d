//! Path handling for configuration values.
//!
//! Block options such as `trace-file` and `labels-file` are typed by
//! editors, who expect `~` to mean their home directory.

use std::path::PathBuf;

/// Expands a leading `~` using the `HOME` environment variable.
///
/// Paths without a leading `~`, and any path when `HOME` is unset, are
/// returned unchanged. `~user` forms are not expanded.
///
/// # Examples
///
/// ```
/// use doctor_locator::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/file.toml"), "relative/file.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_with_home(path, std::env::var("HOME").ok().as_deref())
}

/// Trims, expands `~` and converts to a [`PathBuf`]. Blank input yields `None`.
#[must_use]
pub fn resolve_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(expand_tilde(trimmed)))
}

fn expand_with_home(path: &str, home: Option<&str>) -> String {
    let Some(home) = home.filter(|h| !h.is_empty()) else {
        return path.to_string();
    };

    if path == "~" {
        home.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_home_prefix_only() {
        let home = Some("/home/ada/");
        assert_eq!(expand_with_home("~", home), "/home/ada/");
        assert_eq!(expand_with_home("~/traces/spans.jsonl", home), "/home/ada/traces/spans.jsonl");
        assert_eq!(expand_with_home("~bob/file", home), "~bob/file");
        assert_eq!(expand_with_home("/tmp/~/x", home), "/tmp/~/x");
    }

    #[test]
    fn leaves_path_without_home() {
        assert_eq!(expand_with_home("~/x", None), "~/x");
        assert_eq!(expand_with_home("~/x", Some("")), "~/x");
    }

    #[test]
    fn blank_paths_resolve_to_none() {
        assert_eq!(resolve_path("   "), None);
        assert_eq!(resolve_path(" /srv/labels.toml "), Some(PathBuf::from("/srv/labels.toml")));
    }
}
