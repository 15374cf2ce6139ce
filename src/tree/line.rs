//! Output lines
//!
//! A render is a sequence of [`Line`]s. Their `Display` form is the text
//! contract; sinks that care about structure (colors, JSON) match on the
//! variant instead.

use std::fmt;
use std::path::{MAIN_SEPARATOR, PathBuf};

use crate::error::ScanError;

pub const CONNECTOR_MIDDLE: &str = "├── ";
pub const CONNECTOR_LAST: &str = "└── ";
pub const PREFIX_CONTINUE: &str = "│   ";
pub const PREFIX_BLANK: &str = "    ";
/// Stands in for the children of a directory over the threshold.
pub const ELISION_MARKER: &str = "**";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// The resolved root path; directories carry a trailing separator.
    Header { path: PathBuf, is_dir: bool },
    /// One child, drawn with a connector.
    Entry {
        prefix: String,
        name: String,
        is_dir: bool,
        is_last: bool,
    },
    /// A directory whose children were elided.
    Elided { prefix: String },
    /// A directory that could not be listed.
    Diagnostic { prefix: String, error: ScanError },
}

impl Line {
    pub fn connector(is_last: bool) -> &'static str {
        if is_last {
            CONNECTOR_LAST
        } else {
            CONNECTOR_MIDDLE
        }
    }
}

/// Calculate the prefix for the children of an entry.
pub fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", current_prefix, PREFIX_BLANK)
    } else {
        format!("{}{}", current_prefix, PREFIX_CONTINUE)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Header { path, is_dir } => {
                let shown = path.display().to_string();
                if *is_dir && !shown.ends_with(MAIN_SEPARATOR) {
                    write!(f, "{}{}", shown, MAIN_SEPARATOR)
                } else {
                    write!(f, "{}", shown)
                }
            }
            Line::Entry {
                prefix,
                name,
                is_dir,
                is_last,
            } => {
                write!(f, "{}{}{}", prefix, Line::connector(*is_last), name)?;
                if *is_dir {
                    write!(f, "{}", MAIN_SEPARATOR)?;
                }
                Ok(())
            }
            Line::Elided { prefix } => write!(f, "{}{}", prefix, ELISION_MARKER),
            Line::Diagnostic { prefix, error } => write!(f, "{}{}", prefix, error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_header_separator() {
        let dir = Line::Header {
            path: PathBuf::from("/home/me/project"),
            is_dir: true,
        };
        assert_eq!(dir.to_string(), "/home/me/project/");

        let file = Line::Header {
            path: PathBuf::from("/home/me/project/main.rs"),
            is_dir: false,
        };
        assert_eq!(file.to_string(), "/home/me/project/main.rs");

        let fs_root = Line::Header {
            path: PathBuf::from("/"),
            is_dir: true,
        };
        assert_eq!(fs_root.to_string(), "/");
    }

    #[test]
    #[cfg(unix)]
    fn test_entry_connectors() {
        let middle = Line::Entry {
            prefix: "│   ".to_string(),
            name: "src".to_string(),
            is_dir: true,
            is_last: false,
        };
        assert_eq!(middle.to_string(), "│   ├── src/");

        let last = Line::Entry {
            prefix: String::new(),
            name: "main.rs".to_string(),
            is_dir: false,
            is_last: true,
        };
        assert_eq!(last.to_string(), "└── main.rs");
    }

    #[test]
    fn test_markers_use_prefix() {
        let elided = Line::Elided {
            prefix: "    ".to_string(),
        };
        assert_eq!(elided.to_string(), "    **");

        let denied = Line::Diagnostic {
            prefix: "│   ".to_string(),
            error: ScanError::PermissionDenied,
        };
        assert_eq!(denied.to_string(), "│   [permission denied]");
    }

    #[test]
    fn test_child_prefix() {
        assert_eq!(child_prefix("", false), "│   ");
        assert_eq!(child_prefix("", true), "    ");
        assert_eq!(child_prefix("│   ", true), "│       ");
    }
}
