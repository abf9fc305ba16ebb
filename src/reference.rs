//! Supplementary material attached to a question.
//!
//! A reference is classified once, when its block is parsed. Rendering only
//! resolves local paths into `file://` URLs and wraps the result in an OSC 8
//! hyperlink so terminals that support it make the line clickable.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use tracing::warn;
use url::Url;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Reference {
    #[default]
    None,
    /// Already an absolute URL; shown exactly as written.
    Url(String),
    /// Filesystem path, possibly relative to the working directory.
    LocalPath(PathBuf),
}

impl Reference {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Reference::None;
        }

        // Single-letter schemes are Windows drive letters (C:\notes\img.png).
        match Url::parse(raw) {
            Ok(url) if url.scheme().len() > 1 => Reference::Url(raw.to_string()),
            _ => Reference::LocalPath(PathBuf::from(raw)),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Reference::None)
    }

    /// The link target for this reference. Relative paths are joined onto
    /// `base_dir` before conversion, so `base_dir` should be absolute.
    pub fn resolve(&self, base_dir: &Path) -> Option<String> {
        match self {
            Reference::None => None,
            Reference::Url(url) => Some(url.clone()),
            Reference::LocalPath(path) => {
                let absolute = if path.is_absolute() {
                    path.clone()
                } else {
                    base_dir.join(path)
                };
                match Url::from_file_path(&absolute) {
                    Ok(url) => Some(url.to_string()),
                    Err(()) => {
                        warn!(path = %absolute.display(), "cannot express reference as a file URL");
                        None
                    }
                }
            }
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::None => Ok(()),
            Reference::Url(url) => f.write_str(url),
            Reference::LocalPath(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Serialize for Reference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Reference::None => serializer.serialize_none(),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

/// OSC 8 hyperlink. Terminals without support print `label` alone.
pub fn hyperlink(uri: &str, label: &str) -> String {
    format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", uri, label)
}
