//! Domain types for Atelier.
//!
//! The persisted form of a location ([`StoredLocation`]) is plain strings
//! only. Filesystem work always goes through the reconstructed handle
//! ([`Location`]); the stored record is never joined or opened directly.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a project directory under the root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectName(pub String);

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ProjectName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// The serializable, partial form of a location: scheme, authority, and
/// path as plain strings. This is what the state file holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredLocation {
    pub scheme: String,
    pub authority: String,
    pub path: String,
}

/// A fully-specified location handle.
///
/// Built either from a user-supplied path string (scheme `file`, empty
/// authority) or rebuilt from a [`StoredLocation`] read back from the
/// state file. Not serializable; convert through [`Location::to_stored`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    scheme: String,
    authority: String,
    path: PathBuf,
}

impl Location {
    /// A local-filesystem location for `path`.
    pub fn from_fs_path(path: impl Into<PathBuf>) -> Self {
        Self {
            scheme: String::from("file"),
            authority: String::new(),
            path: path.into(),
        }
    }

    /// Reconstruct the full handle from its stored parts.
    pub fn from_stored(stored: &StoredLocation) -> Self {
        Self {
            scheme: stored.scheme.clone(),
            authority: stored.authority.clone(),
            path: PathBuf::from(&stored.path),
        }
    }

    /// The plain record to persist.
    pub fn to_stored(&self) -> StoredLocation {
        StoredLocation {
            scheme: self.scheme.clone(),
            authority: self.authority.clone(),
            path: self.path.to_string_lossy().into_owned(),
        }
    }

    /// A child location one path segment below this one.
    pub fn join(&self, segment: &str) -> Location {
        Location {
            scheme: self.scheme.clone(),
            authority: self.authority.clone(),
            path: self.path.join(segment),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The location as a local filesystem path.
    pub fn fs_path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scheme == "file" && self.authority.is_empty() {
            write!(f, "{}", self.path.display())
        } else {
            write!(f, "{}://{}{}", self.scheme, self.authority, self.path.display())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
