//! Persisted per-installation state.
//!
//! # Storage layout
//!
//! ```text
//! ~/.atelier/            (mode 0700)
//!   state.yaml           (mode 0600)
//! ```
//!
//! # API pattern
//!
//! Every function has two forms:
//! - `fn_at(home: &Path, …)` — explicit home; used in tests with `TempDir`
//! - `fn(…)` — derives home from `dirs::home_dir()`, delegates to `_at`
//!
//! Tests must NEVER call the no-arg wrappers; always use `_at`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AtelierError;
use crate::types::StoredLocation;

pub const STATE_DIR: &str = ".atelier";
pub const STATE_FILE: &str = "state.yaml";

/// The durable key-value store: one YAML document per installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct State {
    /// The configured root location, in its partial stored form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_path: Option<StoredLocation>,

    /// Reserved for a future per-root configuration location. Written as
    /// cleared; never otherwise populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_path: Option<StoredLocation>,

    /// Stamped when `root_path` is first persisted; cleared on reset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initialized_at: Option<DateTime<Utc>>,
}

/// `<home>/.atelier/state.yaml` — pure, no I/O.
pub fn state_path(home: &Path) -> PathBuf {
    home.join(STATE_DIR).join(STATE_FILE)
}

/// Load the state file, or `State::default()` if it does not exist yet.
pub fn load_at(home: &Path) -> Result<State, AtelierError> {
    let path = state_path(home);
    if !path.exists() {
        return Ok(State::default());
    }
    let contents = std::fs::read_to_string(&path)?;
    serde_yaml::from_str(&contents).map_err(|e| AtelierError::Parse { path, source: e })
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<State, AtelierError> {
    load_at(&home()?)
}

/// Atomically save the state to `<home>/.atelier/state.yaml`.
///
/// Write flow: serialize → `.yaml.tmp` sibling → `chmod 0600` → `rename`.
/// The `.tmp` lives in the same directory as the target (same filesystem —
/// no EXDEV on macOS).
pub fn save_at(home: &Path, state: &State) -> Result<(), AtelierError> {
    let dir = home.join(STATE_DIR);
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
        set_dir_permissions(&dir)?;
    }
    let path = dir.join(STATE_FILE);
    let tmp_path = dir.join(format!("{STATE_FILE}.tmp"));

    let yaml = serde_yaml::to_string(state)?;
    std::fs::write(&tmp_path, yaml)?;
    set_file_permissions(&tmp_path)?;
    std::fs::rename(&tmp_path, &path)?;
    Ok(())
}

/// `save_at` convenience wrapper.
pub fn save(state: &State) -> Result<(), AtelierError> {
    save_at(&home()?, state)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

pub(crate) fn home() -> Result<PathBuf, AtelierError> {
    dirs::home_dir().ok_or(AtelierError::HomeNotFound)
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), AtelierError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), AtelierError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), AtelierError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    Ok(())
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), AtelierError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
