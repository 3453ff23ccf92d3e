//! Root-path lifecycle: establish once, reconstruct on read, repair, reset.
//!
//! The root is the single configured directory under which all projects
//! live. Its stored form lives in the state file (see [`crate::state`]);
//! every read rebuilds a full [`Location`] from the stored record before
//! any filesystem work happens.
//!
//! Lifecycle: `Absent --install--> Present`, `Present --reset--> Absent`.
//! Repairing a `Present` root (recreating a deleted directory) never
//! re-persists anything and never prompts.
//!
//! There is deliberately no lock around the check-then-create sequences
//! here; two concurrent invocations can race on directory creation. The
//! state file itself is protected against torn writes by the atomic save
//! in [`crate::state`], nothing more.

use std::path::Path;

use chrono::Utc;

use crate::error::AtelierError;
use crate::state::{self, State};
use crate::types::Location;

/// Outcome of repairing an already-configured root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootStatus {
    /// The directory was present on disk; nothing was done.
    Intact,
    /// The directory was missing and has been recreated.
    Recreated,
}

// ---------------------------------------------------------------------------
// 1. Reset
// ---------------------------------------------------------------------------

/// Clear the stored root, the reserved config location, and the
/// initialization stamp. Idempotent. Leaves any on-disk directories alone.
pub fn reset_at(home: &Path) -> Result<(), AtelierError> {
    state::save_at(home, &State::default())
}

/// `reset_at` convenience wrapper.
pub fn reset() -> Result<(), AtelierError> {
    reset_at(&state::home()?)
}

// ---------------------------------------------------------------------------
// 2. Read
// ---------------------------------------------------------------------------

/// The stored root, reconstructed into a full handle. `None` when no root
/// has been configured. Pure read; no filesystem effects beyond the state
/// file itself.
pub fn stored_root_at(home: &Path) -> Result<Option<Location>, AtelierError> {
    let state = state::load_at(home)?;
    Ok(state.root_path.as_ref().map(Location::from_stored))
}

/// `stored_root_at` convenience wrapper.
pub fn stored_root() -> Result<Option<Location>, AtelierError> {
    stored_root_at(&state::home()?)
}

/// The reconstructed root, or [`AtelierError::NotInitialized`] when absent.
/// Every operation that needs the root calls this first and aborts on the
/// error without further effects.
pub fn require_root_at(home: &Path) -> Result<Location, AtelierError> {
    stored_root_at(home)?.ok_or(AtelierError::NotInitialized)
}

/// `require_root_at` convenience wrapper.
pub fn require_root() -> Result<Location, AtelierError> {
    require_root_at(&state::home()?)
}

// ---------------------------------------------------------------------------
// 3. Install / repair
// ---------------------------------------------------------------------------

/// Establish the root for the first time: build the handle from the raw
/// user-supplied path, create the directory, then persist the stored form
/// and stamp the initialization time.
///
/// The raw string is used as given — no `~` expansion and no absoluteness
/// check; the prompt instructs the user, the code does not enforce it.
pub fn install_root_at(home: &Path, raw: &str) -> Result<Location, AtelierError> {
    let location = Location::from_fs_path(raw);
    std::fs::create_dir_all(location.fs_path())?;

    let mut state = state::load_at(home)?;
    state.root_path = Some(location.to_stored());
    state.initialized_at = Some(Utc::now());
    state::save_at(home, &state)?;
    Ok(location)
}

/// `install_root_at` convenience wrapper.
pub fn install_root(raw: &str) -> Result<Location, AtelierError> {
    install_root_at(&state::home()?, raw)
}

/// Repair an already-configured root: recreate the directory if it has
/// gone missing. Nothing is re-persisted (the stored value is already
/// there) and the caller is never re-prompted.
pub fn repair_root(root: &Location) -> Result<RootStatus, AtelierError> {
    if probe(root.fs_path())? {
        Ok(RootStatus::Intact)
    } else {
        std::fs::create_dir_all(root.fs_path())?;
        Ok(RootStatus::Recreated)
    }
}

// ---------------------------------------------------------------------------
// 4. Probe
// ---------------------------------------------------------------------------

/// Whether any filesystem entry occupies `path`.
///
/// Uses `symlink_metadata` so a dangling symlink still counts as present.
/// NotFound maps to `Ok(false)`; any other stat failure (permission denied
/// and friends) surfaces as an error instead of masquerading as absence.
pub fn probe(path: &Path) -> Result<bool, AtelierError> {
    match std::fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(AtelierError::Io(e)),
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn make_home() -> TempDir {
        TempDir::new().expect("tempdir")
    }

    #[test]
    fn unconfigured_root_reads_as_absent() {
        let home = make_home();
        assert!(stored_root_at(home.path()).expect("read").is_none());
        let err = require_root_at(home.path()).unwrap_err();
        assert!(matches!(err, AtelierError::NotInitialized));
    }

    #[test]
    fn install_creates_directory_and_persists() {
        let home = make_home();
        let target = home.path().join("workbench");
        let raw = target.to_string_lossy().into_owned();

        let location = install_root_at(home.path(), &raw).expect("install");
        assert!(target.is_dir());
        assert_eq!(location.fs_path(), target.as_path());

        let stored = stored_root_at(home.path()).expect("read").expect("present");
        assert_eq!(stored, location);

        let state = state::load_at(home.path()).expect("state");
        assert!(state.initialized_at.is_some());
    }

    #[test]
    fn install_twice_keeps_same_root() {
        let home = make_home();
        let raw = home.path().join("workbench").to_string_lossy().into_owned();

        let first = install_root_at(home.path(), &raw).expect("first");
        let second = install_root_at(home.path(), &raw).expect("second");
        assert_eq!(first, second);
        assert!(first.fs_path().is_dir());
    }

    #[test]
    fn repair_leaves_intact_root_alone() {
        let home = make_home();
        let raw = home.path().join("workbench").to_string_lossy().into_owned();
        let root = install_root_at(home.path(), &raw).expect("install");

        assert_eq!(repair_root(&root).expect("repair"), RootStatus::Intact);
    }

    #[test]
    fn repair_recreates_deleted_root_without_repersisting() {
        let home = make_home();
        let raw = home.path().join("workbench").to_string_lossy().into_owned();
        let root = install_root_at(home.path(), &raw).expect("install");
        let before = state::load_at(home.path()).expect("state");

        std::fs::remove_dir_all(root.fs_path()).expect("remove");
        assert_eq!(repair_root(&root).expect("repair"), RootStatus::Recreated);
        assert!(root.fs_path().is_dir());

        let after = state::load_at(home.path()).expect("state");
        assert_eq!(before, after, "repair must not rewrite the state file");
    }

    #[test]
    fn reset_clears_even_when_directory_survives() {
        let home = make_home();
        let raw = home.path().join("workbench").to_string_lossy().into_owned();
        let root = install_root_at(home.path(), &raw).expect("install");

        reset_at(home.path()).expect("reset");
        assert!(root.fs_path().is_dir(), "reset must not delete directories");
        let err = require_root_at(home.path()).unwrap_err();
        assert!(matches!(err, AtelierError::NotInitialized));
    }

    #[test]
    fn reset_is_idempotent() {
        let home = make_home();
        reset_at(home.path()).expect("first");
        reset_at(home.path()).expect("second");
        assert!(stored_root_at(home.path()).expect("read").is_none());
    }

    #[rstest]
    #[case::directory("dir")]
    #[case::file("file")]
    fn probe_sees_any_entry_kind(#[case] kind: &str) {
        let home = make_home();
        let target = home.path().join("entry");
        match kind {
            "dir" => std::fs::create_dir(&target).expect("mkdir"),
            "file" => std::fs::write(&target, b"x").expect("write"),
            other => unreachable!("unknown kind {other}"),
        }
        assert!(probe(&target).expect("probe"));
    }

    #[cfg(unix)]
    #[test]
    fn probe_sees_dangling_symlink() {
        let home = make_home();
        let target = home.path().join("entry");
        std::os::unix::fs::symlink(home.path().join("nowhere"), &target).expect("symlink");
        assert!(probe(&target).expect("probe"));
    }

    #[test]
    fn probe_missing_entry_is_false() {
        let home = make_home();
        assert!(!probe(&home.path().join("nothing")).expect("probe"));
    }
}
