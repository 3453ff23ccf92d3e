//! Project directories directly beneath the configured root.
//!
//! Projects have no registry of their own: the filesystem is the source of
//! truth, and every listing is a fresh read. Callers resolve the root once
//! via [`crate::registry::require_root_at`] and pass the handle in.

use std::path::PathBuf;

use crate::error::AtelierError;
use crate::registry;
use crate::types::{Location, ProjectName};

/// `root ⊕ name` — pure, no I/O.
pub fn project_path(root: &Location, name: &ProjectName) -> PathBuf {
    root.join(&name.0).fs_path().to_path_buf()
}

/// Create the directory for a new project under `root`.
///
/// Fails with [`AtelierError::ProjectExists`] if any entry (directory,
/// file, or symlink) already occupies the name; existing data is never
/// overwritten.
pub fn create(root: &Location, name: &ProjectName) -> Result<PathBuf, AtelierError> {
    if name.0.is_empty() {
        return Err(AtelierError::EmptyName);
    }
    let dir = project_path(root, name);
    if registry::probe(&dir)? {
        return Err(AtelierError::ProjectExists { path: dir });
    }
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// The names of existing projects: immediate children of `root` whose raw
/// entry type is a directory. Symlinks are excluded even when they point
/// at directories, since `DirEntry::file_type` does not follow links.
/// Sorted lexicographically.
pub fn list(root: &Location) -> Result<Vec<ProjectName>, AtelierError> {
    let mut names: Vec<ProjectName> = std::fs::read_dir(root.fs_path())?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|e| ProjectName::from(e.file_name().to_string_lossy().into_owned()))
        .collect();
    names.sort();
    Ok(names)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_root() -> (TempDir, Location) {
        let dir = TempDir::new().expect("tempdir");
        let root = Location::from_fs_path(dir.path());
        (dir, root)
    }

    #[test]
    fn create_makes_directory_under_root() {
        let (_dir, root) = make_root();
        let path = create(&root, &ProjectName::from("alpha")).expect("create");
        assert!(path.is_dir());
        assert_eq!(path, root.fs_path().join("alpha"));
    }

    #[test]
    fn create_rejects_duplicate_and_keeps_contents() {
        let (_dir, root) = make_root();
        let path = create(&root, &ProjectName::from("alpha")).expect("create");
        let keepsake = path.join("notes.txt");
        std::fs::write(&keepsake, b"important").expect("write");

        let err = create(&root, &ProjectName::from("alpha")).unwrap_err();
        assert!(matches!(err, AtelierError::ProjectExists { .. }));
        let contents = std::fs::read(&keepsake).expect("read back");
        assert_eq!(contents, b"important");
    }

    #[test]
    fn create_rejects_name_taken_by_a_file() {
        let (_dir, root) = make_root();
        std::fs::write(root.fs_path().join("alpha"), b"").expect("write");
        let err = create(&root, &ProjectName::from("alpha")).unwrap_err();
        assert!(matches!(err, AtelierError::ProjectExists { .. }));
    }

    #[test]
    fn create_rejects_empty_name() {
        let (_dir, root) = make_root();
        let err = create(&root, &ProjectName::from("")).unwrap_err();
        assert!(matches!(err, AtelierError::EmptyName));
    }

    #[test]
    fn list_keeps_only_real_directories() {
        let (_dir, root) = make_root();
        std::fs::create_dir(root.fs_path().join("a")).expect("mkdir");
        std::fs::write(root.fs_path().join("b.txt"), b"").expect("write");
        #[cfg(unix)]
        std::os::unix::fs::symlink(root.fs_path().join("a"), root.fs_path().join("c"))
            .expect("symlink");

        let names = list(&root).expect("list");
        assert_eq!(names, vec![ProjectName::from("a")]);
    }

    #[test]
    fn list_is_sorted() {
        let (_dir, root) = make_root();
        for name in ["delta", "alpha", "charlie", "bravo"] {
            std::fs::create_dir(root.fs_path().join(name)).expect("mkdir");
        }
        let names = list(&root).expect("list");
        let rendered: Vec<&str> = names.iter().map(|n| n.0.as_str()).collect();
        assert_eq!(rendered, vec!["alpha", "bravo", "charlie", "delta"]);
    }

    #[test]
    fn list_on_missing_root_surfaces_io_error() {
        let root = Location::from_fs_path("/nonexistent/atelier-root");
        let err = list(&root).unwrap_err();
        assert!(matches!(err, AtelierError::Io(_)));
    }

    #[test]
    fn project_path_joins_name() {
        let root = Location::from_fs_path("/srv/workbench");
        let path = project_path(&root, &ProjectName::from("alpha"));
        assert_eq!(path, PathBuf::from("/srv/workbench/alpha"));
    }
}
