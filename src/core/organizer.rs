use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::core::file_ops;
use crate::core::label_store::LabelStore;

/// Whether organizing keeps the originals in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizeMode {
    Copy,
    Move,
}

impl OrganizeMode {
    pub fn verb(&self) -> &'static str {
        match self {
            OrganizeMode::Copy => "Copied",
            OrganizeMode::Move => "Moved",
        }
    }
}

/// Per-file tallies for one organize pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OrganizeSummary {
    /// Files actually copied or moved.
    pub transferred: usize,
    /// Files whose destination already existed; never overwritten.
    pub skipped: usize,
    /// Files that could not be resolved or transferred.
    pub errors: usize,
}

/// Copy or move every labeled file into `<dest_parent>/labelled_images/<category>/`.
///
/// A stored path that no longer exists falls back to the file's basename
/// inside the active folder, which covers files that were relocated after
/// labeling. Failures are per-file and counted; the batch always runs to the
/// end. Only an unusable destination root aborts the whole pass.
pub fn organize(
    store: &LabelStore,
    active_folder: Option<&Path>,
    dest_parent: &Path,
    mode: OrganizeMode,
) -> io::Result<OrganizeSummary> {
    let target_root = dest_parent.join("labelled_images");
    fs::create_dir_all(&target_root)?;

    info!(
        "Organizing {} labeled files into {:?} ({:?})",
        store.len(),
        target_root,
        mode
    );

    let mut summary = OrganizeSummary::default();

    for (path_str, category) in store.labels() {
        let Some(src) = resolve_source(path_str, active_folder) else {
            warn!("Labeled file {:?} not found, counting as error", path_str);
            summary.errors += 1;
            continue;
        };
        let Some(file_name) = src.file_name() else {
            summary.errors += 1;
            continue;
        };

        let category_dir = target_root.join(category);
        if let Err(e) = fs::create_dir_all(&category_dir) {
            warn!("Could not create {:?}: {}", category_dir, e);
            summary.errors += 1;
            continue;
        }

        let dest = category_dir.join(file_name);
        if dest.exists() {
            summary.skipped += 1;
            continue;
        }

        let result = match mode {
            OrganizeMode::Copy => file_ops::copy_file(&src, &dest),
            OrganizeMode::Move => file_ops::move_file(&src, &dest),
        };
        match result {
            Ok(()) => summary.transferred += 1,
            Err(e) => {
                warn!("Failed to organize {:?}: {}", src, e);
                summary.errors += 1;
            }
        }
    }

    info!(
        "Organize complete: {} transferred, {} skipped, {} errors",
        summary.transferred, summary.skipped, summary.errors
    );
    Ok(summary)
}

/// The stored path when it still exists, otherwise the same basename inside
/// the active folder.
fn resolve_source(path_str: &str, active_folder: Option<&Path>) -> Option<PathBuf> {
    let stored = PathBuf::from(path_str);
    if stored.exists() {
        return Some(stored);
    }

    let folder = active_folder?;
    let fallback = folder.join(stored.file_name()?);
    if fallback.exists() {
        Some(fallback)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn labeled_store(dir: &Path, entries: &[(&str, &str)]) -> LabelStore {
        let mut store = LabelStore::new(dir.join("labels.csv"));
        for (name, category) in entries {
            let path = dir.join(name);
            fs::write(&path, b"img").unwrap();
            store
                .append(path.to_string_lossy().as_ref(), category)
                .unwrap();
        }
        store
    }

    #[test]
    fn test_copy_then_rerun_skips() {
        let src_dir = tempdir().unwrap();
        let dest_dir = tempdir().unwrap();
        let store = labeled_store(src_dir.path(), &[("img2.png", "dog")]);

        let summary = organize(
            &store,
            Some(src_dir.path()),
            dest_dir.path(),
            OrganizeMode::Copy,
        )
        .unwrap();
        assert_eq!(
            summary,
            OrganizeSummary {
                transferred: 1,
                skipped: 0,
                errors: 0
            }
        );
        assert!(dest_dir
            .path()
            .join("labelled_images/dog/img2.png")
            .exists());
        assert!(src_dir.path().join("img2.png").exists());

        // Second pass finds every destination already present.
        let summary = organize(
            &store,
            Some(src_dir.path()),
            dest_dir.path(),
            OrganizeMode::Copy,
        )
        .unwrap();
        assert_eq!(
            summary,
            OrganizeSummary {
                transferred: 0,
                skipped: 1,
                errors: 0
            }
        );
    }

    #[test]
    fn test_move_removes_originals() {
        let src_dir = tempdir().unwrap();
        let dest_dir = tempdir().unwrap();
        let store = labeled_store(src_dir.path(), &[("a.jpg", "cat"), ("b.jpg", "cat")]);

        let summary = organize(
            &store,
            Some(src_dir.path()),
            dest_dir.path(),
            OrganizeMode::Move,
        )
        .unwrap();
        assert_eq!(summary.transferred, 2);
        assert!(!src_dir.path().join("a.jpg").exists());
        assert!(dest_dir.path().join("labelled_images/cat/a.jpg").exists());
    }

    #[test]
    fn test_stale_path_falls_back_to_active_folder() {
        let src_dir = tempdir().unwrap();
        let dest_dir = tempdir().unwrap();
        let mut store = LabelStore::new(src_dir.path().join("labels.csv"));
        // Stored under a path that no longer exists; the real file lives in
        // the active folder under the same name.
        store.append("/gone/away/img1.jpg", "cat").unwrap();
        fs::write(src_dir.path().join("img1.jpg"), b"img").unwrap();

        let summary = organize(
            &store,
            Some(src_dir.path()),
            dest_dir.path(),
            OrganizeMode::Copy,
        )
        .unwrap();
        assert_eq!(summary.transferred, 1);
        assert!(dest_dir.path().join("labelled_images/cat/img1.jpg").exists());
    }

    #[test]
    fn test_unresolvable_file_counts_as_error() {
        let dest_dir = tempdir().unwrap();
        let csv_dir = tempdir().unwrap();
        let mut store = LabelStore::new(csv_dir.path().join("labels.csv"));
        store.append("/nowhere/img1.jpg", "cat").unwrap();

        let summary = organize(&store, None, dest_dir.path(), OrganizeMode::Copy).unwrap();
        assert_eq!(
            summary,
            OrganizeSummary {
                transferred: 0,
                skipped: 0,
                errors: 1
            }
        );
    }
}
