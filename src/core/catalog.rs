use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// File extensions recognized as images, matched case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 9] = [
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "heic", "heif",
];

/// The ordered set of image files discovered in the active folder.
///
/// Discovery is non-recursive, paths are canonicalized once at scan time and
/// the list is sorted by path so every session sees the same order. Labels
/// play no part here; filtering happens in the session on top of this list.
pub struct Catalog {
    folder: Option<PathBuf>,
    image_files: Vec<PathBuf>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            folder: None,
            image_files: Vec::new(),
        }
    }

    /// Replace the catalog with the contents of `folder`.
    ///
    /// A missing or unreadable folder leaves the catalog empty and is logged,
    /// never treated as fatal.
    pub fn load(&mut self, folder: PathBuf) {
        self.folder = Some(folder);
        self.refresh();
    }

    /// Re-scan the active folder, fully replacing the file list.
    pub fn refresh(&mut self) {
        self.image_files.clear();

        let Some(folder) = &self.folder else {
            return;
        };

        match fs::read_dir(folder) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if !path.is_file() || !has_image_extension(&path) {
                        continue;
                    }
                    // Canonicalize once at discovery time; the canonical path
                    // string is the image's identity everywhere else.
                    match fs::canonicalize(&path) {
                        Ok(canonical) => self.image_files.push(canonical),
                        Err(e) => warn!("Skipping {:?}, canonicalize failed: {}", path, e),
                    }
                }
                self.image_files.sort();
                info!("Found {} images in {:?}", self.image_files.len(), folder);
            }
            Err(e) => {
                warn!("Failed to read folder {:?}: {}", folder, e);
            }
        }
    }

    /// Remove a single entry, as happens when a file is trashed or organized
    /// away. Returns whether the path was present.
    pub fn remove(&mut self, path: &Path) -> bool {
        if let Some(pos) = self.image_files.iter().position(|p| p == path) {
            self.image_files.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.image_files
    }

    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_load_sorts_and_filters_by_extension() {
        let dir = tempdir().unwrap();
        for name in ["b.png", "a.JPG", "notes.txt", "c.webp", "noext"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let mut catalog = Catalog::new();
        catalog.load(dir.path().to_path_buf());

        let names: Vec<String> = catalog
            .files()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.png", "c.webp"]);
    }

    #[test]
    fn test_missing_folder_yields_empty_catalog() {
        let dir = tempdir().unwrap();
        let mut catalog = Catalog::new();
        catalog.load(dir.path().join("does_not_exist"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_subfolders_are_not_recursed_into() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("top.jpg")).unwrap();
        let sub = dir.path().join("nested");
        fs::create_dir(&sub).unwrap();
        File::create(sub.join("deep.jpg")).unwrap();

        let mut catalog = Catalog::new();
        catalog.load(dir.path().to_path_buf());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_reload_replaces_previous_contents() {
        let dir_a = tempdir().unwrap();
        let dir_b = tempdir().unwrap();
        File::create(dir_a.path().join("one.png")).unwrap();
        File::create(dir_b.path().join("two.png")).unwrap();
        File::create(dir_b.path().join("three.png")).unwrap();

        let mut catalog = Catalog::new();
        catalog.load(dir_a.path().to_path_buf());
        assert_eq!(catalog.len(), 1);

        catalog.load(dir_b.path().to_path_buf());
        assert_eq!(catalog.len(), 2);
        assert!(catalog
            .files()
            .iter()
            .all(|p| p.parent() == Some(fs::canonicalize(dir_b.path()).unwrap().as_path())));
    }

    #[test]
    fn test_remove_entry() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("one.png")).unwrap();
        File::create(dir.path().join("two.png")).unwrap();

        let mut catalog = Catalog::new();
        catalog.load(dir.path().to_path_buf());

        let victim = catalog.files()[0].clone();
        assert!(catalog.remove(&victim));
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.remove(&victim));
    }
}
