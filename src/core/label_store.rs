use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const CSV_HEADER: &str = "image_path,category,timestamp";

/// In-memory mapping from image path to category, mirrored to a CSV file.
///
/// The file is append-only in normal operation: one row per label action,
/// last row per path wins. Only undo rewrites the file, through a temporary
/// sibling that is atomically renamed over the original so an interrupted
/// rewrite can never truncate it.
pub struct LabelStore {
    csv_path: PathBuf,
    labels: HashMap<String, String>,
}

impl LabelStore {
    pub fn new(csv_path: PathBuf) -> Self {
        Self {
            csv_path,
            labels: HashMap::new(),
        }
    }

    /// Parse the CSV file into the mapping. A missing file means an empty
    /// mapping; rows that do not have exactly three fields are skipped.
    pub fn load(&mut self) -> io::Result<()> {
        self.labels.clear();

        let content = match fs::read_to_string(&self.csv_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No label file at {:?}, starting empty", self.csv_path);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        // First line is the header.
        for line in content.lines().skip(1) {
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 3 || fields[0].is_empty() {
                debug!("Skipping malformed label row: {:?}", line);
                continue;
            }
            self.labels
                .insert(fields[0].to_string(), fields[1].to_string());
        }

        info!(
            "Loaded {} labels from {:?}",
            self.labels.len(),
            self.csv_path
        );
        Ok(())
    }

    /// Point the store at a different CSV file and reload from it.
    pub fn set_path(&mut self, csv_path: PathBuf) -> io::Result<()> {
        self.csv_path = csv_path;
        self.load()
    }

    /// Record a label: one appended row with a capture-time timestamp, then
    /// the in-memory map. Creates the file with a header when absent.
    pub fn append(&mut self, path: &str, category: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.csv_path)?;

        if file.metadata()?.len() == 0 {
            writeln!(file, "{}", CSV_HEADER)?;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.6f");
        writeln!(file, "{},{},{}", path, category, timestamp)?;

        self.labels.insert(path.to_string(), category.to_string());
        debug!("Appended label {:?} for {:?}", category, path);
        Ok(())
    }

    /// Drop every record for `path` and rewrite the file, preserving the
    /// header and the order of the remaining rows. Undo is the only caller;
    /// labeling itself never pays this O(n) cost.
    pub fn remove_and_rewrite(&mut self, path: &str) -> io::Result<()> {
        match fs::read_to_string(&self.csv_path) {
            Ok(content) => {
                let mut lines = vec![CSV_HEADER.to_string()];
                for line in content.lines().skip(1) {
                    if line.is_empty() {
                        continue;
                    }
                    let first_field = line.split(',').next().unwrap_or("");
                    if first_field != path {
                        lines.push(line.to_string());
                    }
                }

                // Write to a sibling temp file and rename into place so a
                // crash mid-rewrite leaves the original intact.
                let tmp_path = self.csv_path.with_extension("csv.tmp");
                let mut tmp = fs::File::create(&tmp_path)?;
                for line in &lines {
                    writeln!(tmp, "{}", line)?;
                }
                tmp.sync_all()?;
                drop(tmp);
                fs::rename(&tmp_path, &self.csv_path)?;
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Label file {:?} missing during undo", self.csv_path);
            }
            Err(e) => return Err(e),
        }

        self.labels.remove(path);
        debug!("Removed all records for {:?}", path);
        Ok(())
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.labels.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.labels.contains_key(path)
    }

    pub fn labels(&self) -> &HashMap<String, String> {
        &self.labels
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &Path) -> LabelStore {
        LabelStore::new(dir.join("labels.csv"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.load().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_creates_file_with_header() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.append("/pics/img1.jpg", "cat").unwrap();

        let content = fs::read_to_string(store.csv_path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].starts_with("/pics/img1.jpg,cat,"));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.append("/pics/img1.jpg", "cat").unwrap();
        store.append("/pics/img2.png", "dog").unwrap();

        let mut reloaded = store_in(dir.path());
        reloaded.load().unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("/pics/img1.jpg"), Some("cat"));
        assert_eq!(reloaded.get("/pics/img2.png"), Some("dog"));
    }

    #[test]
    fn test_last_record_wins_on_load() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.append("/pics/img1.jpg", "cat").unwrap();
        store.append("/pics/img1.jpg", "dog").unwrap();

        let mut reloaded = store_in(dir.path());
        reloaded.load().unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.get("/pics/img1.jpg"), Some("dog"));
    }

    #[test]
    fn test_malformed_rows_are_skipped() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("labels.csv");
        fs::write(
            &csv_path,
            "image_path,category,timestamp\n\
             /pics/a.jpg,cat,2024-01-01T00:00:00\n\
             only-one-field\n\
             /pics/b.jpg,dog\n\
             /pics/c.jpg,bird,2024-01-01T00:00:00,extra\n\
             /pics/d.jpg,fish,2024-01-01T00:00:00\n",
        )
        .unwrap();

        let mut store = LabelStore::new(csv_path);
        store.load().unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.contains("/pics/a.jpg"));
        assert!(store.contains("/pics/d.jpg"));
    }

    #[test]
    fn test_remove_and_rewrite_drops_every_record_for_path() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.append("/pics/a.jpg", "cat").unwrap();
        store.append("/pics/b.jpg", "dog").unwrap();
        store.append("/pics/a.jpg", "bird").unwrap();

        store.remove_and_rewrite("/pics/a.jpg").unwrap();
        assert!(!store.contains("/pics/a.jpg"));
        assert_eq!(store.get("/pics/b.jpg"), Some("dog"));

        let content = fs::read_to_string(store.csv_path()).unwrap();
        assert!(!content.contains("a.jpg"));
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_remove_with_missing_file_only_touches_map() {
        let dir = tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.labels.insert("/pics/a.jpg".into(), "cat".into());
        store.remove_and_rewrite("/pics/a.jpg").unwrap();
        assert!(store.is_empty());
        assert!(!store.csv_path().exists());
    }

    #[test]
    fn test_header_only_file_loads_empty() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("labels.csv");
        fs::write(&csv_path, "image_path,category,timestamp\n").unwrap();

        let mut store = LabelStore::new(csv_path);
        store.load().unwrap();
        assert!(store.is_empty());
    }
}
