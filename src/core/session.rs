use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::core::catalog::Catalog;
use crate::core::file_ops;
use crate::core::label_store::LabelStore;
use crate::core::organizer::{self, OrganizeMode, OrganizeSummary};
use crate::state::SessionConfig;

/// One labeling action, captured before the state it mutated, so undo can
/// put both the store and the view position back.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub path: PathBuf,
    pub category: String,
    pub index: usize,
    pub hide_labeled: bool,
}

/// Outcome of a `save_label` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOutcome {
    /// Label recorded; more images remain in the view.
    Labeled,
    /// Label recorded and the filter view is now empty. Terminal for this
    /// folder until an undo or a new folder load revives it.
    AllLabeled,
    /// Empty view, nothing to label.
    NothingToLabel,
    /// Blank category rejected, no state mutated.
    EmptyCategory,
}

/// Outcome of a navigation call. Walking past either end is a reported
/// no-op, not an error, so the UI can show an end-of-list notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Moved,
    EndOfList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    Restored { path: PathBuf, category: String },
    NothingToUndo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrashOutcome {
    /// File moved to the trash folder; carries the destination path.
    Trashed(PathBuf),
    NothingToTrash,
    /// The move failed (permissions, name collision). State is unchanged.
    Failed(String),
}

/// The labeling session: catalog, label store, filter view, undo history and
/// the persisted configuration, all behind one explicitly-passed value.
///
/// Every operation runs to completion and returns a typed outcome; the
/// presentation layer reacts to outcomes rather than being called back into.
pub struct LabelSession {
    catalog: Catalog,
    store: LabelStore,
    config: SessionConfig,
    config_path: Option<PathBuf>,
    view: Vec<PathBuf>,
    current_index: usize,
    hide_labeled: bool,
    history: Vec<HistoryEntry>,
}

impl LabelSession {
    /// Build a session from a configuration. `config_path` is where category
    /// and folder changes get persisted; `None` disables persistence, which
    /// headless tests use.
    pub fn new(config: SessionConfig, config_path: Option<PathBuf>) -> Self {
        let mut store = LabelStore::new(PathBuf::from(&config.csv_file));
        if let Err(e) = store.load() {
            warn!("Failed to load label file: {}", e);
        }

        let mut session = Self {
            catalog: Catalog::new(),
            store,
            config,
            config_path,
            view: Vec::new(),
            current_index: 0,
            hide_labeled: true,
            history: Vec::new(),
        };

        if !session.config.last_folder.is_empty() {
            let folder = PathBuf::from(&session.config.last_folder);
            if folder.is_dir() {
                session.catalog.load(folder);
            } else {
                warn!("Last folder {:?} no longer exists", session.config.last_folder);
            }
        }
        session.apply_filter();
        session
    }

    /// Load a new folder, replacing the catalog and invalidating the view and
    /// undo history tied to the old one.
    pub fn load_folder(&mut self, folder: PathBuf) {
        info!("Loading folder {:?}", folder);
        self.config.last_folder = folder.to_string_lossy().into_owned();
        self.persist_config();
        self.catalog.load(folder);
        self.history.clear();
        self.apply_filter();
    }

    /// Switch to a different label file and reload the store from it.
    pub fn set_label_file(&mut self, csv_path: PathBuf) -> io::Result<()> {
        info!("Switching label file to {:?}", csv_path);
        self.config.csv_file = csv_path.to_string_lossy().into_owned();
        self.persist_config();
        self.store.set_path(csv_path)?;
        self.apply_filter();
        Ok(())
    }

    /// Recompute the filter view from the catalog, the store and the
    /// hide-labeled toggle, resetting the current index to 0. Idempotent.
    pub fn apply_filter(&mut self) {
        self.view = if self.hide_labeled {
            self.catalog
                .files()
                .iter()
                .filter(|p| !self.store.contains(p.to_string_lossy().as_ref()))
                .cloned()
                .collect()
        } else {
            self.catalog.files().to_vec()
        };
        self.current_index = 0;
    }

    pub fn set_hide_labeled(&mut self, hide: bool) {
        if self.hide_labeled != hide {
            self.hide_labeled = hide;
            self.apply_filter();
        }
    }

    pub fn next(&mut self) -> NavOutcome {
        if !self.view.is_empty() && self.current_index < self.view.len() - 1 {
            self.current_index += 1;
            NavOutcome::Moved
        } else {
            NavOutcome::EndOfList
        }
    }

    pub fn prev(&mut self) -> NavOutcome {
        if self.current_index > 0 {
            self.current_index -= 1;
            NavOutcome::Moved
        } else {
            NavOutcome::EndOfList
        }
    }

    /// The image at the current view position, `None` when the view is empty.
    pub fn current(&self) -> Option<&PathBuf> {
        self.view.get(self.current_index)
    }

    /// Label the current image.
    ///
    /// The durable append happens before any in-memory mutation; if it fails
    /// the session is left exactly as it was. With hide-labeled on, the
    /// labeled image leaves the view in place and the next one slides into
    /// the same position; with it off, the index just advances.
    pub fn save_label(&mut self, category: &str) -> io::Result<LabelOutcome> {
        let category = category.trim();
        if category.is_empty() {
            return Ok(LabelOutcome::EmptyCategory);
        }
        let Some(path) = self.current().cloned() else {
            debug!("save_label with empty view, nothing to label");
            return Ok(LabelOutcome::NothingToLabel);
        };

        let entry = HistoryEntry {
            path: path.clone(),
            category: category.to_string(),
            index: self.current_index,
            hide_labeled: self.hide_labeled,
        };

        self.store
            .append(path.to_string_lossy().as_ref(), category)?;
        self.history.push(entry);
        info!("Labeled {:?} as {:?}", path, category);

        if !self.config.categories.iter().any(|c| c == category) {
            self.config.categories.push(category.to_string());
            self.persist_config();
        }

        if self.hide_labeled {
            self.remove_from_view_at(self.current_index);
            if self.view.is_empty() {
                info!("All images in the folder are labeled");
                return Ok(LabelOutcome::AllLabeled);
            }
        } else {
            self.next();
        }
        Ok(LabelOutcome::Labeled)
    }

    /// Reverse the most recent label action. Strictly LIFO, single-step, no
    /// redo.
    ///
    /// The view is recomputed and the index placed back on the restored image
    /// by path search. If the folder changed since and the path is gone from
    /// the view, the index silently falls back to 0; that stale-restoration
    /// behavior is intentional.
    pub fn undo(&mut self) -> io::Result<UndoOutcome> {
        let Some(entry) = self.history.pop() else {
            debug!("Undo requested with empty history");
            return Ok(UndoOutcome::NothingToUndo);
        };

        if let Err(e) = self
            .store
            .remove_and_rewrite(entry.path.to_string_lossy().as_ref())
        {
            self.history.push(entry);
            return Err(e);
        }

        self.apply_filter();
        if let Some(pos) = self.view.iter().position(|p| p == &entry.path) {
            self.current_index = pos;
        }
        info!("Undid label {:?} on {:?}", entry.category, entry.path);
        Ok(UndoOutcome::Restored {
            path: entry.path,
            category: entry.category,
        })
    }

    /// Move the current image into `<folder>/trash/`, never deleting it.
    ///
    /// A name collision in the trash folder fails the move and leaves the
    /// catalog and view untouched. The label store is deliberately not
    /// touched either; a trashed image's record is simply orphaned.
    pub fn move_to_trash(&mut self) -> TrashOutcome {
        let Some(path) = self.current().cloned() else {
            return TrashOutcome::NothingToTrash;
        };
        let Some(folder) = self.catalog.folder().map(Path::to_path_buf) else {
            return TrashOutcome::Failed("no active folder".to_string());
        };
        let Some(file_name) = path.file_name().map(ToOwned::to_owned) else {
            return TrashOutcome::Failed(format!("{:?} has no file name", path));
        };

        let trash_dir = folder.join("trash");
        if let Err(e) = fs::create_dir_all(&trash_dir) {
            return TrashOutcome::Failed(format!("could not create {:?}: {}", trash_dir, e));
        }

        let dest = trash_dir.join(&file_name);
        if dest.exists() {
            return TrashOutcome::Failed(format!(
                "{:?} already exists in trash",
                file_name
            ));
        }

        match file_ops::move_file(&path, &dest) {
            Ok(()) => {
                self.catalog.remove(&path);
                self.remove_from_view_at(self.current_index);
                info!("Trashed {:?}", path);
                TrashOutcome::Trashed(dest)
            }
            Err(e) => TrashOutcome::Failed(e.to_string()),
        }
    }

    /// Run an organize pass over every labeled file. After a move-mode pass
    /// the catalog is re-scanned since files vanished from the folder.
    pub fn organize(
        &mut self,
        dest_parent: &Path,
        mode: OrganizeMode,
    ) -> io::Result<OrganizeSummary> {
        let summary = organizer::organize(&self.store, self.catalog.folder(), dest_parent, mode)?;
        if mode == OrganizeMode::Move {
            self.catalog.refresh();
            self.apply_filter();
        }
        Ok(summary)
    }

    /// Take an entry out of the view, pulling the current index back by one
    /// for removals strictly before it, then clamping.
    fn remove_from_view_at(&mut self, index: usize) {
        self.view.remove(index);
        if index < self.current_index {
            self.current_index -= 1;
        }
        if self.current_index >= self.view.len() {
            self.current_index = self.view.len().saturating_sub(1);
        }
    }

    fn persist_config(&self) {
        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save_to(path) {
                warn!("Failed to save configuration: {}", e);
            }
        }
    }

    // Accessors for the presentation layer.

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &LabelStore {
        &self.store
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn view(&self) -> &[PathBuf] {
        &self.view
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn hide_labeled(&self) -> bool {
        self.hide_labeled
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// `(labeled, total)` over the whole catalog, for the progress display.
    pub fn progress(&self) -> (usize, usize) {
        let labeled = self
            .catalog
            .files()
            .iter()
            .filter(|p| self.store.contains(p.to_string_lossy().as_ref()))
            .count();
        (labeled, self.catalog.len())
    }
}
