use std::fs;
use std::path::Path;
use tracing::{debug, error};

pub type FileOpResult<T> = Result<T, FileOpError>;

/// Error types for single-file move/copy operations.
#[derive(Debug)]
pub enum FileOpError {
    CopyFailed(String),
    RemoveFailed(String),
    Io(std::io::Error),
}

impl std::fmt::Display for FileOpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOpError::CopyFailed(msg) => write!(f, "copy failed: {}", msg),
            FileOpError::RemoveFailed(msg) => write!(f, "remove failed: {}", msg),
            FileOpError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for FileOpError {}

impl From<std::io::Error> for FileOpError {
    fn from(error: std::io::Error) -> Self {
        FileOpError::Io(error)
    }
}

/// Copy `src` to `dest`, reporting a typed error on failure.
pub fn copy_file(src: &Path, dest: &Path) -> FileOpResult<()> {
    if let Err(e) = fs::copy(src, dest) {
        error!("Failed to copy {:?} to {:?}: {}", src, dest, e);
        return Err(FileOpError::CopyFailed(format!(
            "{:?} -> {:?}: {}",
            src, dest, e
        )));
    }
    debug!("Copied {:?} to {:?}", src, dest);
    Ok(())
}

/// Move `src` to `dest` via copy + remove, which also works across drives.
///
/// If the remove fails the copied destination is cleaned up, so the caller
/// observes either a completed move or an untouched source, nothing partial.
pub fn move_file(src: &Path, dest: &Path) -> FileOpResult<()> {
    copy_file(src, dest)?;

    if let Err(e) = fs::remove_file(src) {
        error!("Failed to remove {:?} after copy: {}", src, e);
        let _ = fs::remove_file(dest);
        return Err(FileOpError::RemoveFailed(format!("{:?}: {}", src, e)));
    }

    debug!("Moved {:?} to {:?}", src, dest);
    Ok(())
}
