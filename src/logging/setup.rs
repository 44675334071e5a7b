use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::formatter::BracketedFormatter;

/// Initialize tracing with a stdout layer and, when a `logs/` directory can
/// be created, a timestamped log file. Returns the log file path if one was
/// opened.
pub fn setup_logging() -> Option<PathBuf> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Our own modules at debug, noisy third-party crates quieter.
        EnvFilter::new("debug")
            .add_directive("winit=warn".parse().expect("static directive"))
            .add_directive("egui=warn".parse().expect("static directive"))
            .add_directive("eframe=warn".parse().expect("static directive"))
            .add_directive("wgpu_core=warn".parse().expect("static directive"))
            .add_directive("wgpu_hal=warn".parse().expect("static directive"))
    });

    let stdout_layer = fmt::layer()
        .event_format(BracketedFormatter)
        .with_writer(std::io::stdout);

    let (log_path, file_layer) = match open_log_file() {
        Some((path, file)) => {
            let layer = fmt::layer()
                .event_format(BracketedFormatter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false);
            (Some(path), Some(layer))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    match log_path {
        Some(path) => {
            info!("Log file created at: {:?}", path);
            Some(path)
        }
        None => {
            warn!("Could not create log file, logging to stdout only");
            None
        }
    }
}

fn open_log_file() -> Option<(PathBuf, fs::File)> {
    let log_dir = std::env::current_dir().ok()?.join("logs");
    fs::create_dir_all(&log_dir).ok()?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("image_labeler_{}.log", timestamp));

    let file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)
        .ok()?;

    Some((log_path, file))
}
