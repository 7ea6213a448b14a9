//! Standard directories for Brochure files

use std::path::PathBuf;

/// Base data directory (~/.local/share/brochure or platform equivalent)
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("brochure")
}

/// Directory for log files
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}
