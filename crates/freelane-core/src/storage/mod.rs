mod config;
pub mod progress;

pub use config::ProfileConfig;
pub use progress::ProgressDb;

use std::path::PathBuf;

/// Returns `~/.config/freelane[-dev]/` based on FREELANE_ENV.
///
/// Set FREELANE_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FREELANE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("freelane-dev")
    } else {
        base_dir.join("freelane")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
