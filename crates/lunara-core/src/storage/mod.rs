mod config;
mod journal_store;

pub use config::{Config, CycleConfig};
pub use journal_store::JournalStore;

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/lunara[-dev]/` based on LUNARA_ENV.
///
/// Set LUNARA_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("LUNARA_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("lunara-dev")
    } else {
        base_dir.join("lunara")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
