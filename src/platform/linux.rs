// Platform paths for Linux
// Config: ~/.config/search-history
// Data:   ~/.local/share/search-history

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "search-history";

/// Resolves an XDG base directory: `$XDG_*` if set and non-empty, else `$HOME/<fallback>`.
fn xdg_dir(xdg: Option<String>, home: Option<String>, fallback: &[&str]) -> PathBuf {
    match xdg.filter(|v| !v.is_empty()) {
        Some(base) => PathBuf::from(base).join(APP_DIR),
        None => {
            let mut path = PathBuf::from(home.unwrap_or_else(|| String::from("/tmp")));
            for part in fallback {
                path.push(part);
            }
            path.join(APP_DIR)
        }
    }
}

/// Returns the configuration directory on Linux.
/// Uses `$XDG_CONFIG_HOME/search-history` if set, otherwise `~/.config/search-history`.
pub fn get_config_dir() -> PathBuf {
    xdg_dir(env::var("XDG_CONFIG_HOME").ok(), env::var("HOME").ok(), &[".config"])
}

/// Returns the data directory on Linux.
/// Uses `$XDG_DATA_HOME/search-history` if set, otherwise `~/.local/share/search-history`.
pub fn get_data_dir() -> PathBuf {
    xdg_dir(
        env::var("XDG_DATA_HOME").ok(),
        env::var("HOME").ok(),
        &[".local", "share"],
    )
}
