//! Config file location for murmur-cli.

use std::path::{Path, PathBuf};

/// Resolve the config file path.
/// An explicit `--config` wins, then `MURMUR_CONFIG`, then `./murmur.toml`.
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = std::env::var_os("MURMUR_CONFIG") {
        return PathBuf::from(path);
    }
    PathBuf::from("murmur.toml")
}
