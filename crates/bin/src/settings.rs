//! Default locations and model lookup.
//!
//! Uses platform-specific directories:
//! - Linux: `~/.config/intrinsic/` and `~/.local/share/intrinsic/`
//! - macOS: `~/Library/Application Support/intrinsic/`
//! - Windows: `%APPDATA%\intrinsic\`

use intrinsic_valuation::{Result, ValuationModel};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory holding `model.toml`.
pub(crate) fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("intrinsic")
}

/// Default model file path.
pub(crate) fn default_model_path() -> PathBuf {
    default_config_dir().join("model.toml")
}

/// Snapshot root used when `--data-dir` is not given.
pub(crate) fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("intrinsic")
}

/// Resolve the model: an explicit path, then the default file, then defaults.
pub(crate) fn load_model(explicit: Option<&Path>) -> Result<ValuationModel> {
    resolve_model(explicit, &default_model_path())
}

fn resolve_model(explicit: Option<&Path>, fallback: &Path) -> Result<ValuationModel> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading model");
        return ValuationModel::from_path(path);
    }
    if fallback.is_file() {
        debug!(path = %fallback.display(), "loading model");
        return ValuationModel::from_path(fallback);
    }
    debug!("using default model");
    Ok(ValuationModel::default())
}
