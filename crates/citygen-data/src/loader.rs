//! Config file loading: format detection, discovery, and deserialization.
//!
//! A city config can be written as RON, TOML, or JSON; the format is picked
//! from the file extension. Fields left out fall back to their defaults, and
//! the result is validated before it is handed back.

use citygen_core::config::CityConfig;
use citygen_core::error::ConfigError;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur while loading a city config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    /// No config file with the given base name exists in the directory.
    #[error("config '{base_name}' not found in {dir}")]
    MissingFile { base_name: String, dir: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two files with the same base name but different formats exist.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// The file parsed but describes an unusable config.
    #[error("invalid config: {0}")]
    Invalid(#[from] ConfigError),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported config file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

const EXTENSIONS: [(&str, Format); 3] = [
    ("ron", Format::Ron),
    ("toml", Format::Toml),
    ("json", Format::Json),
];

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, ConfigLoadError> {
    let ext = path.extension().and_then(|e| e.to_str());
    EXTENSIONS
        .iter()
        .find(|(candidate, _)| Some(*candidate) == ext)
        .map(|&(_, format)| format)
        .ok_or_else(|| ConfigLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        })
}

// ===========================================================================
// File discovery
// ===========================================================================

/// Scan a directory for a config file with the given base name.
///
/// Looks for `{base_name}.ron`, `{base_name}.toml`, and `{base_name}.json`.
/// Returns `Ok(None)` if none exists, or `Err(ConflictingFormats)` if more
/// than one does.
pub fn find_config_file(
    dir: &Path,
    base_name: &str,
) -> Result<Option<PathBuf>, ConfigLoadError> {
    let mut found: Option<PathBuf> = None;

    for (ext, _) in EXTENSIONS {
        let candidate = dir.join(format!("{base_name}.{ext}"));
        if candidate.exists() {
            if let Some(existing) = found {
                return Err(ConfigLoadError::ConflictingFormats {
                    a: existing,
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }

    Ok(found)
}

// ===========================================================================
// Deserialization
// ===========================================================================

/// Deserialize `content` in the given format. `file` is only used for
/// error messages.
pub fn deserialize_str<T: DeserializeOwned>(
    content: &str,
    format: Format,
    file: &Path,
) -> Result<T, ConfigLoadError> {
    let parse_error = |detail: String| ConfigLoadError::Parse {
        file: file.to_path_buf(),
        detail,
    };
    match format {
        Format::Ron => ron::from_str(content).map_err(|e| parse_error(e.to_string())),
        Format::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
        Format::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
    }
}

/// Read a file and deserialize it according to its extension.
pub fn deserialize_file<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    deserialize_str(&content, format, path)
}

// ===========================================================================
// Loading
// ===========================================================================

/// Load and validate a city config from a file.
pub fn load_config(path: &Path) -> Result<CityConfig, ConfigLoadError> {
    let config: CityConfig = deserialize_file(path)?;
    config.validate()?;
    log::debug!("loaded city config from {}", path.display());
    Ok(config)
}

/// Find `{base_name}.{ron,toml,json}` in `dir`, then load it.
pub fn load_config_from_dir(dir: &Path, base_name: &str) -> Result<CityConfig, ConfigLoadError> {
    let path =
        find_config_file(dir, base_name)?.ok_or_else(|| ConfigLoadError::MissingFile {
            base_name: base_name.to_string(),
            dir: dir.to_path_buf(),
        })?;
    load_config(&path)
}
