//! Loading city generator configs from RON, TOML, or JSON files.

pub mod loader;

pub use loader::{ConfigLoadError, Format, find_config_file, load_config, load_config_from_dir};
