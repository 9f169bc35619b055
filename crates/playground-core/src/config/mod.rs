//! Endpoint file loading.

pub mod error;
pub mod loader;

pub use error::ConfigError;
pub use loader::{get_file_type, load_dir, load_file, parse_endpoints, ConfigFileType};
