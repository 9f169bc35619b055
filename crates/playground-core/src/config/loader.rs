//! Endpoint file parsing and loading (YAML/JSON).

use crate::config::error::ConfigError;
use crate::registry::validate_endpoint;
use crate::types::EndpointDef;
use std::path::{Path, PathBuf};

/// Endpoint file type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileType {
    Yaml,
    Json,
    Unknown,
}

/// Get endpoint file type from path extension
pub fn get_file_type(path: &str) -> ConfigFileType {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yaml" | "yml" => ConfigFileType::Yaml,
        "json" => ConfigFileType::Json,
        _ => ConfigFileType::Unknown,
    }
}

/// Parse an ordered endpoint sequence from file content.
///
/// The format is chosen by the path extension. Every definition is
/// validated with the same rules the registry applies; the first
/// invalid one fails the whole parse.
pub fn parse_endpoints(content: &str, path: &str) -> Result<Vec<EndpointDef>, ConfigError> {
    let defs: Vec<EndpointDef> = match get_file_type(path) {
        ConfigFileType::Yaml => serde_yaml::from_str(content)?,
        ConfigFileType::Json => serde_json::from_str(content)?,
        ConfigFileType::Unknown => return Err(ConfigError::UnknownFileType(path.to_string())),
    };
    for def in &defs {
        validate_endpoint(def)?;
    }
    Ok(defs)
}

/// Load endpoint definitions from a single file.
pub async fn load_file(path: impl AsRef<Path>) -> Result<Vec<EndpointDef>, ConfigError> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_endpoints(&content, &path.to_string_lossy())
}

/// Load endpoint definitions from all files matching a glob pattern.
///
/// Matched paths are sorted before loading, so the combined sequence
/// has a stable order regardless of filesystem iteration order.
pub async fn load_dir(pattern: &str) -> Result<Vec<EndpointDef>, ConfigError> {
    let mut paths: Vec<PathBuf> = glob::glob(pattern)?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    let mut defs = Vec::new();
    for path in paths {
        defs.extend(load_file(&path).await?);
    }
    Ok(defs)
}
