//! Reads gateway configuration files from disk.

use std::path::Path;
use std::time::Instant;

use gwaudit_core::errors::LoadError;
use gwaudit_core::tracing::metrics::LOAD_TIME_MS;

use super::raw::ServiceConfig;

/// Loads a gateway file, choosing the decoder from the extension:
/// `.json`, `.yaml` / `.yml`, or `.toml`.
pub fn load_service_config(path: &Path) -> Result<ServiceConfig, LoadError> {
    let path_str = path.display().to_string();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let format = match extension.as_deref() {
        Some("json") => "JSON",
        Some("yaml") | Some("yml") => "YAML",
        Some("toml") => "TOML",
        _ => return Err(LoadError::UnsupportedFormat { path: path_str }),
    };

    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    let start = Instant::now();
    let decoded = match format {
        "JSON" => ServiceConfig::from_json_str(&content).map_err(|e| e.to_string()),
        "YAML" => ServiceConfig::from_yaml_str(&content).map_err(|e| e.to_string()),
        _ => ServiceConfig::from_toml_str(&content).map_err(|e| e.to_string()),
    };
    let config = decoded.map_err(|message| LoadError::Decode {
        path: path_str.clone(),
        format,
        message,
    })?;

    tracing::debug!(
        path = %path_str,
        format,
        endpoints = config.endpoints.len(),
        { LOAD_TIME_MS } = start.elapsed().as_millis() as u64,
        "gateway config loaded"
    );
    Ok(config)
}
