//! YAML loading shared by definitions, slot sets and legacy options.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{Result, StyleError};

pub(crate) fn parse_yaml<T: DeserializeOwned>(yaml: &str, path: Option<&Path>) -> Result<T> {
    serde_yaml::from_str(yaml).map_err(|e| StyleError::Parse {
        path: path.map(Path::to_path_buf),
        message: e.to_string(),
    })
}

pub(crate) fn read_source(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| StyleError::Load {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;
    tracing::debug!(path = %path.display(), "loading style definition");
    Ok(content)
}

pub(crate) fn read_yaml_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_source(path)?;
    parse_yaml(&content, Some(path))
}
