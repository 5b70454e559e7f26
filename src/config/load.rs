use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use crate::error::TrellisError;

/// A parsed layout or animation file together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig<T> {
    /// The parsed configuration
    pub config: T,
    /// Path the config was read from
    pub path: PathBuf,
}

impl<T: DeserializeOwned> LoadedConfig<T> {
    /// Load a JSON config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let config: T = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        Ok(Self {
            config,
            path: path.to_path_buf(),
        })
    }
}

impl<T> LoadedConfig<T> {
    /// File name without extension, used when the config carries no name.
    pub fn file_stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "layout".to_string())
    }
}

/// Expand input arguments into config file paths.
///
/// Glob patterns are expanded (a pattern matching nothing contributes no
/// files); plain paths must exist.
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut results = Vec::new();

    for pattern in patterns {
        if is_glob_pattern(pattern) {
            let paths = glob::glob(pattern)
                .with_context(|| format!("invalid glob pattern: {}", pattern))?;

            for entry in paths {
                let path =
                    entry.with_context(|| format!("failed to read glob entry: {}", pattern))?;
                if path.is_file() {
                    results.push(path);
                }
            }
        } else {
            let path = PathBuf::from(pattern);
            if !path.exists() {
                return Err(TrellisError::InputNotFound(path).into());
            }
            results.push(path);
        }
    }

    if results.is_empty() {
        return Err(TrellisError::NoLayouts.into());
    }

    Ok(results)
}

/// Check if a pattern contains glob characters.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}
