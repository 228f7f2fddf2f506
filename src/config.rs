//! Configuration file loading

use anyhow::Context;
use graphs_core::GraphKind;
use graphs_shell::OutputFormat;
use serde::Deserialize;
use std::path::Path;

/// Default config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "graphs.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub graph: GraphConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Build a directed graph instead of an undirected one.
    pub directed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print `info` and `edges` replies as JSON.
    pub json: bool,
}

impl Config {
    /// Load from an explicit path (which must exist), or from `graphs.toml`
    /// in `dir` when present, or fall back to defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = dir.join(CONFIG_FILE);
                if !default.exists() {
                    tracing::debug!("No {} found, using defaults", CONFIG_FILE);
                    return Ok(Config::default());
                }
                default
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read config {}", path.display()))?;
        let config: Config = toml::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn kind(&self) -> GraphKind {
        if self.graph.directed {
            GraphKind::Directed
        } else {
            GraphKind::Undirected
        }
    }

    pub fn format(&self) -> OutputFormat {
        if self.output.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_default_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(None, dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.kind(), GraphKind::Undirected);
        assert_eq!(config.format(), OutputFormat::Text);
    }

    #[test]
    fn test_default_file_is_picked_up() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[graph]\ndirected = true\n").unwrap();

        let config = Config::load(None, dir.path()).unwrap();
        assert_eq!(config.kind(), GraphKind::Directed);
        assert!(!config.output.json);
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(Some(&missing), dir.path()).is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[graph]\ndirected = \"maybe\"\n").unwrap();

        let err = Config::load(Some(&path), dir.path()).unwrap_err();
        assert!(err.to_string().starts_with("invalid config"));
    }
}
