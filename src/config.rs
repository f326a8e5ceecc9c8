//! Solver configuration, loadable from a JSON file.
//!
//! Every field is optional; an empty object `{}` yields the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::scenario::{ParseOptions, UnknownCellPolicy, DEFAULT_OBSTACLE};
use crate::search::ResourceLimits;

fn default_obstacle_sigils() -> Vec<char> {
    vec![DEFAULT_OBSTACLE]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default = "default_obstacle_sigils")]
    pub obstacle_sigils: Vec<char>,
    #[serde(default)]
    pub unknown_cells: UnknownCellPolicy,
    #[serde(default)]
    pub limits: ResourceLimits,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            obstacle_sigils: default_obstacle_sigils(),
            unknown_cells: UnknownCellPolicy::default(),
            limits: ResourceLimits::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SolverConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: SolverConfig =
            serde_json::from_slice(&bytes).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), ?cfg, "loaded solver config");
        Ok(cfg)
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            obstacle_sigils: self.obstacle_sigils.clone(),
            unknown_cells: self.unknown_cells,
        }
    }
}
