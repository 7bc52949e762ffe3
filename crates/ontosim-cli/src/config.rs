//! Simulation settings: defaults, optionally overridden by a JSON file, then
//! by command-line flags.
//!
//! ```json
//! { "namespace": "urn:crawlercrane-ontology#", "samples": 120, "seed": 7 }
//! ```

use anyhow::{Context, Result};
use ontosim_graph::vocab::DEFAULT_NAMESPACE;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_TIME: &str = "2025-01-01 00:00:00";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// IRI prefix for component individuals (written and read back).
    pub namespace: String,
    /// Ticks per sensor; ticks are one minute apart.
    pub samples: usize,
    /// First timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub base_time: String,
    /// Seed for reproducible readings; unseeded runs differ every time.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            samples: 60,
            base_time: DEFAULT_BASE_TIME.to_string(),
            seed: None,
        }
    }
}

/// Flag values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub namespace: Option<String>,
    pub samples: Option<usize>,
    pub base_time: Option<String>,
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(namespace) = overrides.namespace {
            self.namespace = namespace;
        }
        if let Some(samples) = overrides.samples {
            self.samples = samples;
        }
        if let Some(base_time) = overrides.base_time {
            self.base_time = base_time;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }
}
