use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ClassifierError, Result};

/// Settings for one training run.
///
/// Missing JSON fields fall back to the defaults: `init_step = 1.0`,
/// `stop_tol = 1e-4`, `stop_iter = 5000`, `plot = false`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub init_step: f64,
    pub stop_tol: f64,
    pub stop_iter: usize,
    /// Read by callers that render the boundary and loss curves; training ignores it.
    pub plot: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            init_step: 1.0,
            stop_tol: 1e-4,
            stop_iter: 5000,
            plot: false,
        }
    }
}

impl TrainConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: TrainConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
            .map_err(|e| ClassifierError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.init_step.is_finite() || self.init_step <= 0.0 {
            return Err(ClassifierError::InvalidParameter {
                name: "init_step",
                value: self.init_step,
                reason: "must be positive and finite",
            });
        }
        if self.stop_tol.is_nan() || self.stop_tol < 0.0 {
            return Err(ClassifierError::InvalidParameter {
                name: "stop_tol",
                value: self.stop_tol,
                reason: "must be non-negative",
            });
        }
        Ok(())
    }
}
