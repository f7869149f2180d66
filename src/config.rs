//! Configuration structures for the network and its training run
//!
//! A configuration file has two sections: `network` fixes the tensor shapes
//! and initial weight scale, `training` holds the SGD hyperparameters.
//! Missing training fields fall back to their defaults.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{NetError, Result};

/// Full configuration as stored in a JSON file.
///
/// # Example
///
/// ```json
/// {
///   "network": { "input_size": 2, "hidden_size": 16, "output_size": 3, "std": 0.01 },
///   "training": { "learning_rate": 0.5, "num_iters": 600, "batch_size": 32 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelConfig {
    pub network: NetworkConfig,

    #[serde(default)]
    pub training: TrainingConfig,
}

/// Network shape and initial weight scale.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NetworkConfig {
    /// Dimension D of each input example
    pub input_size: usize,

    /// Number of hidden units H
    pub hidden_size: usize,

    /// Number of classes C
    pub output_size: usize,

    /// Scale of the Gaussian weight initialization
    #[serde(default = "default_std")]
    pub std: f64,
}

/// Hyperparameters for [`Trainer`](crate::trainer::Trainer).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Step size for gradient updates
    pub learning_rate: f64,

    /// Multiplicative decay applied to the learning rate once per epoch
    pub learning_rate_decay: f64,

    /// L2 regularization strength
    pub reg: f64,

    /// Total number of SGD steps
    pub num_iters: usize,

    /// Examples sampled (with replacement) per step
    pub batch_size: usize,

    /// Log progress at INFO level
    pub verbose: bool,

    /// Iterations between verbose progress lines
    pub progress_interval: usize,
}

fn default_std() -> f64 {
    1e-4
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: 1e-3,
            learning_rate_decay: 0.95,
            reg: 5e-6,
            num_iters: 100,
            batch_size: 200,
            verbose: false,
            progress_interval: 100,
        }
    }
}

/// Loads a configuration from a JSON file.
///
/// Reads the file at `path`, deserializes it into a `ModelConfig` and
/// validates every value.
///
/// # Returns
///
/// `Ok(ModelConfig)` on success, or an error if the file cannot be read, the
/// JSON is invalid, or a value is out of range.
///
/// # Examples
///
/// ```no_run
/// use two_layer_net::config::load_config;
///
/// let cfg = load_config("config/two_layer_net.json").unwrap();
/// assert_eq!(cfg.network.input_size, 2);
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ModelConfig> {
    let contents = fs::read_to_string(path)?;
    let config: ModelConfig = serde_json::from_str(&contents)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates both sections of a configuration.
pub fn validate_config(config: &ModelConfig) -> Result<()> {
    validate_network_config(&config.network)?;
    validate_training_config(&config.training)
}

pub fn validate_network_config(config: &NetworkConfig) -> Result<()> {
    for (name, size) in [
        ("input_size", config.input_size),
        ("hidden_size", config.hidden_size),
        ("output_size", config.output_size),
    ] {
        if size == 0 {
            return Err(invalid(format!("{} must be positive", name)));
        }
    }

    if !config.std.is_finite() || config.std < 0.0 {
        return Err(invalid("std must be finite and non-negative"));
    }

    Ok(())
}

pub fn validate_training_config(config: &TrainingConfig) -> Result<()> {
    if !config.learning_rate.is_finite() || config.learning_rate < 0.0 {
        return Err(invalid("learning_rate must be finite and non-negative"));
    }

    if !config.learning_rate_decay.is_finite() || config.learning_rate_decay <= 0.0 {
        return Err(invalid("learning_rate_decay must be finite and positive"));
    }

    if !config.reg.is_finite() || config.reg < 0.0 {
        return Err(invalid("reg must be finite and non-negative"));
    }

    if config.batch_size == 0 {
        return Err(invalid("batch_size must be positive"));
    }

    if config.progress_interval == 0 {
        return Err(invalid("progress_interval must be positive"));
    }

    Ok(())
}

fn invalid(message: impl Into<String>) -> NetError {
    NetError::InvalidConfig(message.into())
}
