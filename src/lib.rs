//! Two-Layer Network Library
//!
//! A minimal feed-forward classifier: two fully-connected layers with a ReLU
//! in between and a softmax cross-entropy loss, trained by mini-batch SGD.
//!
//! # Modules
//!
//! - `network`: parameter store, forward pass, loss/gradient computation, prediction
//! - `trainer`: SGD training loop and training history
//! - `optimizers`: Optimizer trait and the SGD update rule
//! - `utils`: activations, learning rate decay, batch sampling, logging setup
//! - `config`: JSON configuration for the network and training run
//! - `error`: error taxonomy shared by every module

pub mod config;
pub mod error;
pub mod network;
pub mod optimizers;
pub mod trainer;
pub mod utils;

pub use error::{NetError, Result};
pub use network::{Gradients, Params, TwoLayerNet};
pub use trainer::{Trainer, TrainingHistory};
