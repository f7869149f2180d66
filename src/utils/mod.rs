//! Shared utilities for the two-layer network
//!
//! This module provides batch sampling helpers, activation functions,
//! learning rate decay and logging setup used by the network and trainer.

pub mod activations;
pub mod logging;
pub mod lr_scheduler;
pub mod rng;

pub use activations::{argmax_rows, relu, relu_backward_inplace, softmax_rows};
pub use lr_scheduler::{ExponentialDecay, LRScheduler};
pub use rng::{sample_batch_indices, seeded_rng};
