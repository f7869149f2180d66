//! Optimizer abstraction for parameter updates
//!
//! Optimizers define how gradients from
//! [`TwoLayerNet::evaluate`](crate::network::TwoLayerNet::evaluate) are
//! applied to the network's [`Params`]. The only update rule provided is
//! plain gradient descent: `param = param - learning_rate * gradient`.
//!
//! # Example
//!
//! ```ignore
//! use two_layer_net::optimizers::{Optimizer, SGD};
//!
//! let mut optimizer = SGD::new(1e-3);
//! let (loss, grads) = net.evaluate(x.view(), &labels, reg)?;
//! optimizer.update(net.params_mut(), &grads);
//! ```

pub mod sgd;

pub use sgd::SGD;

use crate::network::{Gradients, Params};

/// Core trait for optimizers.
///
/// The learning rate is owned by the optimizer so that a scheduler can
/// lower it between epochs through `set_learning_rate`.
pub trait Optimizer {
    /// Update every parameter tensor in place from its gradient.
    ///
    /// # Panics
    ///
    /// Implementations may panic if a gradient's shape differs from its
    /// parameter's shape.
    fn update(&mut self, params: &mut Params, grads: &Gradients);

    /// Reset optimizer state. A no-op for stateless optimizers.
    fn reset(&mut self);

    /// Get the learning rate for this optimizer.
    fn learning_rate(&self) -> f64;

    /// Set the learning rate for this optimizer.
    fn set_learning_rate(&mut self, lr: f64);
}
