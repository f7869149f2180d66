//! Stochastic Gradient Descent (SGD) optimizer implementation
//!
//! This module provides a vanilla SGD optimizer that performs the basic
//! gradient descent update: `parameter = parameter - learning_rate * gradient`

use crate::network::{Gradients, Params};
use crate::optimizers::Optimizer;

/// Stochastic Gradient Descent optimizer.
///
/// Implements the basic gradient descent update rule without momentum:
///
/// `w = w - η * ∇L/∂w`
///
/// where w is any of the four parameter tensors, η (eta) is the learning
/// rate, and ∇L/∂w is the matching gradient tensor.
///
/// # Example
///
/// ```ignore
/// use two_layer_net::optimizers::{Optimizer, SGD};
///
/// let mut optimizer = SGD::new(0.01);
/// let (_, grads) = net.evaluate(x.view(), &labels, 0.0)?;
/// optimizer.update(net.params_mut(), &grads);
/// ```
#[derive(Debug, Clone)]
pub struct SGD {
    learning_rate: f64,
}

impl SGD {
    /// Creates a new SGD optimizer with the specified learning rate.
    ///
    /// # Examples
    ///
    /// ```
    /// use two_layer_net::optimizers::{Optimizer, SGD};
    ///
    /// let optimizer = SGD::new(0.01);
    /// assert_eq!(optimizer.learning_rate(), 0.01);
    /// ```
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for SGD {
    /// Applies `parameter -= learning_rate * gradient` to `w1`, `b1`, `w2`, `b2`.
    ///
    /// # Panics
    ///
    /// Panics if any gradient's shape differs from its parameter's shape.
    fn update(&mut self, params: &mut Params, grads: &Gradients) {
        assert!(
            params.shapes_match(grads),
            "Parameters and gradients must have the same shape"
        );

        let step = -self.learning_rate;
        params.w1.scaled_add(step, &grads.w1);
        params.b1.scaled_add(step, &grads.b1);
        params.w2.scaled_add(step, &grads.w2);
        params.b2.scaled_add(step, &grads.b2);
    }

    fn reset(&mut self) {
        // Vanilla SGD has no state to reset
    }

    fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, lr: f64) {
        self.learning_rate = lr;
    }
}
