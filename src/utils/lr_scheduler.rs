//! Learning rate scheduler trait and per-epoch exponential decay
//!
//! The trainer steps its scheduler once at every epoch boundary and hands
//! the new rate to the optimizer.

/// Core trait for learning rate schedulers.
///
/// Schedulers adjust the learning rate during training based on the number
/// of epochs completed so far.
///
/// # Example
///
/// ```ignore
/// let mut scheduler = ExponentialDecay::new(1e-3, 0.95);
///
/// for epoch in 0..num_epochs {
///     let lr = scheduler.get_lr();
///     // ... train with current learning rate ...
///     scheduler.step();
/// }
///
/// scheduler.reset();
/// ```
pub trait LRScheduler {
    /// Get the current learning rate.
    fn get_lr(&self) -> f64;

    /// Advance the scheduler by one epoch.
    fn step(&mut self);

    /// Reset to the initial learning rate and epoch 0.
    fn reset(&mut self);
}

/// Exponential decay learning rate scheduler.
///
/// Multiplies the learning rate by `gamma` once per epoch.
///
/// Formula: lr = initial_lr * gamma^epoch
///
/// # Fields
///
/// * `initial_lr` - Starting learning rate
/// * `gamma` - Multiplicative decay factor applied each epoch (typically 0.9 to 0.99)
/// * `current_epoch` - Number of epochs stepped so far
/// * `current_lr` - Current learning rate value
///
/// # Example
///
/// ```
/// use two_layer_net::utils::lr_scheduler::{LRScheduler, ExponentialDecay};
///
/// let mut scheduler = ExponentialDecay::new(0.1, 0.95);
/// assert_eq!(scheduler.get_lr(), 0.1);
///
/// scheduler.step();
/// assert!((scheduler.get_lr() - 0.095).abs() < 1e-12); // 0.1 * 0.95
/// ```
#[derive(Debug, Clone)]
pub struct ExponentialDecay {
    initial_lr: f64,
    gamma: f64,
    current_epoch: usize,
    current_lr: f64,
}

impl ExponentialDecay {
    /// Creates a new exponential decay scheduler.
    ///
    /// # Arguments
    ///
    /// * `initial_lr` - Starting learning rate
    /// * `gamma` - Decay factor applied each epoch (1.0 keeps the rate constant)
    pub fn new(initial_lr: f64, gamma: f64) -> Self {
        Self {
            initial_lr,
            gamma,
            current_epoch: 0,
            current_lr: initial_lr,
        }
    }

    /// Number of epochs stepped since creation or the last reset.
    pub fn current_epoch(&self) -> usize {
        self.current_epoch
    }
}

impl LRScheduler for ExponentialDecay {
    fn get_lr(&self) -> f64 {
        self.current_lr
    }

    fn step(&mut self) {
        self.current_epoch += 1;
        // Exponents past i32::MAX saturate.
        let exponent = i32::try_from(self.current_epoch).unwrap_or(i32::MAX);
        self.current_lr = self.initial_lr * self.gamma.powi(exponent);
    }

    fn reset(&mut self) {
        self.current_epoch = 0;
        self.current_lr = self.initial_lr;
    }
}
