//! Tests for the learning rate scheduler
//!
//! This file tests ExponentialDecay, the per-epoch multiplicative decay
//! driven by the trainer at each epoch boundary.

use approx::assert_relative_eq;
use two_layer_net::utils::lr_scheduler::{ExponentialDecay, LRScheduler};

// ============================================================================
// ExponentialDecay Tests
// ============================================================================

#[cfg(test)]
mod exponential_decay_tests {
    use super::*;

    #[test]
    fn test_exponential_decay_creation() {
        let scheduler = ExponentialDecay::new(1e-3, 0.95);
        assert_eq!(scheduler.get_lr(), 1e-3);
    }

    #[test]
    fn test_exponential_decay_first_step() {
        let mut scheduler = ExponentialDecay::new(0.1, 0.95);
        scheduler.step();
        assert_relative_eq!(scheduler.get_lr(), 0.095, epsilon = 1e-12);
    }

    #[test]
    fn test_exponential_decay_matches_repeated_multiplication() {
        let mut scheduler = ExponentialDecay::new(0.5, 0.9);
        let mut expected = 0.5;

        for _ in 0..20 {
            scheduler.step();
            expected *= 0.9;
            assert_relative_eq!(scheduler.get_lr(), expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_exponential_decay_monotonic() {
        let mut scheduler = ExponentialDecay::new(1.0, 0.8);
        let mut previous = scheduler.get_lr();

        for _ in 0..10 {
            scheduler.step();
            assert!(scheduler.get_lr() < previous);
            previous = scheduler.get_lr();
        }
    }

    #[test]
    fn test_exponential_decay_reset() {
        let mut scheduler = ExponentialDecay::new(0.2, 0.5);
        for _ in 0..3 {
            scheduler.step();
        }
        assert_relative_eq!(scheduler.get_lr(), 0.025, epsilon = 1e-15);

        scheduler.reset();
        assert_eq!(scheduler.get_lr(), 0.2);
        assert_eq!(scheduler.current_epoch(), 0);
    }

    #[test]
    fn test_decay_above_one_grows_rate() {
        let mut scheduler = ExponentialDecay::new(0.1, 1.1);
        scheduler.step();
        assert_relative_eq!(scheduler.get_lr(), 0.11, epsilon = 1e-12);
    }
}
