//! Parameter store for the two-layer network
//!
//! Holds the four learnable tensors as named fields so that every network
//! always carries both layers' weights and biases:
//!
//! * `w1` - first-layer weights (input_size × hidden_size)
//! * `b1` - first-layer biases (hidden_size)
//! * `w2` - second-layer weights (hidden_size × output_size)
//! * `b2` - second-layer biases (output_size)

use ndarray::{Array1, Array2, ArrayViewD, ArrayViewMutD};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::{NetError, Result};

/// Learnable parameters of a two-layer network.
///
/// Shapes are fixed at construction. Only the values change, once per
/// training step, through an [`Optimizer`](crate::optimizers::Optimizer).
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub w1: Array2<f64>,
    pub b1: Array1<f64>,
    pub w2: Array2<f64>,
    pub b2: Array1<f64>,
}

/// Gradient of the loss with respect to each entry of [`Params`].
///
/// Produced fresh by every loss evaluation; each field has exactly the
/// shape of its counterpart in `Params`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub w1: Array2<f64>,
    pub b1: Array1<f64>,
    pub w2: Array2<f64>,
    pub b2: Array1<f64>,
}

impl Params {
    /// Create parameters with small Gaussian weights and zero biases.
    ///
    /// Each weight is drawn as `std * N(0, 1)` from the caller's generator,
    /// `w1` first and then `w2`, so a fixed seed reproduces the same network.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::InvalidDimension`] if any size is zero, and
    /// [`NetError::InvalidConfig`] if `std` is negative or not finite.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut rng = seeded_rng(42);
    /// let params = Params::new(4, 10, 3, 1e-4, &mut rng)?;
    /// assert_eq!(params.w1.dim(), (4, 10));
    /// ```
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        std: f64,
        rng: &mut R,
    ) -> Result<Self> {
        for (name, size) in [
            ("input_size", input_size),
            ("hidden_size", hidden_size),
            ("output_size", output_size),
        ] {
            if size == 0 {
                return Err(NetError::InvalidDimension(format!(
                    "{} must be positive",
                    name
                )));
            }
        }

        if !std.is_finite() || std < 0.0 {
            return Err(NetError::InvalidConfig(format!(
                "std must be finite and non-negative, got {}",
                std
            )));
        }

        let mut gaussian = |_: (usize, usize)| {
            let sample: f64 = StandardNormal.sample(&mut *rng);
            std * sample
        };
        let w1 = Array2::from_shape_fn((input_size, hidden_size), &mut gaussian);
        let w2 = Array2::from_shape_fn((hidden_size, output_size), &mut gaussian);

        Ok(Self {
            w1,
            b1: Array1::zeros(hidden_size),
            w2,
            b2: Array1::zeros(output_size),
        })
    }

    pub fn input_size(&self) -> usize {
        self.w1.nrows()
    }

    pub fn hidden_size(&self) -> usize {
        self.w1.ncols()
    }

    pub fn output_size(&self) -> usize {
        self.w2.ncols()
    }

    /// Total number of weights and biases.
    pub fn parameter_count(&self) -> usize {
        self.w1.len() + self.b1.len() + self.w2.len() + self.b2.len()
    }

    /// Squared L2 norm of both weight matrices (biases are not regularized).
    pub fn weight_norm_squared(&self) -> f64 {
        self.w1.iter().map(|w| w * w).sum::<f64>() + self.w2.iter().map(|w| w * w).sum::<f64>()
    }

    /// Whether every gradient tensor has the shape of its parameter.
    pub fn shapes_match(&self, grads: &Gradients) -> bool {
        self.w1.dim() == grads.w1.dim()
            && self.b1.dim() == grads.b1.dim()
            && self.w2.dim() == grads.w2.dim()
            && self.b2.dim() == grads.b2.dim()
    }

    /// Named read-only views over the four tensors, in `w1, b1, w2, b2` order.
    pub fn views(&self) -> [(&'static str, ArrayViewD<'_, f64>); 4] {
        [
            ("w1", self.w1.view().into_dyn()),
            ("b1", self.b1.view().into_dyn()),
            ("w2", self.w2.view().into_dyn()),
            ("b2", self.b2.view().into_dyn()),
        ]
    }

    /// Named mutable views over the four tensors, in `w1, b1, w2, b2` order.
    pub fn views_mut(&mut self) -> [(&'static str, ArrayViewMutD<'_, f64>); 4] {
        [
            ("w1", self.w1.view_mut().into_dyn()),
            ("b1", self.b1.view_mut().into_dyn()),
            ("w2", self.w2.view_mut().into_dyn()),
            ("b2", self.b2.view_mut().into_dyn()),
        ]
    }
}

impl Gradients {
    /// Named read-only views, in the same order as [`Params::views`].
    pub fn views(&self) -> [(&'static str, ArrayViewD<'_, f64>); 4] {
        [
            ("w1", self.w1.view().into_dyn()),
            ("b1", self.b1.view().into_dyn()),
            ("w2", self.w2.view().into_dyn()),
            ("b2", self.b2.view().into_dyn()),
        ]
    }
}
