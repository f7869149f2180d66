//! Two-layer fully-connected classifier
//!
//! The network computes `scores = relu(X·W1 + b1)·W2 + b2` and is trained
//! with a softmax cross-entropy loss plus L2 weight regularization:
//!
//! ```text
//! Input -> FC(W1, b1) -> ReLU -> FC(W2, b2) -> scores (-> softmax loss)
//! ```
//!
//! Score-only inference lives here (`forward`, `predict`); the loss and
//! gradient computation is in [`backprop`].

pub mod backprop;
pub mod params;

pub use params::{Gradients, Params};

use ndarray::{Array2, ArrayView2};
use rand::Rng;

use crate::config::{validate_network_config, NetworkConfig};
use crate::error::{NetError, Result};
use crate::utils::activations::{argmax_rows, relu};

/// Two-layer network owning its [`Params`].
#[derive(Debug, Clone)]
pub struct TwoLayerNet {
    params: Params,
}

/// Intermediate values of one forward pass, kept for backpropagation.
pub(crate) struct ForwardCache {
    pub hidden_pre: Array2<f64>,
    pub hidden: Array2<f64>,
    pub scores: Array2<f64>,
}

impl TwoLayerNet {
    /// Create a network with Gaussian weights scaled by `std` and zero biases.
    ///
    /// # Arguments
    ///
    /// * `input_size` - Dimension D of each input example
    /// * `hidden_size` - Number of hidden units H
    /// * `output_size` - Number of classes C
    /// * `std` - Scale of the initial weights
    /// * `rng` - Generator used for weight initialization
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut rng = seeded_rng(0);
    /// let net = TwoLayerNet::new(4, 10, 3, 1e-4, &mut rng)?;
    /// assert_eq!(net.output_size(), 3);
    /// ```
    pub fn new<R: Rng + ?Sized>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        std: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let params = Params::new(input_size, hidden_size, output_size, std, rng)?;
        Ok(Self { params })
    }

    /// Build a network from the `network` section of a configuration.
    ///
    /// The section is validated first, so a bad value is reported as
    /// [`NetError::InvalidConfig`].
    pub fn from_config<R: Rng + ?Sized>(config: &NetworkConfig, rng: &mut R) -> Result<Self> {
        validate_network_config(config)?;
        Self::new(
            config.input_size,
            config.hidden_size,
            config.output_size,
            config.std,
            rng,
        )
    }

    /// Wrap existing parameters, e.g. hand-picked weights in tests.
    pub fn from_params(params: Params) -> Self {
        Self { params }
    }

    pub fn input_size(&self) -> usize {
        self.params.input_size()
    }

    pub fn hidden_size(&self) -> usize {
        self.params.hidden_size()
    }

    pub fn output_size(&self) -> usize {
        self.params.output_size()
    }

    pub fn parameter_count(&self) -> usize {
        self.params.parameter_count()
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Mutable access for optimizers. Shapes must be left untouched.
    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    /// Class scores for a batch, shape (N, C).
    ///
    /// # Errors
    ///
    /// Returns [`NetError::ShapeMismatch`] if `x` does not have `input_size`
    /// columns.
    pub fn forward(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        Ok(self.forward_cached(x)?.scores)
    }

    /// Predicted class per row: the arg-max of its scores.
    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Vec<usize>> {
        let scores = self.forward(x)?;
        Ok(argmax_rows(scores.view()))
    }

    pub(crate) fn forward_cached(&self, x: ArrayView2<f64>) -> Result<ForwardCache> {
        self.check_input(x)?;

        let hidden_pre = x.dot(&self.params.w1) + &self.params.b1;
        let hidden = relu(&hidden_pre);
        let scores = hidden.dot(&self.params.w2) + &self.params.b2;

        Ok(ForwardCache {
            hidden_pre,
            hidden,
            scores,
        })
    }

    fn check_input(&self, x: ArrayView2<f64>) -> Result<()> {
        if x.ncols() != self.input_size() {
            return Err(NetError::ShapeMismatch(format!(
                "input has {} features, network expects {}",
                x.ncols(),
                self.input_size()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::rng::seeded_rng;
    use ndarray::array;

    fn fixed_net() -> TwoLayerNet {
        TwoLayerNet::from_params(Params {
            w1: array![[1.0, -1.0], [0.5, 2.0]],
            b1: array![0.0, 0.5],
            w2: array![[1.0, 0.0, -1.0], [0.0, 1.0, 1.0]],
            b2: array![0.1, 0.0, -0.1],
        })
    }

    #[test]
    fn test_forward_known_values() {
        let net = fixed_net();
        let x = array![[1.0, 1.0]];

        // hidden_pre = [1.5, 1.5], hidden = [1.5, 1.5]
        // scores = [1.5 + 0.1, 1.5, 0.0 - 0.1]
        let scores = net.forward(x.view()).unwrap();
        assert!((scores[[0, 0]] - 1.6).abs() < 1e-12);
        assert!((scores[[0, 1]] - 1.5).abs() < 1e-12);
        assert!((scores[[0, 2]] + 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_forward_relu_clips_hidden() {
        let net = fixed_net();
        let x = array![[-1.0, 0.0]];

        // hidden_pre = [-1.0, 1.5] -> hidden = [0.0, 1.5]
        let cache = net.forward_cached(x.view()).unwrap();
        assert_eq!(cache.hidden, array![[0.0, 1.5]]);
        assert_eq!(cache.hidden_pre, array![[-1.0, 1.5]]);
    }

    #[test]
    fn test_forward_rejects_wrong_width() {
        let net = fixed_net();
        let x = array![[1.0, 2.0, 3.0]];
        assert!(matches!(
            net.forward(x.view()),
            Err(NetError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_predict_on_fixed_net() {
        let net = fixed_net();
        let x = array![[1.0, 1.0], [-1.0, 0.0]];

        // Second row: hidden = [0, 1.5], scores = [0.1, 1.5, 1.4]
        assert_eq!(net.predict(x.view()).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_from_config() {
        let config = NetworkConfig {
            input_size: 3,
            hidden_size: 7,
            output_size: 2,
            std: 1e-3,
        };
        let mut rng = seeded_rng(11);
        let net = TwoLayerNet::from_config(&config, &mut rng).unwrap();

        assert_eq!(net.input_size(), 3);
        assert_eq!(net.hidden_size(), 7);
        assert_eq!(net.output_size(), 2);
        assert_eq!(net.parameter_count(), 3 * 7 + 7 + 7 * 2 + 2);
    }

    #[test]
    fn test_from_config_validates_section() {
        let mut rng = seeded_rng(12);
        let bad_std = NetworkConfig {
            input_size: 2,
            hidden_size: 3,
            output_size: 2,
            std: f64::NAN,
        };
        assert!(matches!(
            TwoLayerNet::from_config(&bad_std, &mut rng),
            Err(NetError::InvalidConfig(_))
        ));

        let zero_hidden = NetworkConfig {
            hidden_size: 0,
            std: 1e-4,
            ..bad_std
        };
        assert!(matches!(
            TwoLayerNet::from_config(&zero_hidden, &mut rng),
            Err(NetError::InvalidConfig(_))
        ));
    }
}
