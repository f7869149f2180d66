//! Loss and gradient computation
//!
//! Softmax cross-entropy on top of the forward pass, followed by a manual
//! backward pass through both affine layers and the ReLU. L2 regularization
//! `reg * (|W1|² + |W2|²)` is added to the loss, and `2 * reg * W` to the
//! weight gradients.

use ndarray::{Array2, ArrayView2, Axis};

use super::{Gradients, TwoLayerNet};
use crate::error::{NetError, Result};
use crate::utils::activations::{relu_backward_inplace, softmax_rows};

impl TwoLayerNet {
    /// Loss and gradients for a labelled batch.
    ///
    /// Pure with respect to the network: parameters are only read.
    ///
    /// # Arguments
    ///
    /// * `x` - Input batch (N × input_size)
    /// * `y` - One label per row, each in `[0, output_size)`
    /// * `reg` - L2 regularization strength
    ///
    /// # Returns
    ///
    /// `(loss, grads)` where `grads` matches the shapes of [`Params`](super::Params).
    ///
    /// # Errors
    ///
    /// * [`NetError::ShapeMismatch`] - wrong input width, label count differs
    ///   from N, or an empty batch
    /// * [`NetError::LabelOutOfRange`] - a label is not a valid class
    /// * [`NetError::NumericInstability`] - the loss is not finite
    ///
    /// # Example
    ///
    /// ```ignore
    /// let (loss, grads) = net.evaluate(x.view(), &[0, 2, 1], 1e-3)?;
    /// optimizer.update(net.params_mut(), &grads);
    /// ```
    pub fn evaluate(&self, x: ArrayView2<f64>, y: &[usize], reg: f64) -> Result<(f64, Gradients)> {
        let num_examples = x.nrows();
        if num_examples == 0 {
            return Err(NetError::ShapeMismatch(
                "cannot evaluate loss on an empty batch".to_string(),
            ));
        }
        if y.len() != num_examples {
            return Err(NetError::ShapeMismatch(format!(
                "{} labels for a batch of {} examples",
                y.len(),
                num_examples
            )));
        }
        let num_classes = self.output_size();
        if let Some(&label) = y.iter().find(|&&label| label >= num_classes) {
            return Err(NetError::LabelOutOfRange { label, num_classes });
        }

        let cache = self.forward_cached(x)?;
        let probs = softmax_rows(cache.scores.view());

        let data_loss = y
            .iter()
            .enumerate()
            .map(|(i, &label)| -probs[[i, label]].ln())
            .sum::<f64>()
            / num_examples as f64;
        let loss = data_loss + reg * self.params.weight_norm_squared();
        if !loss.is_finite() {
            return Err(NetError::NumericInstability(format!(
                "loss evaluated to {}",
                loss
            )));
        }

        let grads = self.backward(x, y, probs, &cache.hidden_pre, &cache.hidden, reg);
        Ok((loss, grads))
    }

    fn backward(
        &self,
        x: ArrayView2<f64>,
        y: &[usize],
        probs: Array2<f64>,
        hidden_pre: &Array2<f64>,
        hidden: &Array2<f64>,
        reg: f64,
    ) -> Gradients {
        let params = &self.params;
        let num_examples = x.nrows() as f64;

        // Output layer: d(loss)/d(scores) = (probs - one_hot(y)) / N.
        let mut dscores = probs;
        for (i, &label) in y.iter().enumerate() {
            dscores[[i, label]] -= 1.0;
        }
        dscores /= num_examples;

        let w2 = hidden.t().dot(&dscores) + &params.w2 * (2.0 * reg);
        let b2 = dscores.sum_axis(Axis(0));

        // Hidden layer, through the ReLU.
        let mut dhidden = dscores.dot(&params.w2.t());
        relu_backward_inplace(&mut dhidden, hidden_pre);

        let w1 = x.t().dot(&dhidden) + &params.w1 * (2.0 * reg);
        let b1 = dhidden.sum_axis(Axis(0));

        Gradients { w1, b1, w2, b2 }
    }
}
