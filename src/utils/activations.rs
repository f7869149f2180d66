//! Activation functions for the two-layer network
//!
//! This module provides the row-wise operations used by the forward and
//! backward passes:
//! - ReLU and its derivative mask (hidden layer)
//! - Softmax with max-subtraction (output layer)
//! - Arg-max (prediction)

use ndarray::{Array2, ArrayView2, Zip};

/// ReLU activation: element-wise `max(0, x)`.
pub fn relu(pre_activation: &Array2<f64>) -> Array2<f64> {
    pre_activation.mapv(|v| v.max(0.0))
}

/// ReLU derivative applied in-place.
///
/// Zeroes every entry of `grad` whose pre-activation was `<= 0`.
pub fn relu_backward_inplace(grad: &mut Array2<f64>, pre_activation: &Array2<f64>) {
    assert_eq!(
        grad.dim(),
        pre_activation.dim(),
        "grad and pre_activation shape mismatch in relu_backward_inplace"
    );

    Zip::from(grad).and(pre_activation).for_each(|g, &z| {
        if z <= 0.0 {
            *g = 0.0;
        }
    });
}

/// Softmax applied row-wise.
///
/// Converts scores to probabilities for each row. Subtracts the row maximum
/// before exponentiating so that large scores cannot overflow.
pub fn softmax_rows(scores: ArrayView2<f64>) -> Array2<f64> {
    let mut probs = scores.to_owned();

    for mut row in probs.rows_mut() {
        let max_value = row.fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
        row.mapv_inplace(|v| (v - max_value).exp());
        let sum = row.sum();
        row /= sum;
    }

    probs
}

/// Index of the largest entry in each row.
///
/// Ties resolve to the lowest index.
pub fn argmax_rows(scores: ArrayView2<f64>) -> Vec<usize> {
    scores
        .rows()
        .into_iter()
        .map(|row| {
            let mut best = 0usize;
            for (i, &value) in row.iter().enumerate().skip(1) {
                if value > row[best] {
                    best = i;
                }
            }
            best
        })
        .collect()
}
