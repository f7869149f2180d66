// Tests for forward propagation and prediction: output dimensions,
// known values, and arg-max semantics.

use approx::assert_relative_eq;
use ndarray::{array, Array1, Array2};
use two_layer_net::utils::seeded_rng;
use two_layer_net::{NetError, Params, TwoLayerNet};

// Hand-picked 3 -> 2 -> 2 network.
fn fixed_net() -> TwoLayerNet {
    TwoLayerNet::from_params(Params {
        w1: array![[1.0, 0.0], [0.0, 1.0], [1.0, -1.0]],
        b1: array![0.0, 0.5],
        w2: array![[2.0, -1.0], [-1.0, 1.0]],
        b2: array![0.25, 0.0],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Output shape tests
    // ========================================================================

    #[test]
    fn test_forward_output_dimensions() {
        let mut rng = seeded_rng(42);
        let net = TwoLayerNet::new(8, 16, 5, 1e-2, &mut rng).unwrap();

        for n in [1, 2, 7, 64] {
            let x = Array2::<f64>::ones((n, 8));
            let scores = net.forward(x.view()).unwrap();
            assert_eq!(scores.dim(), (n, 5));
        }
    }

    #[test]
    fn test_forward_empty_batch() {
        let net = fixed_net();
        let x = Array2::<f64>::zeros((0, 3));

        assert_eq!(net.forward(x.view()).unwrap().dim(), (0, 2));
        assert!(net.predict(x.view()).unwrap().is_empty());
    }

    #[test]
    fn test_forward_wrong_input_width() {
        let net = fixed_net();
        let x = Array2::<f64>::zeros((2, 4));

        assert!(matches!(
            net.forward(x.view()),
            Err(NetError::ShapeMismatch(_))
        ));
        assert!(matches!(
            net.predict(x.view()),
            Err(NetError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_new_rejects_invalid_std() {
        let mut rng = seeded_rng(6);
        for std in [-1.0, f64::NAN] {
            assert!(matches!(
                TwoLayerNet::new(2, 3, 2, std, &mut rng),
                Err(NetError::InvalidConfig(_))
            ));
        }
    }

    // ========================================================================
    // Known value tests
    // ========================================================================

    #[test]
    fn test_forward_known_values() {
        let net = fixed_net();
        let x = array![[1.0, 2.0, 0.0], [0.0, -3.0, 1.0]];

        // Row 0: hidden_pre = [1.0, 2.5] -> hidden = [1.0, 2.5]
        //        scores = [2.0 - 2.5 + 0.25, -1.0 + 2.5] = [-0.25, 1.5]
        // Row 1: hidden_pre = [1.0, -3.5] -> hidden = [1.0, 0.0]
        //        scores = [2.0 + 0.25, -1.0] = [2.25, -1.0]
        let scores = net.forward(x.view()).unwrap();
        assert_relative_eq!(scores[[0, 0]], -0.25, epsilon = 1e-12);
        assert_relative_eq!(scores[[0, 1]], 1.5, epsilon = 1e-12);
        assert_relative_eq!(scores[[1, 0]], 2.25, epsilon = 1e-12);
        assert_relative_eq!(scores[[1, 1]], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_biases_and_weights_give_zero_scores() {
        let net = TwoLayerNet::from_params(Params {
            w1: Array2::zeros((3, 4)),
            b1: Array1::zeros(4),
            w2: Array2::zeros((4, 2)),
            b2: Array1::zeros(2),
        });
        let x = array![[1.0, -2.0, 3.0]];

        assert_eq!(net.forward(x.view()).unwrap(), array![[0.0, 0.0]]);
    }

    #[test]
    fn test_forward_does_not_mutate_params() {
        let mut rng = seeded_rng(5);
        let net = TwoLayerNet::new(3, 4, 2, 1e-1, &mut rng).unwrap();
        let before = net.params().clone();

        let x = array![[0.5, -0.5, 2.0]];
        net.forward(x.view()).unwrap();
        let _ = net.evaluate(x.view(), &[1], 0.1).unwrap();

        assert_eq!(net.params(), &before);
    }

    // ========================================================================
    // Prediction tests
    // ========================================================================

    #[test]
    fn test_predict_known_values() {
        let net = fixed_net();
        let x = array![[1.0, 2.0, 0.0], [0.0, -3.0, 1.0]];

        assert_eq!(net.predict(x.view()).unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_predict_matches_argmax_of_scores() {
        let mut rng = seeded_rng(17);
        let net = TwoLayerNet::new(4, 10, 6, 1.0, &mut rng).unwrap();
        let x = Array2::from_shape_fn((20, 4), |(i, j)| (i as f64 - 10.0) * 0.3 + j as f64);

        let scores = net.forward(x.view()).unwrap();
        let predicted = net.predict(x.view()).unwrap();

        for (row, &label) in scores.rows().into_iter().zip(predicted.iter()) {
            assert!(label < 6);
            for (c, &value) in row.iter().enumerate() {
                assert!(value <= row[label]);
                if c < label {
                    assert!(value < row[label], "earlier index should win ties");
                }
            }
        }
    }

    #[test]
    fn test_predict_ties_resolve_to_lowest_index() {
        // Zero weights: every class scores its bias.
        let net = TwoLayerNet::from_params(Params {
            w1: Array2::zeros((2, 2)),
            b1: Array1::zeros(2),
            w2: Array2::zeros((2, 4)),
            b2: array![0.0, 1.0, 1.0, 1.0],
        });
        let x = array![[1.0, 1.0], [-5.0, 3.0]];

        assert_eq!(net.predict(x.view()).unwrap(), vec![1, 1]);
    }
}
