//! Mini-batch SGD training loop
//!
//! Each iteration samples a batch with replacement, evaluates loss and
//! gradients, and takes one gradient step. Every `epoch_length` iterations
//! (starting with iteration 0) the trainer records training and validation
//! accuracy and decays the learning rate.

use ndarray::{ArrayView2, Axis};
use rand::Rng;
use tracing::{debug, info};

use crate::config::{validate_training_config, TrainingConfig};
use crate::error::{NetError, Result};
use crate::network::TwoLayerNet;
use crate::optimizers::{Optimizer, SGD};
use crate::utils::lr_scheduler::{ExponentialDecay, LRScheduler};
use crate::utils::rng::sample_batch_indices;

/// Loss and accuracy curves produced by one training run.
///
/// `loss_history` has one entry per iteration; the accuracy histories have
/// one entry per epoch boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingHistory {
    pub loss_history: Vec<f64>,
    pub train_acc_history: Vec<f64>,
    pub val_acc_history: Vec<f64>,
}

impl TrainingHistory {
    /// Loss of the last iteration, if any ran.
    pub fn final_loss(&self) -> Option<f64> {
        self.loss_history.last().copied()
    }

    /// Highest validation accuracy seen at any epoch boundary.
    pub fn best_val_accuracy(&self) -> Option<f64> {
        self.val_acc_history.iter().copied().reduce(f64::max)
    }
}

/// Number of iterations per epoch: `max(num_train / batch_size, 1)`.
///
/// Uses integer division, so a partial epoch rounds down.
pub fn epoch_length(num_train: usize, batch_size: usize) -> usize {
    if batch_size == 0 {
        return 1;
    }
    (num_train / batch_size).max(1)
}

/// Number of epoch boundaries hit in `num_iters` iterations, iteration 0 included.
pub fn epoch_count(num_iters: usize, iterations_per_epoch: usize) -> usize {
    num_iters.div_ceil(iterations_per_epoch.max(1))
}

/// Fraction of predictions equal to their label; 0.0 for an empty set.
pub fn accuracy(predicted: &[usize], labels: &[usize]) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }
    let correct = predicted
        .iter()
        .zip(labels.iter())
        .filter(|(p, l)| p == l)
        .count();
    correct as f64 / labels.len() as f64
}

/// SGD trainer with per-epoch exponential learning rate decay.
///
/// The learning rate lives in the optimizer; after `train` returns it holds
/// the decayed value, and a second `train` call continues from it unless
/// [`Trainer::reset`] is called first.
///
/// # Example
///
/// ```ignore
/// let mut rng = seeded_rng(0);
/// let mut net = TwoLayerNet::new(2, 10, 3, 1e-4, &mut rng)?;
/// let mut trainer = Trainer::new(&TrainingConfig::default())?;
/// let history = trainer.train(&mut net, x.view(), &y, x_val.view(), &y_val, &mut rng)?;
/// println!("final loss {:?}", history.final_loss());
/// ```
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainingConfig,
    optimizer: SGD,
    scheduler: ExponentialDecay,
}

impl Trainer {
    /// Create a trainer from validated hyperparameters.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::InvalidConfig`] if any value is out of range.
    pub fn new(config: &TrainingConfig) -> Result<Self> {
        validate_training_config(config)?;
        Ok(Self {
            config: config.clone(),
            optimizer: SGD::new(config.learning_rate),
            scheduler: ExponentialDecay::new(config.learning_rate, config.learning_rate_decay),
        })
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Current learning rate, after any decay applied so far.
    pub fn learning_rate(&self) -> f64 {
        self.optimizer.learning_rate()
    }

    /// Restore the initial learning rate.
    pub fn reset(&mut self) {
        self.scheduler.reset();
        self.optimizer.reset();
        self.optimizer.set_learning_rate(self.scheduler.get_lr());
    }

    /// Train `net` for `num_iters` SGD steps.
    ///
    /// # Arguments
    ///
    /// * `net` - Network whose parameters are updated in place
    /// * `x`, `y` - Training examples and labels
    /// * `x_val`, `y_val` - Validation examples and labels, scored at every epoch boundary
    /// * `rng` - Generator used for batch sampling
    ///
    /// # Errors
    ///
    /// Fails with [`NetError::ShapeMismatch`] on an empty training set or
    /// mismatched label counts. Any error from an iteration aborts training
    /// and leaves the parameters as of the last successful update.
    pub fn train<R: Rng + ?Sized>(
        &mut self,
        net: &mut TwoLayerNet,
        x: ArrayView2<f64>,
        y: &[usize],
        x_val: ArrayView2<f64>,
        y_val: &[usize],
        rng: &mut R,
    ) -> Result<TrainingHistory> {
        let num_train = x.nrows();
        if num_train == 0 {
            return Err(NetError::ShapeMismatch(
                "training set is empty".to_string(),
            ));
        }
        if y.len() != num_train {
            return Err(NetError::ShapeMismatch(format!(
                "{} training labels for {} examples",
                y.len(),
                num_train
            )));
        }
        if x_val.ncols() != net.input_size() {
            return Err(NetError::ShapeMismatch(format!(
                "validation set has {} features, network expects {}",
                x_val.ncols(),
                net.input_size()
            )));
        }
        if y_val.len() != x_val.nrows() {
            return Err(NetError::ShapeMismatch(format!(
                "{} validation labels for {} examples",
                y_val.len(),
                x_val.nrows()
            )));
        }

        let TrainingConfig {
            reg,
            num_iters,
            batch_size,
            verbose,
            progress_interval,
            ..
        } = self.config;
        let iterations_per_epoch = epoch_length(num_train, batch_size);
        let num_epochs = epoch_count(num_iters, iterations_per_epoch);

        let mut history = TrainingHistory {
            loss_history: Vec::with_capacity(num_iters),
            train_acc_history: Vec::with_capacity(num_epochs),
            val_acc_history: Vec::with_capacity(num_epochs),
        };

        for it in 0..num_iters {
            let indices = sample_batch_indices(rng, num_train, batch_size);
            let x_batch = x.select(Axis(0), &indices);
            let y_batch: Vec<usize> = indices.iter().map(|&i| y[i]).collect();

            let (loss, grads) = net.evaluate(x_batch.view(), &y_batch, reg)?;
            history.loss_history.push(loss);

            self.optimizer.update(net.params_mut(), &grads);

            debug!(iteration = it, loss, "sgd step");
            if verbose && it % progress_interval == 0 {
                info!("iteration {} / {}: loss {:.6}", it, num_iters, loss);
            }

            if it % iterations_per_epoch == 0 {
                let train_acc = accuracy(&net.predict(x_batch.view())?, &y_batch);
                let val_acc = accuracy(&net.predict(x_val)?, y_val);
                history.train_acc_history.push(train_acc);
                history.val_acc_history.push(val_acc);

                self.scheduler.step();
                self.optimizer.set_learning_rate(self.scheduler.get_lr());

                if verbose {
                    info!(
                        "epoch {}: train acc {:.4}, val acc {:.4}, lr {:.3e}",
                        self.scheduler.current_epoch(),
                        train_acc,
                        val_acc,
                        self.optimizer.learning_rate()
                    );
                }
            }
        }

        Ok(history)
    }
}
