use ndarray::Array2;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::error::Error;
use std::f64::consts::PI;
use std::process;
use std::time::Instant;
use tracing::{error, info};
use two_layer_net::config::{load_config, ModelConfig, NetworkConfig, TrainingConfig};
use two_layer_net::trainer::accuracy;
use two_layer_net::utils::logging::init_logging;
use two_layer_net::utils::seeded_rng;
use two_layer_net::{Trainer, TwoLayerNet};

// Two-layer classifier on synthetic Gaussian blobs (educational example).
const NUM_FEATURES: usize = 2;
const NUM_HIDDEN: usize = 16;
const NUM_CLASSES: usize = 3;
const TRAIN_PER_CLASS: usize = 200;
const VAL_PER_CLASS: usize = 50;
// Blob geometry.
const CENTER_RADIUS: f64 = 3.0;
const BLOB_STD: f64 = 0.5;
const SEED: u64 = 42;

// Built-in configuration used when no config file is given.
fn default_config() -> ModelConfig {
    ModelConfig {
        network: NetworkConfig {
            input_size: NUM_FEATURES,
            hidden_size: NUM_HIDDEN,
            output_size: NUM_CLASSES,
            std: 1e-2,
        },
        training: TrainingConfig {
            learning_rate: 0.5,
            learning_rate_decay: 0.95,
            reg: 1e-3,
            num_iters: 600,
            batch_size: 32,
            verbose: true,
            progress_interval: 100,
        },
    }
}

/// Reads the configuration named by the first command-line argument, or
/// falls back to [`default_config`] when none is given.
fn config_from_args(args: &[String]) -> Result<ModelConfig, Box<dyn Error>> {
    match args.get(1) {
        Some(path) => Ok(load_config(path)?),
        None => Ok(default_config()),
    }
}

/// Generates `per_class` noisy points around each of `num_classes` centers.
///
/// Centers sit evenly spaced on a circle in the first two feature
/// dimensions; the remaining dimensions are pure noise. Rows are grouped by
/// class, labels are `0..num_classes`.
fn make_blobs<R: Rng>(
    rng: &mut R,
    per_class: usize,
    num_classes: usize,
    num_features: usize,
) -> Result<(Array2<f64>, Vec<usize>), Box<dyn Error>> {
    let noise = Normal::new(0.0, BLOB_STD)?;
    let num_samples = per_class * num_classes;
    let mut features = Array2::<f64>::zeros((num_samples, num_features));
    let mut labels = Vec::with_capacity(num_samples);

    for (row_idx, mut row) in features.rows_mut().into_iter().enumerate() {
        let class = row_idx / per_class;
        let angle = 2.0 * PI * class as f64 / num_classes as f64;
        for (j, value) in row.iter_mut().enumerate() {
            let center = match j {
                0 => CENTER_RADIUS * angle.cos(),
                1 => CENTER_RADIUS * angle.sin(),
                _ => 0.0,
            };
            *value = center + noise.sample(rng);
        }
        labels.push(class);
    }

    Ok((features, labels))
}

/// Trains a network on fresh blobs and returns (train accuracy, validation accuracy).
fn run(config: &ModelConfig, seed: u64) -> Result<(f64, f64), Box<dyn Error>> {
    let mut rng = seeded_rng(seed);
    let num_classes = config.network.output_size;
    let num_features = config.network.input_size;

    info!("Generating blobs...");
    let (x_train, y_train) = make_blobs(&mut rng, TRAIN_PER_CLASS, num_classes, num_features)?;
    let (x_val, y_val) = make_blobs(&mut rng, VAL_PER_CLASS, num_classes, num_features)?;

    info!("Initializing neural network...");
    let mut net = TwoLayerNet::from_config(&config.network, &mut rng)?;
    let mut trainer = Trainer::new(&config.training)?;

    info!("Training neural network...");
    let start = Instant::now();
    let history = trainer.train(
        &mut net,
        x_train.view(),
        &y_train,
        x_val.view(),
        &y_val,
        &mut rng,
    )?;
    info!(
        "Total training time: {:.2} seconds, final loss {:.6}",
        start.elapsed().as_secs_f64(),
        history.final_loss().unwrap_or(f64::NAN)
    );

    let train_acc = accuracy(&net.predict(x_train.view())?, &y_train);
    let val_acc = accuracy(&net.predict(x_val.view())?, &y_val);
    Ok((train_acc, val_acc))
}

fn main() {
    if let Err(err) = init_logging() {
        eprintln!("Could not install logger: {}", err);
    }

    let args: Vec<String> = std::env::args().collect();
    let config = config_from_args(&args).unwrap_or_else(|err| {
        error!("Could not load configuration: {}", err);
        process::exit(1);
    });

    match run(&config, SEED) {
        Ok((train_acc, val_acc)) => {
            info!("Train Accuracy: {:.2}%", train_acc * 100.0);
            info!("Validation Accuracy: {:.2}%", val_acc * 100.0);
        }
        Err(err) => {
            error!("Training failed: {}", err);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = default_config();
        assert!(two_layer_net::config::validate_config(&config).is_ok());
    }

    #[test]
    fn test_make_blobs_shapes() {
        let mut rng = seeded_rng(1);
        let (x, y) = make_blobs(&mut rng, 5, 3, 4).unwrap();

        assert_eq!(x.dim(), (15, 4));
        assert_eq!(y, vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2]);
    }
}
