use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::{NnError, Result};
use crate::loss::loss_func::LossFunc;
use crate::network::backprop;
use crate::network::network::{forward, Network};
use crate::optim::sgd::Sgd;
use crate::train::progress::{EpochStats, Progress};
use crate::train::shuffle::{shuffle, ShuffleMode};
use crate::train::train_config::{TrainConfig, DEFAULT_ETA};

/// A single training sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub inputs: Vec<f64>,
    pub outputs: Vec<f64>,
}

impl Example {
    pub fn new(inputs: Vec<f64>, outputs: Vec<f64>) -> Example {
        Example { inputs, outputs }
    }
}

type ProgressFn<'a> = Box<dyn FnMut(&Progress) + 'a>;

/// Stochastic gradient descent trainer driving back-propagation over a
/// borrowed [`Network`].
///
/// Every per-sample step (forward pass, back-propagation and update) holds
/// the network's write lock, so `predict` calls from other threads never
/// observe a half-applied step.
pub struct SgdTrainer<'a> {
    network: Option<&'a Network>,
    sgd: Sgd,
    loss: LossFunc,
    shuffle: ShuffleMode,
    progress: ProgressFn<'a>,
}

impl<'a> SgdTrainer<'a> {
    /// Unattached trainer with default settings: `eta = 0.5`, squared
    /// error loss, prefix shuffle, no progress reporting.
    pub fn new() -> SgdTrainer<'a> {
        SgdTrainer {
            network: None,
            sgd: Sgd::new(DEFAULT_ETA),
            loss: LossFunc::default(),
            shuffle: ShuffleMode::default(),
            progress: Box::new(|_: &Progress| {}),
        }
    }

    pub fn for_network(network: &'a Network) -> SgdTrainer<'a> {
        let mut trainer = SgdTrainer::new();
        trainer.attach(network);
        trainer
    }

    /// Unattached trainer configured from `config` (its `epochs` and `seed`
    /// belong to the caller's `train` invocation).
    pub fn from_config(config: &TrainConfig) -> SgdTrainer<'a> {
        SgdTrainer::new()
            .with_eta(config.eta)
            .with_loss(config.loss.loss_func())
            .with_shuffle(config.shuffle)
    }

    pub fn attach(&mut self, network: &'a Network) {
        self.network = Some(network);
    }

    pub fn network(&self) -> Option<&'a Network> {
        self.network
    }

    /// Sets the learning rate; zero, negative or non-finite values fall back
    /// to the default of 0.5.
    pub fn with_eta(mut self, eta: f64) -> Self {
        let eta = if eta.is_finite() && eta > 0.0 { eta } else { DEFAULT_ETA };
        self.sgd = Sgd::new(eta);
        self
    }

    pub fn with_loss(mut self, loss: LossFunc) -> Self {
        self.loss = loss;
        self
    }

    pub fn with_shuffle(mut self, mode: ShuffleMode) -> Self {
        self.shuffle = mode;
        self
    }

    pub fn on_progress(mut self, callback: impl FnMut(&Progress) + 'a) -> Self {
        self.progress = Box::new(callback);
        self
    }

    pub fn eta(&self) -> f64 {
        self.sgd.learning_rate
    }

    pub fn loss(&self) -> LossFunc {
        self.loss
    }

    /// Delegates to the attached network.
    pub fn predict(&self, inputs: &[f64]) -> Result<Vec<f64>> {
        self.network.ok_or(NnError::NoNetwork)?.predict(inputs)
    }

    /// Runs `epochs` passes over `samples`, shuffling them in place at the
    /// start of each epoch.
    ///
    /// `stop` is checked before every epoch; once set, training returns
    /// [`NnError::Cancelled`] and keeps the updates of completed epochs.
    /// A sample whose lengths don't fit the network aborts the run with the
    /// corresponding length error.
    pub fn train<R: Rng + ?Sized>(
        &mut self,
        stop: &AtomicBool,
        epochs: usize,
        samples: &mut [Example],
        rng: &mut R,
    ) -> Result<()> {
        let network = self.network.ok_or(NnError::NoNetwork)?;

        info!(
            %network,
            epochs,
            samples = samples.len(),
            eta = self.sgd.learning_rate,
            loss = self.loss.name(),
            "training started"
        );
        let training_start = Instant::now();

        for epoch in 0..epochs {
            if stop.load(Ordering::Relaxed) {
                warn!(epoch, "training cancelled");
                return Err(NnError::Cancelled { epoch });
            }

            let started_at = Instant::now();
            shuffle(samples, self.shuffle, rng);

            let mut total_loss = 0.0;
            for sample in samples.iter() {
                total_loss += self.step(network, sample)?;
            }

            let stats = EpochStats {
                epoch,
                total_epochs: epochs,
                mean_loss: total_loss / samples.len().max(1) as f64,
                elapsed: started_at.elapsed(),
            };
            debug!(epoch, mean_loss = stats.mean_loss, elapsed = ?stats.elapsed, "epoch finished");
            (self.progress)(&Progress::Epoch(stats));
        }

        let elapsed = training_start.elapsed();
        info!(epochs, ?elapsed, "training finished");
        (self.progress)(&Progress::Finished { epochs, elapsed });
        Ok(())
    }

    /// One forward/backward pass and weight update; returns the sample loss.
    fn step(&self, network: &Network, sample: &Example) -> Result<f64> {
        let x = network.input_matrix(&sample.inputs)?;
        let y = network.output_matrix(&sample.outputs)?;

        // Gradients are applied to the same weights they were computed from.
        let mut layers = network.write_layers();
        let pass = forward(&layers, &x);
        let y_hat = pass.output();
        let loss = self.loss.total(&y, y_hat);
        let cost_grad = self.loss.f_prime(&y, y_hat);
        let grads = backprop::back_propagate(&layers, &pass, &x, cost_grad);

        for ((layer, dw), db) in layers.iter_mut().zip(&grads.weights).zip(&grads.biases) {
            self.sgd.step(layer, dw, db);
        }
        Ok(loss)
    }
}

impl Default for SgdTrainer<'_> {
    fn default() -> Self {
        SgdTrainer::new()
    }
}

impl fmt::Debug for SgdTrainer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SgdTrainer")
            .field("network", &self.network)
            .field("eta", &self.sgd.learning_rate)
            .field("loss", &self.loss)
            .field("shuffle", &self.shuffle)
            .finish()
    }
}
