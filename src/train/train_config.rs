use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::loss::loss_type::LossType;
use crate::train::shuffle::ShuffleMode;

pub const DEFAULT_ETA: f64 = 0.5;
pub const DEFAULT_EPOCHS: usize = 1000;

/// Hyperparameters for an [`SgdTrainer`](crate::SgdTrainer) run.
///
/// Every field is optional in JSON:
///
/// ```json
/// { "epochs": 5000, "eta": 0.5, "loss": "squared_error", "shuffle": "prefix", "seed": 42 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub eta: f64,
    pub loss: LossType,
    pub shuffle: ShuffleMode,
    /// Seed for weight initialization and shuffling; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: DEFAULT_EPOCHS,
            eta: DEFAULT_ETA,
            loss: LossType::default(),
            shuffle: ShuffleMode::default(),
            seed: None,
        }
    }
}

impl TrainConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn from_json(json: &str) -> Result<TrainConfig> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
