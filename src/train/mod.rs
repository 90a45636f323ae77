pub mod progress;
pub mod shuffle;
pub mod train_config;
pub mod trainer;

pub use progress::{EpochStats, Progress};
pub use shuffle::ShuffleMode;
pub use train_config::TrainConfig;
pub use trainer::{Example, SgdTrainer};
