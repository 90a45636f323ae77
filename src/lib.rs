pub mod activation;
pub mod error;
pub mod layers;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::activation::{ActivationFunction, Differentiable};
pub use error::{NnError, Result};
pub use layers::dense::Layer;
pub use loss::loss_func::LossFunc;
pub use loss::loss_type::LossType;
pub use loss::squared_error::squared_error;
pub use math::matrix::Matrix;
pub use network::network::{ForwardPass, Network, NetworkBuilder};
pub use network::spec::{LayerSpec, NetworkSpec};
pub use optim::sgd::Sgd;
pub use train::progress::{EpochStats, Progress};
pub use train::shuffle::ShuffleMode;
pub use train::train_config::TrainConfig;
pub use train::trainer::{Example, SgdTrainer};
