use serde::{Deserialize, Serialize};

use crate::loss::loss_func::LossFunc;
use crate::loss::squared_error::squared_error;

/// Selects the loss the trainer uses when configured from JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossType {
    #[default]
    SquaredError,
}

impl LossType {
    pub fn loss_func(self) -> LossFunc {
        match self {
            LossType::SquaredError => squared_error(),
        }
    }
}
