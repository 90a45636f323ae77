pub mod loss_func;
pub mod loss_type;
pub mod squared_error;

pub use loss_func::LossFunc;
pub use loss_type::LossType;
pub use squared_error::squared_error;
