pub mod backprop;
pub mod network;
pub mod spec;

pub use backprop::Gradients;
pub use network::{ForwardPass, Network, NetworkBuilder};
pub use spec::{LayerSpec, NetworkSpec};
