use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::network::network::Network;

/// Describes one layer in a network specification.
///
/// The layer's input size is implied by its position: the previous layer's
/// `size`, or the network `input_size` for the first layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub size: usize,
    pub activation: ActivationFunction,
}

/// Serializable network architecture.
///
/// Only the shape of the network is described here; weights are drawn fresh
/// every time the spec is built.
///
/// ```json
/// {
///   "input_size": 2,
///   "layers": [
///     { "size": 3, "activation": "sigmoid" },
///     { "size": 1, "activation": "sigmoid" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub input_size: usize,
    pub layers: Vec<LayerSpec>,
}

impl NetworkSpec {
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network> {
        self.layers
            .iter()
            .fold(Network::builder(self.input_size), |builder, spec| {
                builder.layer(spec.size, spec.activation)
            })
            .build(rng)
    }

    pub fn from_json(json: &str) -> Result<NetworkSpec> {
        Ok(serde_json::from_str(json)?)
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
