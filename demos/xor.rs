use std::sync::atomic::AtomicBool;

use ffnet::{Example, NetworkSpec, Progress, SgdTrainer, TrainConfig};
use tracing_subscriber::EnvFilter;

const SPEC: &str = r#"{
    "input_size": 2,
    "layers": [
        { "size": 3, "activation": "sigmoid" },
        { "size": 1, "activation": "sigmoid" }
    ]
}"#;

fn main() -> ffnet::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = TrainConfig {
        epochs: 5000,
        seed: Some(42),
        ..TrainConfig::default()
    };
    let mut rng = config.rng();
    let network = NetworkSpec::from_json(SPEC)?.build(&mut rng)?;

    let mut samples = vec![
        Example::new(vec![1.0, 0.0], vec![1.0]),
        Example::new(vec![1.0, 1.0], vec![0.0]),
        Example::new(vec![0.0, 1.0], vec![1.0]),
        Example::new(vec![0.0, 0.0], vec![0.0]),
    ];

    let mut trainer = SgdTrainer::from_config(&config).on_progress(|p| {
        if let Progress::Epoch(stats) = p {
            if stats.epoch % 1000 == 0 {
                println!("Epoch {}: loss = {:.6}", stats.epoch, stats.mean_loss);
            }
        }
    });
    trainer.attach(&network);
    trainer.train(&AtomicBool::new(false), config.epochs, &mut samples, &mut rng)?;

    for sample in &samples {
        let output = trainer.predict(&sample.inputs)?;
        println!("Input: {:?} -> Output: {:.4}", sample.inputs, output[0]);
    }
    Ok(())
}
