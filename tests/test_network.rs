// Tests for network construction, forward inference and concurrent predict.

use approx::assert_relative_eq;
use ffnet::{ActivationFunction, Differentiable, ForwardPass, Matrix, Network, NnError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn xor_network(rng: &mut StdRng) -> Network {
    Network::builder(2)
        .layer(3, Differentiable::sigmoid())
        .layer(1, ActivationFunction::Sigmoid)
        .build(rng)
        .expect("valid network")
}

mod construction {
    use super::*;

    #[test]
    fn empty_layer_list_is_rejected() {
        let err = Network::builder(2).build(&mut rng()).unwrap_err();
        assert!(matches!(err, NnError::NoLayers));
    }

    #[test]
    fn zero_sizes_are_rejected() {
        let err = Network::builder(0)
            .layer(1, Differentiable::relu())
            .build(&mut rng())
            .unwrap_err();
        assert!(matches!(err, NnError::InvalidSize { what: "input size" }));

        let err = Network::new(2, vec![(3, Differentiable::relu()), (0, Differentiable::relu())], &mut rng())
            .unwrap_err();
        assert!(matches!(err, NnError::InvalidSize { what: "layer size" }));
    }

    #[test]
    fn layer_shapes_chain_from_input_size() {
        let net = Network::builder(4)
            .layer(5, Differentiable::relu())
            .layer(3, Differentiable::sigmoid())
            .layer(2, Differentiable::sigmoid())
            .build(&mut rng())
            .unwrap();

        assert_eq!(net.input_size(), 4);
        assert_eq!(net.output_size(), 2);
        assert_eq!(net.layer_count(), 3);
        assert_eq!(net.layer_sizes(), vec![5, 3, 2]);

        assert_eq!(net.weights(0).unwrap().dims(), (5, 4));
        assert_eq!(net.weights(1).unwrap().dims(), (3, 5));
        assert_eq!(net.weights(2).unwrap().dims(), (2, 3));
        assert_eq!(net.biases(1).unwrap().dims(), (3, 1));
        assert!(net.weights(3).is_none());
    }

    #[test]
    fn weights_start_in_unit_interval_and_biases_at_zero() {
        let net = xor_network(&mut rng());
        for l in 0..net.layer_count() {
            let w = net.weights(l).unwrap();
            assert!(w.as_slice().iter().all(|&v| (0.0..1.0).contains(&v)));
            let b = net.biases(l).unwrap();
            assert!(b.as_slice().iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn same_seed_same_weights() {
        let a = xor_network(&mut rng());
        let b = xor_network(&mut rng());
        assert_eq!(a.weights(0), b.weights(0));
        assert_eq!(a.weights(1), b.weights(1));
    }

    #[test]
    fn display_names_input_and_output() {
        let net = xor_network(&mut rng());
        assert_eq!(net.to_string(), "Network{in=2, out=1}");
    }
}

mod inference {
    use super::*;

    #[test]
    fn predict_returns_output_sized_vector() {
        let net = Network::builder(3)
            .layer(7, Differentiable::relu())
            .layer(4, Differentiable::sigmoid())
            .build(&mut rng())
            .unwrap();

        let out = net.predict(&[0.1, -0.2, 0.3]).unwrap();
        assert_eq!(out.len(), net.output_size());
        assert!(out.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn wrong_input_length_is_an_error() {
        let net = xor_network(&mut rng());
        let before = net.weights(0);

        for bad in [&[][..], &[1.0][..], &[1.0, 2.0, 3.0][..]] {
            match net.predict(bad) {
                Err(NnError::InputLength { expected, actual }) => {
                    assert_eq!(expected, 2);
                    assert_eq!(actual, bad.len());
                }
                other => panic!("expected InputLength error, got {:?}", other),
            }
        }
        assert_eq!(net.weights(0), before);
    }

    #[test]
    fn forward_pass_retains_every_layer() {
        let net = xor_network(&mut rng());
        let pass = net.forward_pass(&[1.0, 0.0]).unwrap();

        assert_eq!(pass.weighted_sums.len(), 2);
        assert_eq!(pass.activations.len(), 2);
        assert_eq!(pass.weighted_sums[0].dims(), (3, 1));
        assert_eq!(pass.activations[1].dims(), (1, 1));

        let sigmoid = Differentiable::sigmoid();
        for (z, a) in pass.weighted_sums.iter().zip(&pass.activations) {
            assert_eq!(&sigmoid.f(z), a);
        }
    }

    #[test]
    fn forward_pass_computes_weighted_sum() {
        let net = Network::builder(2)
            .layer(1, Differentiable::relu())
            .build(&mut rng())
            .unwrap();
        let w = net.weights(0).unwrap();

        let pass = net.forward_pass(&[2.0, 3.0]).unwrap();
        let expected = 2.0 * w.elem(0, 0) + 3.0 * w.elem(0, 1);
        assert_relative_eq!(pass.weighted_sums[0].elem(0, 0), expected, epsilon = 1e-12);
        assert_relative_eq!(pass.output().elem(0, 0), expected, epsilon = 1e-12);
    }

    #[test]
    fn back_propagate_shapes_match_parameters() {
        let net = Network::builder(3)
            .layer(4, Differentiable::sigmoid())
            .layer(2, Differentiable::sigmoid())
            .build(&mut rng())
            .unwrap();
        let x = [0.5, -1.0, 2.0];
        let pass = net.forward_pass(&x).unwrap();
        let grads = net.back_propagate(&pass, &Matrix::column(&x), Matrix::column(&[0.1, -0.2]));

        for l in 0..2 {
            assert_eq!(grads.weights[l].dims(), net.weights(l).unwrap().dims());
            assert_eq!(grads.biases[l].dims(), net.biases(l).unwrap().dims());
        }
    }

    #[test]
    #[should_panic(expected = "forward pass over a non-empty network")]
    fn output_of_empty_forward_pass_panics_with_message() {
        let pass = ForwardPass {
            weighted_sums: Vec::new(),
            activations: Vec::new(),
        };
        pass.output();
    }

    #[test]
    fn predict_output_is_independent_of_network_state() {
        let net = xor_network(&mut rng());
        let mut out = net.predict(&[1.0, 1.0]).unwrap();
        out[0] = 42.0;
        assert_ne!(net.predict(&[1.0, 1.0]).unwrap()[0], 42.0);
    }

    #[test]
    fn concurrent_predicts_match_sequential_results() {
        let net = xor_network(&mut rng());
        let inputs: Vec<[f64; 2]> = (0..16)
            .map(|i| [(i % 4) as f64 * 0.25, (i / 4) as f64 * 0.25])
            .collect();
        let sequential: Vec<Vec<f64>> = inputs.iter().map(|x| net.predict(x).unwrap()).collect();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    s.spawn(|| {
                        inputs
                            .iter()
                            .map(|x| net.predict(x).unwrap())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            for handle in handles {
                assert_eq!(handle.join().unwrap(), sequential);
            }
        });
    }
}
