// ============================================================
// Layer 5 — Burn Classifier Runtime
// ============================================================
use std::sync::{Mutex, PoisonError};

use anyhow::{anyhow, bail, Result};
use burn::prelude::*;

use crate::domain::traits::ProbabilityModel;
use crate::ml::model::TextClassifierModel;

pub type InferBackend = burn::backend::NdArray;
pub type InferDevice  = burn::backend::ndarray::NdArrayDevice;

/// Loaded classifier ready for concurrent use from request handlers.
///
/// Forward passes are serialised through the mutex; the weights are
/// never mutated after load.
pub struct BurnClassifier {
    model:      Mutex<TextClassifierModel<InferBackend>>,
    vocab_size: usize,
    device:     InferDevice,
}

impl BurnClassifier {
    pub fn new(model: TextClassifierModel<InferBackend>, device: InferDevice) -> Self {
        let vocab_size = model.vocab_size;
        Self { model: Mutex::new(model), vocab_size, device }
    }
}

impl ProbabilityModel for BurnClassifier {
    fn infer(&self, padded: &[u32]) -> Result<f32> {
        if padded.is_empty() {
            bail!("Cannot run the model on an empty sequence");
        }
        // Out-of-range ids would panic inside the embedding lookup
        if let Some(&id) = padded.iter().find(|&&id| id as usize >= self.vocab_size) {
            bail!("Token id {id} is outside the model vocabulary (size {})", self.vocab_size);
        }

        let input_flat: Vec<i32> = padded.iter().map(|&x| x as i32).collect();
        let input_tensor = Tensor::<InferBackend, 1, Int>::from_ints(
            input_flat.as_slice(), &self.device,
        ).reshape([1, padded.len()]);

        // Weights are read-only: a poisoned lock still guards a valid model
        let output = {
            let model = self.model.lock().unwrap_or_else(PoisonError::into_inner);
            model.forward(input_tensor)
        };

        let probs: Vec<f32> = output.into_data().to_vec::<f32>()
            .map_err(|e| anyhow!("Cannot read model output: {e:?}"))?;

        let probability = probs.first().copied()
            .ok_or_else(|| anyhow!("Model produced an empty output"))?;

        tracing::debug!("Forward pass: p={:.4}", probability);
        Ok(probability)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::model::TextClassifierConfig;

    fn classifier() -> BurnClassifier {
        let device = InferDevice::default();
        let model = TextClassifierConfig::new(16, 8, 4).init::<InferBackend>(&device);
        BurnClassifier::new(model, device)
    }

    #[test]
    fn test_infer_returns_probability() {
        let clf = classifier();
        let mut padded = vec![0u32; 700];
        padded[0] = 7;
        padded[1] = 5;

        let p = clf.infer(&padded).unwrap();
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_all_zero_input_is_deterministic() {
        let clf = classifier();
        let zeros = vec![0u32; 700];
        assert_eq!(clf.infer(&zeros).unwrap(), clf.infer(&zeros).unwrap());
    }

    #[test]
    fn test_out_of_vocab_id_is_an_error() {
        let clf = classifier();
        let err = clf.infer(&[1, 2, 16]).unwrap_err();
        assert!(err.to_string().contains("outside the model vocabulary"));
    }

    #[test]
    fn test_recovers_after_a_panic_while_locked() {
        let clf = classifier();
        let zeros = vec![0u32; 700];
        let before = clf.infer(&zeros).unwrap();

        std::thread::scope(|s| {
            let crashed = s.spawn(|| {
                let _guard = clf.model.lock().unwrap();
                panic!("forward pass blew up");
            }).join();
            assert!(crashed.is_err());
        });
        assert!(clf.model.is_poisoned());

        assert_eq!(clf.infer(&zeros).unwrap(), before);
    }

    #[test]
    fn test_empty_sequence_is_an_error() {
        assert!(classifier().infer(&[]).is_err());
    }
}
