// ============================================================
// Layer 2 — Inference Service
// ============================================================
// Orchestrates one prediction:
//
//   Step 1: tokenize         (artifact: tokenizer)
//   Step 2: pad / truncate   (Layer 4 - data)
//   Step 3: forward pass     (artifact: model)
//   Step 4: threshold        (Layer 3 - domain)
//
// Absent artifacts and any failure in steps 1–3 surface as a
// PredictError; nothing is allowed to escape as a panic or raw
// error to the transport layer.

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};

use crate::data::sequence::{PadSide, SequencePreprocessor, MAX_LENGTH};
use crate::domain::{
    error::PredictError,
    prediction::{LabelSet, Prediction},
    traits::Artifacts,
};
use crate::infra::artifacts::{ArtifactLoader, ArtifactPaths};

// ─── Pipeline Configuration ──────────────────────────────────────────────────
// Everything needed to build the service. The CLI converts its
// arguments into this, so this layer never sees clap types.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub artifacts:  ArtifactPaths,
    pub max_length: usize,
    pub padding:    PadSide,
    pub truncating: PadSide,
    pub labels:     LabelSet,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            artifacts:  ArtifactPaths::default(),
            max_length: MAX_LENGTH,
            padding:    PadSide::Post,
            truncating: PadSide::Post,
            labels:     LabelSet::default(),
        }
    }
}

/// Outcome of `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readiness {
    pub artifacts_loaded: bool,
}

pub struct InferenceService {
    artifacts:    Option<Artifacts>,
    preprocessor: SequencePreprocessor,
    labels:       LabelSet,
}

impl InferenceService {
    pub fn new(
        artifacts:    Option<Artifacts>,
        preprocessor: SequencePreprocessor,
        labels:       LabelSet,
    ) -> Self {
        Self { artifacts, preprocessor, labels }
    }

    /// Load the artifacts named in `cfg` and build the service.
    /// Never fails: missing artifacts produce a degraded service.
    pub fn from_config(cfg: &PipelineConfig) -> Self {
        let artifacts = ArtifactLoader::new(cfg.artifacts.clone()).load();
        let preprocessor = SequencePreprocessor::new(cfg.max_length)
            .with_padding(cfg.padding)
            .with_truncating(cfg.truncating);

        tracing::info!(
            "Preprocessing: max_length={}, padding={:?}, truncating={:?}",
            cfg.max_length, cfg.padding, cfg.truncating,
        );

        Self::new(artifacts, preprocessor, cfg.labels.clone())
    }

    pub fn readiness(&self) -> Readiness {
        Readiness { artifacts_loaded: self.artifacts.is_some() }
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    fn artifacts(&self) -> Result<&Artifacts, PredictError> {
        self.artifacts.as_ref().ok_or(PredictError::ArtifactsUnavailable)
    }

    /// Text → fixed-length id sequence, exactly as at training time.
    pub fn prepare(&self, text: &str) -> Result<Vec<u32>, PredictError> {
        let ids = self.artifacts()?
            .tokenizer
            .tokenize(text)
            .context("Tokenisation failed")?;
        Ok(self.preprocessor.pad(&ids))
    }

    pub fn predict(&self, text: &str) -> Result<Prediction, PredictError> {
        let padded = self.prepare(text)?;

        let probability = self.artifacts()?
            .model
            .infer(&padded)
            .context("Model inference failed")?;

        if !probability.is_finite() {
            return Err(anyhow!("Model returned a non-finite probability ({probability})").into());
        }

        let prediction = Prediction::from_probability(probability);
        tracing::debug!(
            "Predicted '{}' (p={:.4}) for {} chars",
            self.labels.name(prediction.label), probability, text.chars().count(),
        );
        Ok(prediction)
    }
}
