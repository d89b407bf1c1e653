// ============================================================
// Layer 6 — Artifact Loader
// ============================================================
// Loads the model and tokenizer once at startup.
//
// A failure here is NOT fatal: it is logged and both artifacts
// are left absent. The server still starts and every prediction
// answers with the uniform error payload. No retry, no reload.

use anyhow::Result;
use std::path::PathBuf;

use crate::domain::traits::Artifacts;
use crate::infra::{model_store::ModelStore, tokenizer_store::TokenizerStore};
use crate::ml::classifier::{BurnClassifier, InferBackend, InferDevice};

/// Default model directory, relative to the working directory.
pub const DEFAULT_MODEL_DIR: &str = "model";

/// Default tokenizer file, relative to the working directory.
pub const DEFAULT_TOKENIZER_PATH: &str = "tokenizer.json";

/// Where the two artifacts live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model_dir: PathBuf,
    pub tokenizer: PathBuf,
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from(DEFAULT_MODEL_DIR),
            tokenizer: PathBuf::from(DEFAULT_TOKENIZER_PATH),
        }
    }
}

pub struct ArtifactLoader {
    paths: ArtifactPaths,
}

impl ArtifactLoader {
    pub fn new(paths: ArtifactPaths) -> Self {
        Self { paths }
    }

    /// Both artifacts, or `None` if either one could not be loaded.
    pub fn load(&self) -> Option<Artifacts> {
        match self.try_load() {
            Ok(artifacts) => {
                tracing::info!("Model and tokenizer loaded");
                Some(artifacts)
            }
            Err(e) => {
                tracing::error!("Error loading model or tokenizer: {e:#}");
                tracing::warn!("Serving in degraded mode: every prediction will return an error");
                None
            }
        }
    }

    fn try_load(&self) -> Result<Artifacts> {
        let device = InferDevice::default();
        let model = ModelStore::new(&self.paths.model_dir).load_model::<InferBackend>(&device)?;
        let tokenizer = TokenizerStore::new(&self.paths.tokenizer).load()?;

        Ok(Artifacts::new(tokenizer, Box::new(BurnClassifier::new(model, device))))
    }
}
