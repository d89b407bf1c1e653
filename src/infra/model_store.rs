// ============================================================
// Layer 6 — Model Store
// ============================================================
// Restores the classifier from its artifact directory using
// Burn's CompactRecorder.
//
// Expected layout:
//   model/
//     model_config.json   ← TextClassifierConfig (architecture)
//     model.mpk.gz        ← weights (MessagePack + gzip)
//
// The config is read first: the module has to be rebuilt with
// the exact same shape before the weights can be loaded into it.
// CompactRecorder refuses records whose shape doesn't match.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};

use crate::ml::model::{TextClassifierConfig, TextClassifierModel};

/// Architecture file name inside the model directory.
pub const CONFIG_FILE: &str = "model_config.json";

/// Weights file stem; the recorder appends `.mpk.gz`.
pub const WEIGHTS_STEM: &str = "model";

pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Read the architecture config.
    pub fn load_config(&self) -> Result<TextClassifierConfig> {
        let path = self.dir.join(CONFIG_FILE);

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read model config from '{}'", path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Invalid model config in '{}'", path.display()))
    }

    /// Rebuild the module from its config, then load the weights into it.
    pub fn load_model<B: Backend>(&self, device: &B::Device) -> Result<TextClassifierModel<B>> {
        let cfg   = self.load_config()?;
        let model = cfg.init::<B>(device);
        let path  = self.dir.join(WEIGHTS_STEM);

        tracing::info!(
            "Loading model weights from '{}' (vocab_size={}, embedding_dim={})",
            path.display(), cfg.vocab_size, cfg.embedding_dim,
        );

        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| format!("Cannot load model weights '{}'", path.display()))?;

        Ok(model.load_record(record))
    }
}
