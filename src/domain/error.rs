// ============================================================
// Layer 3 — Prediction Errors
// ============================================================
// Every failure a prediction can hit collapses into one of two
// kinds. The HTTP layer renders both as `{"error": "..."}`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    /// Startup could not load the model or tokenizer.
    #[error("Model atau tokenizer tidak berhasil dimuat.")]
    ArtifactsUnavailable,

    /// Tokenisation, padding or the forward pass failed.
    #[error("Terjadi kesalahan saat prediksi: {0:#}")]
    Processing(#[from] anyhow::Error),
}
