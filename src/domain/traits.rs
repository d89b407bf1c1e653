// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two externally-produced artifacts are opaque to the
// rest of the system. All we rely on is:
//
//   tokenizer: text            → token ids
//   model:     padded token ids → probability
//
// The application layer only sees these traits, so the real
// tokenizer/model can be swapped for stubs in tests.

use anyhow::Result;

// ─── TextTokenizer ────────────────────────────────────────────────────────────
/// Maps raw text to vocabulary ids.
///
/// Implementations:
///   - KerasTokenizer         → Keras `Tokenizer.to_json()` export
///   - tokenizers::Tokenizer  → HuggingFace tokenizer JSON
pub trait TextTokenizer: Send + Sync {
    /// Out-of-vocabulary handling is the tokenizer's own policy.
    fn tokenize(&self, text: &str) -> Result<Vec<u32>>;
}

// ─── ProbabilityModel ─────────────────────────────────────────────────────────
/// A binary classifier over a fixed-length id sequence.
pub trait ProbabilityModel: Send + Sync {
    /// Forward pass on one padded sequence, returning P(positive).
    fn infer(&self, padded: &[u32]) -> Result<f32>;
}

/// The pair of artifacts loaded at startup, shared read-only by
/// every request for the lifetime of the process.
pub struct Artifacts {
    pub tokenizer: Box<dyn TextTokenizer>,
    pub model: Box<dyn ProbabilityModel>,
}

impl Artifacts {
    pub fn new(tokenizer: Box<dyn TextTokenizer>, model: Box<dyn ProbabilityModel>) -> Self {
        Self { tokenizer, model }
    }
}
