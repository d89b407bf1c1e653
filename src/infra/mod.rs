// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches the filesystem:
//
//   model_store.rs     — rebuilds the classifier from its config
//                        and loads CompactRecorder weights
//
//   tokenizer_store.rs — loads the tokenizer artifact (Keras
//                        export or HuggingFace JSON)
//
//   artifacts.rs       — startup loader combining both; turns any
//                        failure into the "absent" state

/// Model config + weights loading
pub mod model_store;

/// Tokenizer loading and format detection
pub mod tokenizer_store;

/// One-shot startup loading of both artifacts
pub mod artifacts;
