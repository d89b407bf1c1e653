// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All Burn framework specific code lives here. No other layer
// builds tensors or touches modules directly.
//
//   model.rs      — the classifier module whose weights ship as
//                   the model artifact
//
//   classifier.rs — CPU runtime wrapping a loaded module behind
//                   the ProbabilityModel trait

/// Text classifier module and its config
pub mod model;

/// Forward-pass runtime used by the inference service
pub mod classifier;
