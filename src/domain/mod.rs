// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing what the
// system works with: predictions, labels, and the two opaque
// artifacts.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O or network calls
//   - NO HTTP types

// Prediction result, labels and the decision threshold
pub mod prediction;

// Tokenizer / model abstractions and the loaded artifact pair
pub mod traits;

// Failure kinds surfaced to the transport layer
pub mod error;
