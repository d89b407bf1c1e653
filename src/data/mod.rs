// ============================================================
// Layer 4 — Preprocessing Adapter
// ============================================================
// Turns raw request text into exactly what the model was
// trained on:
//
//   "slot gacor"
//       │
//       ▼
//   Tokenizer            → [7, 5]
//       │
//       ▼
//   SequencePreprocessor → [7, 5, 0, 0, ..., 0]  (700 ids)
//
// Both steps are pure functions of (text, tokenizer state).

/// Keras `Tokenizer` word-index semantics
pub mod keras_tokenizer;

/// Fixed-length pad / truncate
pub mod sequence;
