// ============================================================
// Layer 4 — Sequence Preprocessor (pad / truncate)
// ============================================================
// The model was trained on sequences of exactly MAX_LENGTH ids.
// Inference must reproduce the same normalisation bit-for-bit:
//
//   longer than MAX_LENGTH  → truncate
//   shorter than MAX_LENGTH → pad with PAD_ID
//
// The shipped artifacts use Post/Post:
//   [7, 5]            → [7, 5, 0, 0, ..., 0]   (700 long)
//   [t0, ..., t799]   → [t0, ..., t699]
//
// Pre is kept for artifacts produced with the other
// `pad_sequences` convention.

/// Sequence length the model expects.
pub const MAX_LENGTH: usize = 700;

/// Id used to fill padded positions.
pub const PAD_ID: u32 = 0;

/// Which end of a sequence padding or truncation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadSide {
    /// Add / drop at the start of the sequence
    Pre,
    /// Add / drop at the end of the sequence
    #[default]
    Post,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencePreprocessor {
    max_len:    usize,
    padding:    PadSide,
    truncating: PadSide,
}

impl SequencePreprocessor {
    /// Post-padding, post-truncation to `max_len`.
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len,
            padding:    PadSide::Post,
            truncating: PadSide::Post,
        }
    }

    pub fn with_padding(mut self, side: PadSide) -> Self {
        self.padding = side;
        self
    }

    pub fn with_truncating(mut self, side: PadSide) -> Self {
        self.truncating = side;
        self
    }

    /// Normalise `ids` to exactly `max_len` elements.
    pub fn pad(&self, ids: &[u32]) -> Vec<u32> {
        let kept = if ids.len() > self.max_len {
            match self.truncating {
                PadSide::Post => &ids[..self.max_len],
                PadSide::Pre  => &ids[ids.len() - self.max_len..],
            }
        } else {
            ids
        };

        let fill = self.max_len - kept.len();
        let mut out = Vec::with_capacity(self.max_len);
        match self.padding {
            PadSide::Post => {
                out.extend_from_slice(kept);
                out.resize(self.max_len, PAD_ID);
            }
            PadSide::Pre => {
                out.resize(fill, PAD_ID);
                out.extend_from_slice(kept);
            }
        }
        out
    }
}

impl Default for SequencePreprocessor {
    fn default() -> Self {
        Self::new(MAX_LENGTH)
    }
}
