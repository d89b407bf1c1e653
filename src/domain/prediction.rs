// ============================================================
// Layer 3 — Prediction Domain Type
// ============================================================
// The outcome of classifying one text: the model's raw
// probability plus the discrete label derived from it.
//
// The label is a hard threshold on the probability:
//   probability >  0.5 → Positive ("Judi Online")
//   probability <= 0.5 → Negative ("Bukan Judi Online")
// No calibration, no hysteresis. Exactly 0.5 is Negative.

use serde::{Deserialize, Serialize};

/// Probabilities strictly above this value are labelled positive.
pub const DECISION_THRESHOLD: f32 = 0.5;

/// Default display name of the positive category.
pub const DEFAULT_POSITIVE_LABEL: &str = "Judi Online";

/// Default display name of the negative category.
pub const DEFAULT_NEGATIVE_LABEL: &str = "Bukan Judi Online";

/// One of the two fixed categories the classifier can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    pub fn from_probability(probability: f32) -> Self {
        if probability > DECISION_THRESHOLD {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

/// Human-readable names for the two categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    pub positive: String,
    pub negative: String,
}

impl LabelSet {
    pub fn new(positive: impl Into<String>, negative: impl Into<String>) -> Self {
        Self {
            positive: positive.into(),
            negative: negative.into(),
        }
    }

    pub fn name(&self, label: Label) -> &str {
        match label {
            Label::Positive => &self.positive,
            Label::Negative => &self.negative,
        }
    }
}

impl Default for LabelSet {
    fn default() -> Self {
        Self::new(DEFAULT_POSITIVE_LABEL, DEFAULT_NEGATIVE_LABEL)
    }
}

/// Probability and derived label for a single input text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Raw model output in [0, 1]
    pub probability: f32,
    pub label: Label,
}

impl Prediction {
    pub fn from_probability(probability: f32) -> Self {
        Self {
            probability,
            label: Label::from_probability(probability),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_above_threshold_is_positive() {
        assert_eq!(Label::from_probability(0.92), Label::Positive);
        assert_eq!(Label::from_probability(0.500_001), Label::Positive);
        assert_eq!(Label::from_probability(1.0), Label::Positive);
    }

    #[test]
    fn test_exact_threshold_is_negative() {
        assert_eq!(Label::from_probability(0.5), Label::Negative);
    }

    #[test]
    fn test_below_threshold_is_negative() {
        assert_eq!(Label::from_probability(0.0), Label::Negative);
        assert_eq!(Label::from_probability(0.4999), Label::Negative);
    }

    #[test]
    fn test_default_label_names() {
        let labels = LabelSet::default();
        assert_eq!(labels.name(Label::Positive), "Judi Online");
        assert_eq!(labels.name(Label::Negative), "Bukan Judi Online");
    }

    #[test]
    fn test_prediction_keeps_probability() {
        let p = Prediction::from_probability(0.92);
        assert_eq!(p.probability, 0.92);
        assert_eq!(p.label, Label::Positive);
    }
}
