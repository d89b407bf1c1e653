// ============================================================
// Layer 1 — HTTP Wire Types
// ============================================================
// Request:   {"text": "..."}
// Success:   {"text": "...", "prediction_label": "...", "prediction_probability": 0.92}
// Failure:   {"error": "..."}
//
// Both outcomes are sent with HTTP 200; only the body tells them
// apart.

use serde::{Deserialize, Serialize};

use crate::domain::error::PredictError;
use crate::domain::prediction::{LabelSet, Prediction};

#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictResponse {
    Success {
        text:                   String,
        prediction_label:       String,
        prediction_probability: f32,
    },
    Error {
        error: String,
    },
}

impl PredictResponse {
    pub fn success(text: String, labels: &LabelSet, prediction: &Prediction) -> Self {
        PredictResponse::Success {
            text,
            prediction_label:       labels.name(prediction.label).to_string(),
            prediction_probability: prediction.probability,
        }
    }

    pub fn error(err: &PredictError) -> Self {
        PredictResponse::Error { error: err.to_string() }
    }

    pub fn from_outcome(
        text:    String,
        labels:  &LabelSet,
        outcome: Result<Prediction, PredictError>,
    ) -> Self {
        match outcome {
            Ok(prediction) => Self::success(text, labels, &prediction),
            Err(e) => {
                tracing::warn!("Prediction error: {e}");
                Self::error(&e)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status:           String,
    pub artifacts_loaded: bool,
}
