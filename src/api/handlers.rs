use std::sync::Arc;

use anyhow::anyhow;
use axum::{extract::State, Json};

use crate::api::{
    schema::{HealthResponse, PredictRequest, PredictResponse},
    AppState,
};
use crate::domain::error::PredictError;

/// `POST /predict`
///
/// The forward pass is CPU-bound, so it runs on the blocking pool.
/// A panic there is reported like any other processing failure.
pub async fn predict(
    State(service): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Json<PredictResponse> {
    let worker = Arc::clone(&service);
    let task = tokio::task::spawn_blocking(move || {
        let outcome = worker.predict(&request.text);
        (request.text, outcome)
    });

    let (text, outcome) = match task.await {
        Ok(done) => done,
        // Error bodies carry no text
        Err(e) => (String::new(), Err(PredictError::Processing(anyhow!("Inference task failed: {e}")))),
    };

    Json(PredictResponse::from_outcome(text, service.labels(), outcome))
}

/// `GET /health`
pub async fn health(State(service): State<AppState>) -> Json<HealthResponse> {
    let readiness = service.readiness();
    let status = if readiness.artifacts_loaded { "ok" } else { "degraded" };

    Json(HealthResponse {
        status:           status.to_string(),
        artifacts_loaded: readiness.artifacts_loaded,
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::router;
    use crate::application::inference_service::{
        tests::{degraded_service, service_with, StubModel},
        InferenceService,
    };
    use crate::domain::traits::ProbabilityModel;

    struct PanickingModel;

    impl ProbabilityModel for PanickingModel {
        fn infer(&self, _padded: &[u32]) -> anyhow::Result<f32> {
            panic!("index out of bounds in embedding lookup")
        }
    }

    fn app(service: InferenceService) -> Router {
        router(Arc::new(service))
    }

    async fn post_json(app: Router, body: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/predict")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes  = response.into_body().collect().await.unwrap().to_bytes();
        let value  = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_predict_success() {
        let (status, body) = post_json(
            app(service_with(StubModel::new(0.92))),
            r#"{"text": "slot gacor"}"#,
        ).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], "slot gacor");
        assert_eq!(body["prediction_label"], "Judi Online");
        let p = body["prediction_probability"].as_f64().unwrap();
        assert!((p - 0.92).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_long_text_is_echoed_unchanged() {
        let text = "slot gacor maxwin ".repeat(2000);
        let (_, body) = post_json(
            app(service_with(StubModel::new(0.99))),
            &json!({ "text": text }).to_string(),
        ).await;

        assert_eq!(body["text"], text.as_str());
    }

    #[tokio::test]
    async fn test_predict_negative_label() {
        let (_, body) = post_json(
            app(service_with(StubModel::new(0.12))),
            r#"{"text": "selamat pagi"}"#,
        ).await;

        assert_eq!(body["prediction_label"], "Bukan Judi Online");
    }

    #[tokio::test]
    async fn test_degraded_service_answers_error_with_200() {
        for text in ["slot gacor", "", "apa kabar"] {
            let body = json!({ "text": text }).to_string();
            let (status, body) = post_json(app(degraded_service()), &body).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({ "error": "Model atau tokenizer tidak berhasil dimuat." }));
        }
    }

    #[tokio::test]
    async fn test_panic_in_model_is_an_error_body() {
        let (status, body) = post_json(
            app(service_with(PanickingModel)),
            r#"{"text": "slot"}"#,
        ).await;

        assert_eq!(status, StatusCode::OK);
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("Terjadi kesalahan saat prediksi:"), "got {error}");
    }

    #[tokio::test]
    async fn test_missing_text_field_is_rejected() {
        let (status, _) = post_json(app(degraded_service()), r#"{"message": "slot"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_wrong_text_type_is_rejected() {
        let (status, _) = post_json(app(degraded_service()), r#"{"text": 42}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let (status, _) = post_json(app(degraded_service()), "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_reports_readiness() {
        let response = app(degraded_service())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "status": "degraded", "artifacts_loaded": false }));
    }
}
