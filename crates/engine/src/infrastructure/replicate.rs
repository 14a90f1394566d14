//! Replicate client for scene illustrations.
//!
//! Creates a prediction, then polls it until Replicate reports a terminal
//! status. The first output URL is the illustration.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::sleep;

use crate::infrastructure::ports::{ImageGenError, ImageGenPort, ImageRequest, ImageResult};

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
const DEFAULT_MAX_POLLS: u32 = 120; // 2 minutes with 1 second intervals

/// Client for Replicate's predictions API
#[derive(Clone)]
pub struct ReplicateClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
    model_version: String,
    poll_interval: Duration,
    max_polls: u32,
}

impl ReplicateClient {
    /// Without an API token the client is still usable, but every request
    /// fails fast with [`ImageGenError::Unavailable`].
    pub fn new(
        base_url: &str,
        api_token: Option<String>,
        model_version: &str,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
            model_version: model_version.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_polls: DEFAULT_MAX_POLLS,
        }
    }

    pub fn with_polling(mut self, interval: Duration, max_polls: u32) -> Self {
        self.poll_interval = interval;
        self.max_polls = max_polls;
        self
    }

    async fn create_prediction(
        &self,
        token: &str,
        prompt: &str,
    ) -> Result<Prediction, ImageGenError> {
        let body = serde_json::json!({
            "version": self.model_version,
            "input": {
                "model": "dev",
                "go_fast": false,
                "lora_scale": 1,
                "megapixels": "1",
                "num_outputs": 1,
                "aspect_ratio": "1:1",
                "output_format": "webp",
                "guidance_scale": 3,
                "output_quality": 80,
                "prompt_strength": 0.8,
                "extra_lora_scale": 1,
                "num_inference_steps": 28,
                "prompt": prompt
            }
        });

        let response = self
            .client
            .post(format!("{}/v1/predictions", self.base_url))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ImageGenError::GenerationFailed(e.to_string()))?;

        Self::read_prediction(response).await
    }

    async fn get_prediction(&self, token: &str, id: &str) -> Result<Prediction, ImageGenError> {
        let response = self
            .client
            .get(format!("{}/v1/predictions/{}", self.base_url, id))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ImageGenError::GenerationFailed(e.to_string()))?;

        Self::read_prediction(response).await
    }

    async fn read_prediction(response: reqwest::Response) -> Result<Prediction, ImageGenError> {
        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ImageGenError::GenerationFailed(format!("{status}: {text}")));
        }

        response
            .json()
            .await
            .map_err(|e| ImageGenError::InvalidResponse(e.to_string()))
    }

    async fn wait_for_completion(
        &self,
        token: &str,
        mut prediction: Prediction,
    ) -> Result<String, ImageGenError> {
        for _ in 0..self.max_polls {
            match prediction.status.as_str() {
                "succeeded" => {
                    return first_output_url(&prediction.output).ok_or_else(|| {
                        ImageGenError::InvalidResponse("No image URL in output".to_string())
                    });
                }
                "failed" | "canceled" => {
                    return Err(ImageGenError::GenerationFailed(
                        prediction
                            .error
                            .map(|e| e.as_str().map(str::to_string).unwrap_or_else(|| e.to_string()))
                            .unwrap_or_else(|| format!("prediction {}", prediction.status)),
                    ));
                }
                _ => {}
            }

            sleep(self.poll_interval).await;
            prediction = self.get_prediction(token, &prediction.id).await?;
        }

        Err(ImageGenError::TimedOut)
    }
}

#[async_trait]
impl ImageGenPort for ReplicateClient {
    async fn generate(&self, request: ImageRequest) -> Result<ImageResult, ImageGenError> {
        let Some(token) = self.api_token.as_deref() else {
            return Err(ImageGenError::Unavailable);
        };

        let prediction = self.create_prediction(token, &request.prompt).await?;
        tracing::debug!(prediction_id = %prediction.id, "Replicate prediction created");

        let url = self.wait_for_completion(token, prediction).await?;
        Ok(ImageResult { url })
    }
}

/// Replicate returns either a single URL or a list of URLs.
fn first_output_url(output: &Option<serde_json::Value>) -> Option<String> {
    match output.as_ref()? {
        serde_json::Value::String(url) => Some(url.clone()),
        serde_json::Value::Array(items) => items
            .iter()
            .find_map(|item| item.as_str().map(str::to_string)),
        _ => None,
    }
}

// =============================================================================
// Replicate API types
// =============================================================================

#[derive(Debug, Deserialize)]
struct Prediction {
    id: String,
    status: String,
    #[serde(default)]
    output: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Path,
        routing::{get, post},
        Json, Router,
    };
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client(base_url: &str, token: Option<&str>) -> ReplicateClient {
        ReplicateClient::new(
            base_url,
            token.map(str::to_string),
            "test-version",
            Duration::from_secs(5),
        )
        .with_polling(Duration::from_millis(5), 10)
    }

    fn request() -> ImageRequest {
        ImageRequest {
            prompt: "Medieval scene: a village at dusk".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_token_is_unavailable() {
        let result = client("http://127.0.0.1:9", None).generate(request()).await;
        assert!(matches!(result, Err(ImageGenError::Unavailable)));
    }

    #[tokio::test]
    async fn polls_until_prediction_succeeds() {
        let polls = Arc::new(AtomicU32::new(0));
        let polls_in_handler = polls.clone();

        let router = Router::new()
            .route(
                "/v1/predictions",
                post(|Json(body): Json<serde_json::Value>| async move {
                    assert_eq!(body["version"], "test-version");
                    Json(serde_json::json!({"id": "p1", "status": "starting"}))
                }),
            )
            .route(
                "/v1/predictions/{id}",
                get(move |Path(id): Path<String>| {
                    let polls = polls_in_handler.clone();
                    async move {
                        assert_eq!(id, "p1");
                        if polls.fetch_add(1, Ordering::SeqCst) < 2 {
                            Json(serde_json::json!({"id": "p1", "status": "processing"}))
                        } else {
                            Json(serde_json::json!({
                                "id": "p1",
                                "status": "succeeded",
                                "output": ["https://replicate.delivery/scene.webp"]
                            }))
                        }
                    }
                }),
            );
        let base_url = serve(router).await;

        let result = client(&base_url, Some("r8_token"))
            .generate(request())
            .await
            .unwrap();

        assert_eq!(result.url, "https://replicate.delivery/scene.webp");
        assert_eq!(polls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn failed_prediction_reports_error() {
        let router = Router::new().route(
            "/v1/predictions",
            post(|| async {
                Json(serde_json::json!({
                    "id": "p2",
                    "status": "failed",
                    "error": "NSFW content detected"
                }))
            }),
        );
        let base_url = serve(router).await;

        let result = client(&base_url, Some("r8_token")).generate(request()).await;

        assert!(
            matches!(result, Err(ImageGenError::GenerationFailed(msg)) if msg.contains("NSFW"))
        );
    }

    #[tokio::test]
    async fn gives_up_after_max_polls() {
        let router = Router::new()
            .route(
                "/v1/predictions",
                post(|| async { Json(serde_json::json!({"id": "p3", "status": "starting"})) }),
            )
            .route(
                "/v1/predictions/{id}",
                get(|| async { Json(serde_json::json!({"id": "p3", "status": "processing"})) }),
            );
        let base_url = serve(router).await;

        let result = client(&base_url, Some("r8_token")).generate(request()).await;

        assert!(matches!(result, Err(ImageGenError::TimedOut)));
    }

    #[test]
    fn output_may_be_string_or_list() {
        assert_eq!(
            first_output_url(&Some(serde_json::json!("https://a/1.webp"))),
            Some("https://a/1.webp".to_string())
        );
        assert_eq!(
            first_output_url(&Some(serde_json::json!(["https://a/2.webp"]))),
            Some("https://a/2.webp".to_string())
        );
        assert_eq!(first_output_url(&Some(serde_json::json!({"url": 1}))), None);
        assert_eq!(first_output_url(&None), None);
    }
}
