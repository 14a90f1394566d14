//! Scene illustration.

use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::ports::{CollaboratorFailure, ImageGenPort, ImageRequest};

/// Shown when no illustration could be generated.
pub const FALLBACK_IMAGE_URL: &str = "https://placehold.co/600x400?text=Scene+Image+Unavailable";

pub struct IllustrateScene {
    image_gen: Arc<dyn ImageGenPort>,
    timeout: Duration,
}

impl IllustrateScene {
    pub fn new(image_gen: Arc<dyn ImageGenPort>, timeout: Duration) -> Self {
        Self { image_gen, timeout }
    }

    /// URL of an illustration for the scene, or the placeholder image.
    pub async fn execute(&self, scene_description: &str, historical_detail: Option<&str>) -> String {
        match self.generate(scene_description, historical_detail).await {
            Ok(url) => url,
            Err(failure) => {
                tracing::warn!(error = %failure, "Scene illustration unavailable, using placeholder");
                FALLBACK_IMAGE_URL.to_string()
            }
        }
    }

    async fn generate(
        &self,
        scene_description: &str,
        historical_detail: Option<&str>,
    ) -> Result<String, CollaboratorFailure> {
        let mut prompt = format!("Medieval scene: {scene_description}");
        if let Some(detail) = historical_detail.filter(|d| !d.is_empty()) {
            prompt.push_str(&format!(" Historical details: {detail}"));
        }

        let result = tokio::time::timeout(self.timeout, self.image_gen.generate(ImageRequest { prompt }))
            .await
            .map_err(|_| CollaboratorFailure::TimedOut)??;
        Ok(result.url)
    }
}
