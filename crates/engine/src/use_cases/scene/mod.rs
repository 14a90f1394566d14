//! Scene use cases.
//!
//! Rendering a scene combines the authored scene, the historical documents
//! relevant to it and a generated illustration.

use std::sync::Arc;

use rpgmaestro_domain::{Document, DomainError, Scene};

use crate::entities::{DocumentLibrary, RetrievalFilters, StoryGraph, DEFAULT_RETRIEVAL_LIMIT};
use crate::use_cases::narration::IllustrateScene;

/// Container for scene use cases.
pub struct SceneUseCases {
    pub view: Arc<ViewScene>,
}

impl SceneUseCases {
    pub fn new(view: Arc<ViewScene>) -> Self {
        Self { view }
    }
}

/// Everything the client needs to show a scene.
#[derive(Debug, Clone)]
pub struct SceneView {
    pub scene: Scene,
    pub choices: Vec<String>,
    pub image_url: String,
    pub historical_context: Vec<Document>,
}

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Builds the view of a single scene.
pub struct ViewScene {
    story: Arc<StoryGraph>,
    library: Arc<DocumentLibrary>,
    illustrate: Arc<IllustrateScene>,
}

impl ViewScene {
    pub fn new(
        story: Arc<StoryGraph>,
        library: Arc<DocumentLibrary>,
        illustrate: Arc<IllustrateScene>,
    ) -> Self {
        Self {
            story,
            library,
            illustrate,
        }
    }

    pub async fn execute(&self, scene_id: &str) -> Result<SceneView, SceneError> {
        let scene = self.story.get_scene(scene_id)?.clone();

        let filters = RetrievalFilters::new().with("region", scene.region());
        let historical_context =
            self.library
                .retrieve(scene.retrieval_query(), DEFAULT_RETRIEVAL_LIMIT, &filters);

        tracing::debug!(
            scene_id = %scene.id(),
            documents = historical_context.len(),
            "Retrieved historical context for scene"
        );

        let image_url = self
            .illustrate
            .execute(
                scene.description(),
                historical_context.first().map(Document::text),
            )
            .await;

        Ok(SceneView {
            choices: scene.choices().to_vec(),
            scene,
            image_url,
            historical_context,
        })
    }
}
