//! HTTP routes.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

use rpgmaestro_domain::{DomainError, SessionId};
use rpgmaestro_shared::{
    ActionRequest, ActionResponse, ErrorCode, ErrorResponse, ObjectivesResponse, SceneResponse,
    SessionResponse, WelcomeResponse,
};

use crate::app::App;
use crate::use_cases::player_action::{ActionError, ActionInput};
use crate::use_cases::scene::SceneError;
use crate::use_cases::scoring::{game_objectives, GAME_DESCRIPTION};
use crate::use_cases::session::{SessionError, SessionSnapshot};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(welcome))
        .route("/api/health", get(health))
        .route("/api/objectives", get(objectives))
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/{id}", get(get_session).delete(delete_session))
        .route("/api/scene/{id}", get(get_scene))
        .route("/api/action", post(process_action))
}

async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to RPG Maestro API".to_string(),
    })
}

async fn health() -> &'static str {
    "OK"
}

async fn objectives() -> Json<ObjectivesResponse> {
    Json(ObjectivesResponse {
        objectives: game_objectives(),
        description: GAME_DESCRIPTION.to_string(),
    })
}

// =============================================================================
// Sessions
// =============================================================================

async fn create_session(State(app): State<Arc<App>>) -> (StatusCode, Json<SessionResponse>) {
    let snapshot = app.use_cases.session.start.execute().await;
    (StatusCode::CREATED, Json(session_response(snapshot)))
}

async fn get_session(
    State(app): State<Arc<App>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<SessionResponse>, ApiError> {
    let id = session_path(id)?;
    let snapshot = app
        .use_cases
        .session
        .get
        .execute(SessionId::from_uuid(id))
        .await?;
    Ok(Json(session_response(snapshot)))
}

async fn delete_session(
    State(app): State<Arc<App>>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = session_path(id)?;
    app.use_cases
        .session
        .end
        .execute(SessionId::from_uuid(id))?;
    Ok(StatusCode::NO_CONTENT)
}

fn session_path(id: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, ApiError> {
    id.map(|Path(id)| id)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

fn session_response(snapshot: SessionSnapshot) -> SessionResponse {
    SessionResponse {
        session_id: snapshot.session_id.to_uuid(),
        player_state: snapshot.player,
        agent_state: snapshot.agent,
    }
}

// =============================================================================
// Gameplay
// =============================================================================

async fn get_scene(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<SceneResponse>, ApiError> {
    let view = app.use_cases.scene.view.execute(&id).await?;
    Ok(Json(SceneResponse {
        scene: view.scene,
        choices: view.choices,
        image_url: view.image_url,
        historical_context: view.historical_context,
    }))
}

async fn process_action(
    State(app): State<Arc<App>>,
    body: Result<Json<ActionRequest>, JsonRejection>,
) -> Result<Json<ActionResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let outcome = app
        .use_cases
        .player_action
        .process
        .execute(ActionInput {
            scene_id: request.scene_id,
            choice_index: request.choice_index,
            session_id: request.session_id.map(SessionId::from_uuid),
        })
        .await?;

    Ok(Json(ActionResponse {
        session_id: outcome.session_id.to_uuid(),
        agent_response: outcome.agent_response,
        audio_url: outcome.audio_url,
        next_scene_id: outcome.next_scene_id.as_str().to_string(),
        is_terminal: outcome.is_terminal,
        scoring: outcome.scoring,
        player_state: outcome.player,
        agent_state: outcome.agent,
    }))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InvalidChoice(String),
    SessionNotFound(String),
    BadRequest(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(ErrorCode::NotFound, msg)),
            ApiError::InvalidChoice(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new(ErrorCode::InvalidChoice, msg),
            ),
            ApiError::SessionNotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(ErrorCode::SessionNotFound, msg),
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(ErrorCode::BadRequest, msg),
            ),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(ErrorCode::Internal, "Internal error"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            DomainError::InvalidChoice { .. } => ApiError::InvalidChoice(e.to_string()),
            // only raised while loading content
            DomainError::Validation(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<SceneError> for ApiError {
    fn from(e: SceneError) -> Self {
        match e {
            SceneError::Domain(e) => e.into(),
        }
    }
}

impl From<ActionError> for ApiError {
    fn from(e: ActionError) -> Self {
        match e {
            ActionError::Domain(e) => e.into(),
            ActionError::SessionNotFound(_) => ApiError::SessionNotFound(e.to_string()),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::NotFound(_) => ApiError::SessionNotFound(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Collaborators, StoryContent};
    use crate::content::{sample_documents, sample_impacts, sample_story_graph};
    use crate::infrastructure::clock::SystemClock;
    use crate::infrastructure::ports::{
        FinishReason, ImageGenError, LlmResponse, MockImageGenPort, MockLlmPort, MockVoicePort,
        SpeechResult,
    };
    use crate::use_cases::narration::FALLBACK_IMAGE_URL;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use rpgmaestro_domain::CharacterProfile;
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    fn app() -> Arc<App> {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().returning(|_| {
            Ok(LlmResponse {
                content: "Lead on.".into(),
                finish_reason: FinishReason::Stop,
            })
        });
        let mut image_gen = MockImageGenPort::new();
        image_gen
            .expect_generate()
            .returning(|_| Err(ImageGenError::Unavailable));
        let mut voice = MockVoicePort::new();
        voice.expect_synthesize().returning(|_| {
            Ok(SpeechResult {
                url: "/static/audio/maya_feedfacecafebeef.mp3".into(),
            })
        });

        Arc::new(App::new(
            StoryContent {
                story: sample_story_graph().unwrap(),
                impacts: sample_impacts(),
                documents: sample_documents(),
            },
            Collaborators {
                llm: Arc::new(llm),
                image_gen: Arc::new(image_gen),
                voice: Arc::new(voice),
                timeout: Duration::from_secs(5),
            },
            CharacterProfile::default(),
            Arc::new(SystemClock::new()),
        ))
    }

    async fn send(app: Arc<App>, request: Request<Body>) -> (StatusCode, Value) {
        let response = routes().with_state(app).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn welcome_and_objectives() {
        let (status, body) = send(app(), get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Welcome to RPG Maestro API");

        let (status, body) = send(app(), get("/api/objectives")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["objectives"].as_array().unwrap().len(), 5);
        assert_eq!(body["description"], GAME_DESCRIPTION);
    }

    #[tokio::test]
    async fn scene_view_uses_placeholder_when_images_unavailable() {
        let (status, body) = send(app(), get("/api/scene/intro")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scene"]["scene_id"], "intro");
        assert_eq!(body["choices"].as_array().unwrap().len(), 4);
        assert_eq!(body["image_url"], FALLBACK_IMAGE_URL);
        assert!(body["historical_context"].as_array().unwrap().len() <= 2);
    }

    #[tokio::test]
    async fn unknown_scene_is_404_not_found() {
        let (status, body) = send(app(), get("/api/scene/nonexistent")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "Scene not found: nonexistent");
    }

    #[tokio::test]
    async fn action_without_session_starts_one() {
        let app = app();
        let (status, body) = send(
            app.clone(),
            post_json("/api/action", json!({"scene_id": "intro", "choice_index": 1})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["next_scene_id"], "church");
        assert_eq!(body["is_terminal"], false);
        assert_eq!(body["agent_response"], "Lead on.");
        assert_eq!(body["audio_url"], "/static/audio/maya_feedfacecafebeef.mp3");
        assert_eq!(body["agent_state"]["trust"], 55);
        assert_eq!(app.sessions.len(), 1);

        let session_id = body["session_id"].as_str().unwrap().to_string();
        let (status, body) = send(app, get(&format!("/api/sessions/{session_id}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["player_state"]["experience"], 10);
    }

    #[tokio::test]
    async fn invalid_choice_is_422() {
        let (status, body) = send(
            app(),
            post_json("/api/action", json!({"scene_id": "intro", "choice_index": 5})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "invalid_choice");
    }

    #[tokio::test]
    async fn unknown_session_is_404_session_not_found() {
        let (status, body) = send(
            app(),
            post_json(
                "/api/action",
                json!({
                    "scene_id": "intro",
                    "choice_index": 0,
                    "session_id": "6f1c1a8e-0000-4000-8000-000000000000"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "session_not_found");
    }

    #[tokio::test]
    async fn malformed_action_body_is_400() {
        let (status, body) = send(
            app(),
            post_json("/api/action", json!({"scene_id": "intro"})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn malformed_session_id_is_400_json() {
        let (status, body) = send(app(), get("/api/sessions/not-a-uuid")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));

        let delete = Request::builder()
            .method(Method::DELETE)
            .uri("/api/sessions/not-a-uuid")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(), delete).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn session_lifecycle() {
        let app = app();
        let create = Request::builder()
            .method(Method::POST)
            .uri("/api/sessions")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app.clone(), create).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["agent_state"]["mood"], "neutral");
        let session_id = body["session_id"].as_str().unwrap().to_string();

        let delete = |id: &str| {
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/sessions/{id}"))
                .body(Body::empty())
                .unwrap()
        };
        let (status, _) = send(app.clone(), delete(&session_id)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(app.clone(), delete(&session_id)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "session_not_found");

        let (status, _) = send(app, get(&format!("/api/sessions/{session_id}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
