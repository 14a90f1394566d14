//! RPG Maestro Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rpgmaestro_engine::api;
use rpgmaestro_engine::app::{App, Collaborators, StoryContent};
use rpgmaestro_engine::content;
use rpgmaestro_engine::infrastructure::{
    clock::SystemClock, config::AppConfig, loader, ollama::OllamaClient,
    replicate::ReplicateClient, sesame::SesameClient, sesame::AUDIO_URL_PREFIX,
};
use rpgmaestro_engine::use_cases::session::ExpireIdleSessions;

/// Upper bound on the pause between idle-session sweeps.
const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be started from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rpgmaestro_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RPG Maestro Engine");

    let config = AppConfig::from_env().context("Invalid configuration")?;

    let story_content = load_content(&config)?;
    tracing::info!(
        scenes = story_content.story.scene_count(),
        documents = story_content.documents.len(),
        "Story content ready"
    );

    tokio::fs::create_dir_all(&config.sesame.audio_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create audio directory {}",
                config.sesame.audio_dir.display()
            )
        })?;

    // Create infrastructure clients
    let llm = Arc::new(OllamaClient::new(
        &config.ollama_base_url,
        &config.ollama_model,
        config.collaborator_timeout,
    ));
    if config.replicate.api_token.is_none() {
        tracing::warn!("REPLICATE_API_TOKEN not set, scene images will use a placeholder");
    }
    let image_gen = Arc::new(ReplicateClient::new(
        &config.replicate.base_url,
        config.replicate.api_token.clone(),
        &config.replicate.model_version,
        config.collaborator_timeout,
    ));
    if config.sesame.api_key.is_none() {
        tracing::warn!("SESAME_API_KEY not set, companion lines will use fallback audio");
    }
    let voice = Arc::new(SesameClient::new(
        &config.sesame.api_url,
        config.sesame.api_key.clone(),
        &config.sesame.voice_id,
        config.sesame.audio_dir.clone(),
        config.collaborator_timeout,
    ));

    // Create application
    let app = Arc::new(App::new(
        story_content,
        Collaborators {
            llm,
            image_gen,
            voice,
            timeout: config.collaborator_timeout,
        },
        config.companion.clone(),
        Arc::new(SystemClock::new()),
    ));

    // Spawn idle session sweeper
    if let Some(max_idle) = config.session_idle_timeout {
        let expire = ExpireIdleSessions::new(app.sessions.clone(), max_idle);
        let interval = max_idle.min(MAX_SWEEP_INTERVAL);
        tracing::info!(
            max_idle_secs = max_idle.as_secs(),
            "Idle session sweeper enabled"
        );
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                expire.execute();
            }
        });
    }

    let mut router = api::http::routes()
        .with_state(app)
        .nest_service(AUDIO_URL_PREFIX, ServeDir::new(&config.sesame.audio_dir))
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(&config.cors_allowed_origins) {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port)
        .parse()
        .context("Invalid SERVER_HOST / SERVER_PORT")?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_content(config: &AppConfig) -> anyhow::Result<StoryContent> {
    let documents = match &config.documents_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading documents");
            loader::load_documents(path)?
        }
        None => content::sample_documents(),
    };

    let (story, impacts) = match &config.scenes_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading story");
            loader::load_story(path)?
        }
        None => (
            content::sample_story_graph().context("Built-in story is invalid")?,
            content::sample_impacts(),
        ),
    };

    Ok(StoryContent {
        story,
        impacts,
        documents,
    })
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer(allowed_origins: &[String]) -> Option<CorsLayer> {
    if allowed_origins.is_empty() {
        return None;
    }

    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins.iter().any(|origin| origin == "*") {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
