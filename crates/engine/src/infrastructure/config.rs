//! Application configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use rpgmaestro_domain::CharacterProfile;

/// Default Replicate model used for scene illustrations.
pub const DEFAULT_REPLICATE_MODEL_VERSION: &str =
    "bcbb4661012269b7fc3e5effc65b82283452c795c8e3195e45ddd35672f0c4ec";

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,

    /// CORS allowed origins (comma-separated, or "*" for any)
    pub cors_allowed_origins: Vec<String>,

    /// Ollama API base URL (OpenAI-compatible)
    pub ollama_base_url: String,
    /// Model used for companion reactions
    pub ollama_model: String,

    pub replicate: ReplicateConfig,
    pub sesame: SesameConfig,

    /// Outer bound on any single collaborator call
    pub collaborator_timeout: Duration,
    /// Sessions idle longer than this are dropped; `None` keeps them forever
    pub session_idle_timeout: Option<Duration>,

    /// Optional JSON file replacing the built-in document set
    pub documents_path: Option<PathBuf>,
    /// Optional JSON file replacing the built-in story graph
    pub scenes_path: Option<PathBuf>,

    /// The companion who reacts to the player's choices
    pub companion: CharacterProfile,
}

/// Replicate image generation configuration
#[derive(Debug, Clone)]
pub struct ReplicateConfig {
    /// API token; without one every illustration falls back to a placeholder
    pub api_token: Option<String>,
    pub model_version: String,
    pub base_url: String,
}

/// Sesame speech synthesis configuration
#[derive(Debug, Clone)]
pub struct SesameConfig {
    /// API key; without one every line falls back to the canned audio file
    pub api_key: Option<String>,
    pub api_url: String,
    pub voice_id: String,
    /// Directory the synthesized audio is written to and served from
    pub audio_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let default_companion = CharacterProfile::default();

        Ok(Self {
            server_host: var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: var("SERVER_PORT")
                .or_else(|| var("PORT"))
                .unwrap_or_else(|| "8000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,

            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),

            ollama_base_url: var("OLLAMA_BASE_URL")
                .unwrap_or_else(|| "http://localhost:11434".to_string()),
            ollama_model: var("OLLAMA_MODEL").unwrap_or_else(|| "llama3.2".to_string()),

            replicate: ReplicateConfig {
                api_token: var("REPLICATE_API_TOKEN"),
                model_version: var("REPLICATE_MODEL_VERSION")
                    .unwrap_or_else(|| DEFAULT_REPLICATE_MODEL_VERSION.to_string()),
                base_url: var("REPLICATE_BASE_URL")
                    .unwrap_or_else(|| "https://api.replicate.com".to_string()),
            },

            sesame: SesameConfig {
                api_key: var("SESAME_API_KEY"),
                api_url: var("SESAME_API_URL")
                    .unwrap_or_else(|| "https://api.sesame.ai/v1/speech".to_string()),
                voice_id: var("SESAME_VOICE_ID").unwrap_or_else(|| "maya".to_string()),
                audio_dir: var("AUDIO_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("static/audio")),
            },

            collaborator_timeout: Duration::from_secs(
                var("COLLABORATOR_TIMEOUT_SECS")
                    .unwrap_or_else(|| "60".to_string())
                    .parse()
                    .context("COLLABORATOR_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            session_idle_timeout: match var("SESSION_IDLE_TIMEOUT_SECS")
                .unwrap_or_else(|| "3600".to_string())
                .parse::<u64>()
                .context("SESSION_IDLE_TIMEOUT_SECS must be a whole number of seconds")?
            {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },

            documents_path: var("DOCUMENTS_PATH").map(PathBuf::from),
            scenes_path: var("SCENES_PATH").map(PathBuf::from),

            companion: CharacterProfile::new(
                var("COMPANION_NAME").unwrap_or(default_companion.name),
                var("COMPANION_ALIGNMENT").unwrap_or(default_companion.alignment),
                var("COMPANION_BACKGROUND").unwrap_or(default_companion.background),
            ),
        })
    }
}
