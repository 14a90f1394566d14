//! Sesame speech client.
//!
//! Sesame answers with base64 audio which is written to the audio directory
//! and served back to the player under `/static/audio/`.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use rpgmaestro_domain::VoiceEmotion;

use crate::infrastructure::ports::{SpeechRequest, SpeechResult, VoiceError, VoicePort};

/// URL prefix the audio directory is mounted under.
pub const AUDIO_URL_PREFIX: &str = "/static/audio";

#[derive(Clone)]
pub struct SesameClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    voice_id: String,
    audio_dir: PathBuf,
}

impl SesameClient {
    /// Without an API key every request fails fast with
    /// [`VoiceError::Unavailable`].
    pub fn new(
        api_url: &str,
        api_key: Option<String>,
        voice_id: &str,
        audio_dir: impl Into<PathBuf>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_url: api_url.to_string(),
            api_key,
            voice_id: voice_id.to_string(),
            audio_dir: audio_dir.into(),
        }
    }

    /// Same text, voice and emotion always map to the same file. A line
    /// spoken with another emotion gets its own file.
    fn file_name(&self, text: &str, emotion: VoiceEmotion) -> String {
        let digest = Sha256::digest(text.as_bytes());
        format!(
            "{}_{}_{}.mp3",
            self.voice_id,
            emotion.as_str(),
            &hex::encode(digest)[..16]
        )
    }
}

#[async_trait]
impl VoicePort for SesameClient {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResult, VoiceError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(VoiceError::Unavailable);
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&SpeechBody {
                text: &request.text,
                voice_id: &self.voice_id,
                emotion: request.emotion.as_str(),
            })
            .send()
            .await
            .map_err(|e| VoiceError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(VoiceError::RequestFailed(format!("{status}: {text}")));
        }

        let body: SpeechResponse = response
            .json()
            .await
            .map_err(|e| VoiceError::InvalidResponse(e.to_string()))?;
        let audio = base64::engine::general_purpose::STANDARD
            .decode(body.audio.as_bytes())
            .map_err(|e| VoiceError::InvalidResponse(format!("audio is not base64: {e}")))?;

        let file_name = self.file_name(&request.text, request.emotion);
        tokio::fs::create_dir_all(&self.audio_dir)
            .await
            .map_err(|e| VoiceError::Storage(e.to_string()))?;
        tokio::fs::write(self.audio_dir.join(&file_name), audio)
            .await
            .map_err(|e| VoiceError::Storage(e.to_string()))?;

        tracing::debug!(file = %file_name, "Stored synthesized speech");
        Ok(SpeechResult {
            url: format!("{AUDIO_URL_PREFIX}/{file_name}"),
        })
    }
}

#[derive(Debug, Serialize)]
struct SpeechBody<'a> {
    text: &'a str,
    voice_id: &'a str,
    emotion: &'a str,
}

#[derive(Debug, Deserialize)]
struct SpeechResponse {
    audio: String,
}
