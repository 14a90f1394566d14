//! Voicing the companion's lines.

use std::sync::Arc;
use std::time::Duration;

use rpgmaestro_domain::Mood;

use crate::infrastructure::ports::{CollaboratorFailure, SpeechRequest, VoicePort};

/// Served when synthesis fails.
pub const FALLBACK_AUDIO_URL: &str = "/static/audio/fallback.mp3";

pub struct SpeakLine {
    voice: Arc<dyn VoicePort>,
    timeout: Duration,
}

impl SpeakLine {
    pub fn new(voice: Arc<dyn VoicePort>, timeout: Duration) -> Self {
        Self { voice, timeout }
    }

    /// Audio URL for `text` spoken in the emotion matching `mood`.
    pub async fn execute(&self, text: &str, mood: Mood) -> String {
        match self.synthesize(text, mood).await {
            Ok(url) => url,
            Err(failure) => {
                tracing::warn!(error = %failure, mood = %mood, "Speech unavailable, using fallback audio");
                FALLBACK_AUDIO_URL.to_string()
            }
        }
    }

    async fn synthesize(&self, text: &str, mood: Mood) -> Result<String, CollaboratorFailure> {
        let request = SpeechRequest {
            text: text.to_string(),
            emotion: mood.emotion(),
        };
        let result = tokio::time::timeout(self.timeout, self.voice.synthesize(request))
            .await
            .map_err(|_| CollaboratorFailure::TimedOut)??;
        Ok(result.url)
    }
}
