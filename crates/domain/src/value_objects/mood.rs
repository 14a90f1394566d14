//! Companion mood and the voice emotion it maps to
//!
//! Mood is never stored independently: it is derived from [`Trust`] through a
//! single threshold table (80 / 60 / 40 / 20). The same table yields both the
//! one-word mood label and the phrase used in narration prompts, so the two
//! can never disagree about which bucket the companion is in.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::trust::Trust;

/// Companion's disposition toward the player, derived from trust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// Trust 80 and above
    Trusting,
    /// Trust 60-79
    Friendly,
    /// Trust 40-59
    #[default]
    Neutral,
    /// Trust 20-39
    Suspicious,
    /// Trust below 20
    Distrustful,
}

impl Mood {
    /// All moods from warmest to coldest
    pub fn all() -> &'static [Mood] {
        &[
            Mood::Trusting,
            Mood::Friendly,
            Mood::Neutral,
            Mood::Suspicious,
            Mood::Distrustful,
        ]
    }

    /// The canonical trust threshold function.
    pub fn from_trust(trust: Trust) -> Self {
        match trust.value() {
            t if t >= 80 => Mood::Trusting,
            t if t >= 60 => Mood::Friendly,
            t if t >= 40 => Mood::Neutral,
            t if t >= 20 => Mood::Suspicious,
            _ => Mood::Distrustful,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Trusting => "trusting",
            Mood::Friendly => "friendly",
            Mood::Neutral => "neutral",
            Mood::Suspicious => "suspicious",
            Mood::Distrustful => "distrustful",
        }
    }

    /// How the companion feels, phrased for a narration prompt
    /// ("You are {description} toward the player").
    pub fn description(&self) -> &'static str {
        match self {
            Mood::Trusting => "very trusting and friendly",
            Mood::Friendly => "generally trusting",
            Mood::Neutral => "neutral",
            Mood::Suspicious => "somewhat suspicious",
            Mood::Distrustful => "distrustful and guarded",
        }
    }

    /// Emotion requested from the voice synthesizer.
    pub fn emotion(&self) -> VoiceEmotion {
        match self {
            Mood::Trusting | Mood::Friendly => VoiceEmotion::Happy,
            Mood::Neutral => VoiceEmotion::Neutral,
            Mood::Suspicious => VoiceEmotion::Serious,
            Mood::Distrustful => VoiceEmotion::Angry,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trusting" => Ok(Mood::Trusting),
            "friendly" => Ok(Mood::Friendly),
            "neutral" => Ok(Mood::Neutral),
            "suspicious" => Ok(Mood::Suspicious),
            "distrustful" => Ok(Mood::Distrustful),
            _ => Err(format!("Unknown mood: {}", s)),
        }
    }
}

/// Emotion vocabulary understood by the voice synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VoiceEmotion {
    Happy,
    #[default]
    Neutral,
    Serious,
    Angry,
}

impl VoiceEmotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceEmotion::Happy => "happy",
            VoiceEmotion::Neutral => "neutral",
            VoiceEmotion::Serious => "serious",
            VoiceEmotion::Angry => "angry",
        }
    }
}

impl fmt::Display for VoiceEmotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_bucket_trust() {
        let cases = [
            (100, Mood::Trusting),
            (80, Mood::Trusting),
            (79, Mood::Friendly),
            (60, Mood::Friendly),
            (59, Mood::Neutral),
            (40, Mood::Neutral),
            (39, Mood::Suspicious),
            (20, Mood::Suspicious),
            (19, Mood::Distrustful),
            (0, Mood::Distrustful),
        ];
        for (trust, expected) in cases {
            assert_eq!(Mood::from_trust(Trust::new(trust)), expected, "trust {trust}");
        }
    }

    #[test]
    fn description_follows_the_same_buckets() {
        assert_eq!(
            Mood::from_trust(Trust::new(85)).description(),
            "very trusting and friendly"
        );
        assert_eq!(
            Mood::from_trust(Trust::new(25)).description(),
            "somewhat suspicious"
        );
    }

    #[test]
    fn emotion_mapping() {
        assert_eq!(Mood::Trusting.emotion(), VoiceEmotion::Happy);
        assert_eq!(Mood::Friendly.emotion(), VoiceEmotion::Happy);
        assert_eq!(Mood::Neutral.emotion(), VoiceEmotion::Neutral);
        assert_eq!(Mood::Suspicious.emotion(), VoiceEmotion::Serious);
        assert_eq!(Mood::Distrustful.emotion(), VoiceEmotion::Angry);
    }

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("Suspicious".parse::<Mood>(), Ok(Mood::Suspicious));
        assert!("very".parse::<Mood>().is_err());
    }
}
