//! Choice scoring and game objectives.
//!
//! Scores are a deterministic stand-in for a model-based judge: every
//! category is derived from a SHA-256 digest of `"{scene_id}_{choice_index}"`,
//! so the same choice always earns the same score.

use sha2::{Digest, Sha256};

use rpgmaestro_domain::{ChoiceScore, PlayerState, ScoringWeights};

const MIN_CATEGORY_SCORE: u8 = 3;
const CATEGORY_SPAN: u32 = 7;

/// Shown to the player before the game starts.
pub const GAME_OBJECTIVES: [&str; 5] = [
    "Navigate the medieval world while making choices that align with your character's moral compass",
    "Build relationships with NPCs to gain allies and information",
    "Discover the truth behind the mysterious events in the kingdom",
    "Develop your character's skills and abilities through your choices",
    "Balance your character's alignment between good/evil and lawful/chaotic",
];

pub const GAME_DESCRIPTION: &str = "Welcome to the medieval fantasy RPG! Your choices will shape your character's alignment, skills, and the story's outcome. Make decisions wisely as they will affect your relationships with NPCs and your ability to navigate the challenges ahead.";

pub fn game_objectives() -> Vec<String> {
    GAME_OBJECTIVES.iter().map(|o| o.to_string()).collect()
}

/// Scores player choices.
pub struct ScoreChoice {
    weights: ScoringWeights,
}

impl Default for ScoreChoice {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

impl ScoreChoice {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// The player state does not influence the score yet; it is taken so a
    /// state-aware judge can replace the hash without changing callers.
    pub fn execute(&self, scene_id: &str, choice_index: usize, _player: &PlayerState) -> ChoiceScore {
        let digest = Sha256::digest(format!("{scene_id}_{choice_index}").as_bytes());

        // H >> 8n drops the n last bytes of the big-endian digest
        let alignment = category_score(&digest);
        let creativity = category_score(&digest[..digest.len() - 1]);
        let strategy = category_score(&digest[..digest.len() - 2]);
        let roleplay = category_score(&digest[..digest.len() - 3]);

        let total = self.weights.total(alignment, creativity, strategy, roleplay);
        let feedback = feedback(choice_index, alignment, creativity, strategy, roleplay);

        ChoiceScore {
            alignment,
            creativity,
            strategy,
            roleplay,
            total,
            feedback,
        }
    }
}

/// `3 + (big-endian integer of bytes) mod 7`
fn category_score(bytes: &[u8]) -> u8 {
    let remainder = bytes
        .iter()
        .fold(0u32, |acc, byte| (acc * 256 + u32::from(*byte)) % CATEGORY_SPAN);
    // remainder < 7
    MIN_CATEGORY_SCORE + remainder as u8
}

fn feedback(choice_index: usize, alignment: u8, creativity: u8, strategy: u8, roleplay: u8) -> String {
    match choice_index % 4 {
        0 => format!(
            "Your choice to approach the village elder shows {alignment}/10 alignment with your character's values. It's a {creativity}/10 for creativity and {strategy}/10 for strategy. Your roleplay score is {roleplay}/10."
        ),
        1 => format!(
            "Seeking sanctuary at the church rates {alignment}/10 for alignment, {creativity}/10 for creativity, and {strategy}/10 for strategy. Your roleplay is rated {roleplay}/10."
        ),
        2 => format!(
            "Visiting the tavern to gather information scores {alignment}/10 for alignment with your character. It shows {creativity}/10 creativity and {strategy}/10 strategic thinking. Your roleplay is {roleplay}/10."
        ),
        _ => format!(
            "Choosing to camp in the woods rates {alignment}/10 for alignment, {creativity}/10 for creativity, and {strategy}/10 for strategy. Your roleplay scores {roleplay}/10."
        ),
    }
}
