//! Companion reaction to a player's choice.

use std::sync::Arc;
use std::time::Duration;

use rpgmaestro_domain::{AgentState, CharacterProfile, Document, Trust};

use crate::infrastructure::ports::{ChatMessage, CollaboratorFailure, LlmPort, LlmRequest};

const REACTION_TEMPERATURE: f32 = 0.7;
const REACTION_MAX_TOKENS: u32 = 200;

/// What the companion knows when reacting.
pub struct ReactionContext<'a> {
    pub scene_description: &'a str,
    pub action: &'a str,
    pub historical_context: &'a [Document],
    /// Companion state after the choice was applied
    pub agent: &'a AgentState,
}

/// Produces the companion's short first-person reaction.
pub struct ReactToChoice {
    llm: Arc<dyn LlmPort>,
    profile: CharacterProfile,
    timeout: Duration,
}

impl ReactToChoice {
    pub fn new(llm: Arc<dyn LlmPort>, profile: CharacterProfile, timeout: Duration) -> Self {
        Self {
            llm,
            profile,
            timeout,
        }
    }

    /// Never fails: when the LLM is unusable the companion falls back to a
    /// canned line picked by trust.
    pub async fn execute(&self, context: &ReactionContext<'_>) -> String {
        match self.generate(context).await {
            Ok(text) => text,
            Err(failure) => {
                tracing::warn!(
                    error = %failure,
                    trust = context.agent.trust().value(),
                    "Companion reaction unavailable, using fallback line"
                );
                fallback_reaction(context.agent.trust()).to_string()
            }
        }
    }

    async fn generate(&self, context: &ReactionContext<'_>) -> Result<String, CollaboratorFailure> {
        let request = LlmRequest::new(vec![ChatMessage::user(build_prompt(&self.profile, context))])
            .with_system_prompt(format!(
                "You are {}, a {} companion in a medieval role-playing game. Always answer in character.",
                self.profile.name, self.profile.alignment
            ))
            .with_temperature(REACTION_TEMPERATURE)
            .with_max_tokens(Some(REACTION_MAX_TOKENS));

        let response = tokio::time::timeout(self.timeout, self.llm.generate(request))
            .await
            .map_err(|_| CollaboratorFailure::TimedOut)??;

        tracing::debug!(finish_reason = ?response.finish_reason, "Companion reaction generated");
        Ok(response.content)
    }
}

/// Canned reaction used whenever the LLM cannot answer.
pub fn fallback_reaction(trust: Trust) -> &'static str {
    match trust.value() {
        t if t >= 60 => "I think that's a wise choice. Let us proceed carefully.",
        t if t >= 30 => "Very well. I shall follow your lead, though I have my reservations.",
        _ => "I question your judgment, but I will accompany you nonetheless.",
    }
}

fn build_prompt(profile: &CharacterProfile, context: &ReactionContext<'_>) -> String {
    let historical_facts = context
        .historical_context
        .iter()
        .map(|doc| format!("- {}", doc.text()))
        .collect::<Vec<_>>()
        .join("\n");

    let recent_actions = if context.agent.recent_actions().next().is_none() {
        "- This is your first interaction with the player.".to_string()
    } else {
        context
            .agent
            .recent_actions()
            .map(|action| format!("- {action}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "You are {name}, a {alignment} character in a medieval RPG set in 13th century England.

Your background: {background}

Current scene: {scene}

The player has just chosen to: {action}

Historical context (use these facts in your response):
{historical_facts}

Recent player actions:
{recent_actions}

Your current relationship with the player: You are {mood} toward the player.

Respond as {name}, providing your reaction to the player's choice. Your response should be in first person, show your personality, and incorporate the historical context. Keep your response to 2-3 sentences.",
        name = profile.name,
        alignment = profile.alignment,
        background = profile.background,
        scene = context.scene_description,
        action = context.action,
        mood = context.agent.mood().description(),
    )
}
