//! Processing a player's choice end to end.

use std::sync::Arc;

use rpgmaestro_domain::{AgentState, ChoiceScore, DomainError, PlayerState, SceneId, SessionId};

use crate::entities::{DocumentLibrary, RetrievalFilters, StoryGraph, DEFAULT_RETRIEVAL_LIMIT};
use crate::stores::SessionStore;
use crate::use_cases::narration::{ReactToChoice, ReactionContext, SpeakLine};
use crate::use_cases::scoring::ScoreChoice;

use super::ApplyChoice;

/// A choice as submitted by the player.
#[derive(Debug, Clone)]
pub struct ActionInput {
    pub scene_id: String,
    /// Signed so that negative indices from clients surface as invalid choices.
    pub choice_index: i64,
    /// `None` starts a new session.
    pub session_id: Option<SessionId>,
}

#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub session_id: SessionId,
    pub agent_response: String,
    pub audio_url: String,
    pub next_scene_id: SceneId,
    pub is_terminal: bool,
    pub scoring: ChoiceScore,
    pub player: PlayerState,
    pub agent: AgentState,
}

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),
}

pub struct ProcessAction {
    story: Arc<StoryGraph>,
    library: Arc<DocumentLibrary>,
    sessions: Arc<SessionStore>,
    apply: Arc<ApplyChoice>,
    score: Arc<ScoreChoice>,
    react: Arc<ReactToChoice>,
    speak: Arc<SpeakLine>,
}

impl ProcessAction {
    pub fn new(
        story: Arc<StoryGraph>,
        library: Arc<DocumentLibrary>,
        sessions: Arc<SessionStore>,
        apply: Arc<ApplyChoice>,
        score: Arc<ScoreChoice>,
        react: Arc<ReactToChoice>,
        speak: Arc<SpeakLine>,
    ) -> Self {
        Self {
            story,
            library,
            sessions,
            apply,
            score,
            react,
            speak,
        }
    }

    /// Validation happens before any session is created or state touched.
    /// State is committed under the session lock, which is released before
    /// the companion and voice collaborators are called.
    pub async fn execute(&self, input: ActionInput) -> Result<ActionOutcome, ActionError> {
        let scene = self.story.get_scene(&input.scene_id)?;
        let choice_index = scene.choice_index(input.choice_index)?;
        let action = scene.choice(choice_index)?;
        let next_scene_id = self.story.resolve_next(scene, choice_index)?.clone();

        let session_id = match input.session_id {
            Some(id) if self.sessions.contains(id) => id,
            Some(id) => return Err(ActionError::SessionNotFound(id)),
            None => {
                let (id, _) = self.sessions.create();
                tracing::info!(session_id = %id, "Started session from first action");
                id
            }
        };

        let filters = RetrievalFilters::new().with("region", scene.region());
        let historical_context =
            self.library
                .retrieve(scene.retrieval_query(), DEFAULT_RETRIEVAL_LIMIT, &filters);

        // The session may be swept between lookup and lock; commit only to a live one.
        let (scoring, player, agent) = {
            let mut guard = self
                .sessions
                .lock(session_id)
                .await
                .ok_or(ActionError::SessionNotFound(session_id))?;
            let scoring = self
                .score
                .execute(scene.id().as_str(), choice_index, &guard.player);
            let (mut player, agent) =
                self.apply
                    .execute(scene.id(), choice_index, action, &guard.player, &guard.agent);
            player.add_score(scoring.total);
            guard.commit(player.clone(), agent.clone(), self.sessions.now());
            (scoring, player, agent)
        };

        tracing::info!(
            session_id = %session_id,
            scene_id = %scene.id(),
            choice_index,
            next_scene_id = %next_scene_id,
            trust = agent.trust().value(),
            "Applied player choice"
        );

        let agent_response = self
            .react
            .execute(&ReactionContext {
                scene_description: scene.description(),
                action,
                historical_context: &historical_context,
                agent: &agent,
            })
            .await;
        let audio_url = self.speak.execute(&agent_response, agent.mood()).await;

        Ok(ActionOutcome {
            session_id,
            agent_response,
            audio_url,
            is_terminal: self.story.is_terminal(&next_scene_id),
            next_scene_id,
            scoring,
            player,
            agent,
        })
    }
}
