//! Applying a choice's consequences to player and companion state.

use std::sync::Arc;

use rpgmaestro_domain::{AgentState, PlayerState, SceneId};

use crate::entities::ImpactTable;

pub struct ApplyChoice {
    impacts: Arc<ImpactTable>,
}

impl ApplyChoice {
    pub fn new(impacts: Arc<ImpactTable>) -> Self {
        Self { impacts }
    }

    /// Returns updated copies; the inputs are never touched, so a caller
    /// that fails later simply drops the result.
    pub fn execute(
        &self,
        scene_id: &SceneId,
        choice_index: usize,
        action: &str,
        player: &PlayerState,
        agent: &AgentState,
    ) -> (PlayerState, AgentState) {
        let impact = self.impacts.lookup(scene_id, choice_index);
        if impact.is_none() {
            tracing::debug!(scene_id = %scene_id, choice_index, "No impact recorded for choice");
        }

        let mut player = player.clone();
        let mut agent = agent.clone();
        player.record_choice(impact);
        agent.record_choice(impact, action);
        (player, agent)
    }
}
