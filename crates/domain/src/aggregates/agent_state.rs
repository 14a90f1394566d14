//! AgentState aggregate - the companion's trust, mood and short memory.

use std::collections::VecDeque;

use serde::Serialize;

use crate::value_objects::{ChoiceImpact, Mood, Trust};

/// Number of most recent player actions the companion remembers.
pub const RECENT_ACTIONS_CAPACITY: usize = 5;

/// Companion state for one session.
///
/// `mood` is recomputed whenever trust changes, so it always agrees with
/// [`Mood::from_trust`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentState {
    trust: Trust,
    recent_actions: VecDeque<String>,
    mood: Mood,
}

impl Default for AgentState {
    fn default() -> Self {
        Self::with_trust(Trust::default())
    }
}

impl AgentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trust(trust: Trust) -> Self {
        Self {
            trust,
            recent_actions: VecDeque::with_capacity(RECENT_ACTIONS_CAPACITY + 1),
            mood: Mood::from_trust(trust),
        }
    }

    pub fn trust(&self) -> Trust {
        self.trust
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Remembered actions, oldest first.
    pub fn recent_actions(&self) -> impl ExactSizeIterator<Item = &str> {
        self.recent_actions.iter().map(String::as_str)
    }

    /// Apply the trust delta of a choice and remember the action text.
    ///
    /// Choices without an impact leave the companion untouched.
    pub fn record_choice(&mut self, impact: Option<&ChoiceImpact>, action: &str) {
        let Some(impact) = impact else {
            return;
        };

        self.trust = self.trust.adjusted(impact.trust_delta);
        self.mood = Mood::from_trust(self.trust);

        self.recent_actions.push_back(action.to_string());
        while self.recent_actions.len() > RECENT_ACTIONS_CAPACITY {
            self.recent_actions.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impact(trust_delta: i32) -> ChoiceImpact {
        ChoiceImpact::new(0, 0, trust_delta)
    }

    #[test]
    fn starts_neutral_at_fifty() {
        let agent = AgentState::new();
        assert_eq!(agent.trust().value(), 50);
        assert_eq!(agent.mood(), Mood::Neutral);
        assert_eq!(agent.recent_actions().len(), 0);
    }

    #[test]
    fn keeps_only_five_most_recent_actions() {
        let mut agent = AgentState::new();
        for i in 1..=6 {
            agent.record_choice(Some(&impact(0)), &format!("action {i}"));
        }
        let actions: Vec<&str> = agent.recent_actions().collect();
        assert_eq!(
            actions,
            vec!["action 2", "action 3", "action 4", "action 5", "action 6"]
        );
    }

    #[test]
    fn mood_tracks_trust() {
        let mut agent = AgentState::new();
        agent.record_choice(Some(&impact(35)), "helped a widow");
        assert_eq!(agent.trust().value(), 85);
        assert_eq!(agent.mood(), Mood::Trusting);

        agent.record_choice(Some(&impact(-200)), "burned the mill");
        assert_eq!(agent.trust().value(), 0);
        assert_eq!(agent.mood(), Mood::Distrustful);
    }

    #[test]
    fn choice_without_impact_is_not_remembered() {
        let mut agent = AgentState::new();
        agent.record_choice(None, "wandered off");
        assert_eq!(agent, AgentState::new());
    }

    #[test]
    fn serializes_mood_label() {
        let value = serde_json::to_value(AgentState::new()).unwrap();
        assert_eq!(value["trust"], 50);
        assert_eq!(value["mood"], "neutral");
        assert!(value["recent_actions"].as_array().unwrap().is_empty());
    }
}
