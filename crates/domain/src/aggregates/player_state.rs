//! PlayerState aggregate - alignment, skills, experience and running score.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::value_objects::{Alignment, ChoiceImpact};

/// Experience awarded for every applied choice, impact or not.
pub const EXPERIENCE_PER_CHOICE: u32 = 10;

/// The player's progression within one session.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PlayerState {
    alignment: Alignment,
    skills: BTreeMap<String, u32>,
    experience: u32,
    score: f64,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn skills(&self) -> &BTreeMap<String, u32> {
        &self.skills
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    /// Apply the alignment part of a choice (if the choice has an impact)
    /// and award the per-choice experience.
    pub fn record_choice(&mut self, impact: Option<&ChoiceImpact>) {
        if let Some(impact) = impact {
            self.alignment = self
                .alignment
                .shifted(impact.law_chaos_delta, impact.good_evil_delta);
        }
        self.experience = self.experience.saturating_add(EXPERIENCE_PER_CHOICE);
    }

    /// Add a choice's score total to the running score. Negative totals are
    /// ignored.
    pub fn add_score(&mut self, total: f64) {
        if total.is_finite() && total > 0.0 {
            self.score = ((self.score + total) * 10.0).round() / 10.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_without_impact_only_awards_experience() {
        let mut player = PlayerState::new();
        player.record_choice(None);
        assert_eq!(player.experience(), 10);
        assert_eq!(player.alignment(), Alignment::default());
    }

    #[test]
    fn impact_shifts_alignment_with_clamping() {
        let mut player = PlayerState::new();
        let impact = ChoiceImpact::new(60, -70, 0);
        player.record_choice(Some(&impact));
        player.record_choice(Some(&impact));
        assert_eq!(player.alignment().law_chaos(), 100);
        assert_eq!(player.alignment().good_evil(), -100);
        assert_eq!(player.experience(), 20);
    }

    #[test]
    fn score_accumulates_to_one_decimal() {
        let mut player = PlayerState::new();
        player.add_score(5.3);
        player.add_score(6.1);
        assert_eq!(player.score(), 11.4);
        player.add_score(f64::NAN);
        player.add_score(-3.0);
        assert_eq!(player.score(), 11.4);
    }

    #[test]
    fn serializes_for_the_client() {
        let player = PlayerState::new();
        let value = serde_json::to_value(&player).unwrap();
        assert_eq!(value["alignment"]["law_chaos"], 0);
        assert!(value["skills"].as_object().unwrap().is_empty());
        assert_eq!(value["experience"], 0);
    }
}
