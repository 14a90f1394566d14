//! Choice scoring value objects.

use serde::{Deserialize, Serialize};

/// Relative weight of each scoring category in the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub alignment: f64,
    pub creativity: f64,
    pub strategy: f64,
    pub roleplay: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            alignment: 0.3,
            creativity: 0.2,
            strategy: 0.3,
            roleplay: 0.2,
        }
    }
}

impl ScoringWeights {
    /// Weighted sum of the four category scores, rounded to one decimal.
    pub fn total(&self, alignment: u8, creativity: u8, strategy: u8, roleplay: u8) -> f64 {
        let raw = f64::from(alignment) * self.alignment
            + f64::from(creativity) * self.creativity
            + f64::from(strategy) * self.strategy
            + f64::from(roleplay) * self.roleplay;
        (raw * 10.0).round() / 10.0
    }
}

/// Evaluation of a single player choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceScore {
    /// How well the choice fits the character's moral compass
    pub alignment: u8,
    /// How creative or unexpected the choice is
    pub creativity: u8,
    /// How strategically sound the choice is
    pub strategy: u8,
    /// How well the choice fits the character's persona
    pub roleplay: u8,
    /// Weighted total, one decimal
    pub total: f64,
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_weighted_and_rounded() {
        let weights = ScoringWeights::default();
        // 0.3*3 + 0.2*4 + 0.3*5 + 0.2*6 = 4.4
        assert_eq!(weights.total(3, 4, 5, 6), 4.4);
        // 0.3*9 + 0.2*9 + 0.3*9 + 0.2*9 = 9.0
        assert_eq!(weights.total(9, 9, 9, 9), 9.0);
        // 0.3*7 + 0.2*3 + 0.3*8 + 0.2*5 = 6.1
        assert_eq!(weights.total(7, 3, 8, 5), 6.1);
    }
}
