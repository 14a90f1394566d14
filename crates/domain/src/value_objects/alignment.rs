//! Two-axis moral alignment of the player.

use serde::{Deserialize, Serialize};

/// Player alignment on the law/chaos and good/evil axes.
///
/// Both axes are clamped to `[-100, 100]`: -100 is fully chaotic (or evil),
/// 100 fully lawful (or good).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Alignment {
    law_chaos: i32,
    good_evil: i32,
}

impl Alignment {
    pub const MIN: i32 = -100;
    pub const MAX: i32 = 100;

    pub fn new(law_chaos: i32, good_evil: i32) -> Self {
        Self {
            law_chaos: law_chaos.clamp(Self::MIN, Self::MAX),
            good_evil: good_evil.clamp(Self::MIN, Self::MAX),
        }
    }

    pub fn law_chaos(&self) -> i32 {
        self.law_chaos
    }

    pub fn good_evil(&self) -> i32 {
        self.good_evil
    }

    /// Add both deltas, clamping each axis into range.
    #[must_use]
    pub fn shifted(self, law_chaos_delta: i32, good_evil_delta: i32) -> Self {
        Self::new(
            self.law_chaos.saturating_add(law_chaos_delta),
            self.good_evil.saturating_add(good_evil_delta),
        )
    }

    /// Short D&D-style label, e.g. "Lawful Good" or "True Neutral".
    pub fn label(&self) -> String {
        let ethic = match self.law_chaos {
            v if v >= 34 => "Lawful",
            v if v <= -34 => "Chaotic",
            _ => "Neutral",
        };
        let moral = match self.good_evil {
            v if v >= 34 => "Good",
            v if v <= -34 => "Evil",
            _ => "Neutral",
        };
        if ethic == "Neutral" && moral == "Neutral" {
            "True Neutral".to_string()
        } else {
            format!("{} {}", ethic, moral)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_out_of_range_values() {
        let a = Alignment::new(250, -300);
        assert_eq!(a.law_chaos(), 100);
        assert_eq!(a.good_evil(), -100);
    }

    #[test]
    fn shifted_stays_in_bounds() {
        let mut a = Alignment::default();
        for _ in 0..30 {
            a = a.shifted(10, -10);
        }
        assert_eq!(a, Alignment::new(100, -100));
        assert_eq!(a.shifted(i32::MAX, i32::MIN), Alignment::new(100, -100));
    }

    #[test]
    fn labels() {
        assert_eq!(Alignment::default().label(), "True Neutral");
        assert_eq!(Alignment::new(50, 50).label(), "Lawful Good");
        assert_eq!(Alignment::new(-40, 0).label(), "Chaotic Neutral");
    }
}
