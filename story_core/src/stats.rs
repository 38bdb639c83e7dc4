//! Character stats tracked across a play session.

use serde::{Deserialize, Serialize};

/// The four stats shown on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Health,
    Qi,
    Attack,
    Defend,
}

impl StatKind {
    /// All stats, in display order.
    pub const ALL: [StatKind; 4] = [
        StatKind::Health,
        StatKind::Qi,
        StatKind::Attack,
        StatKind::Defend,
    ];

    /// Label used when a page does not rename the stat.
    pub fn default_label(self) -> &'static str {
        match self {
            StatKind::Health => "Health",
            StatKind::Qi => "Qi",
            StatKind::Attack => "Attack",
            StatKind::Defend => "Defend",
        }
    }
}

/// A value per stat. Used both for running totals and for per-choice deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatBlock {
    pub health: i32,
    pub qi: i32,
    pub attack: i32,
    pub defend: i32,
}

impl StatBlock {
    /// Create a block from the four values.
    pub fn new(health: i32, qi: i32, attack: i32, defend: i32) -> Self {
        Self {
            health,
            qi,
            attack,
            defend,
        }
    }

    /// Value for one stat.
    pub fn get(&self, kind: StatKind) -> i32 {
        match kind {
            StatKind::Health => self.health,
            StatKind::Qi => self.qi,
            StatKind::Attack => self.attack,
            StatKind::Defend => self.defend,
        }
    }

    /// Add `delta` to every stat, saturating at the `i32` range.
    pub fn apply(&mut self, delta: &StatBlock) {
        self.health = self.health.saturating_add(delta.health);
        self.qi = self.qi.saturating_add(delta.qi);
        self.attack = self.attack.saturating_add(delta.attack);
        self.defend = self.defend.saturating_add(delta.defend);
    }

    /// Whether every stat is zero.
    pub fn is_zero(&self) -> bool {
        *self == StatBlock::default()
    }
}

/// Per-node names for the stat displays.
///
/// Pages may rename a stat (e.g. once the hero learns what Qi really is),
/// so labels travel with the node rather than with the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatLabels {
    pub health: String,
    pub qi: String,
    pub attack: String,
    pub defend: String,
}

impl Default for StatLabels {
    fn default() -> Self {
        Self {
            health: StatKind::Health.default_label().to_string(),
            qi: StatKind::Qi.default_label().to_string(),
            attack: StatKind::Attack.default_label().to_string(),
            defend: StatKind::Defend.default_label().to_string(),
        }
    }
}

impl StatLabels {
    /// Label for one stat.
    pub fn get(&self, kind: StatKind) -> &str {
        match kind {
            StatKind::Health => &self.health,
            StatKind::Qi => &self.qi,
            StatKind::Attack => &self.attack,
            StatKind::Defend => &self.defend,
        }
    }

    /// Text for a stat display, `"{label}:{value}"`.
    pub fn display(&self, kind: StatKind, value: i32) -> String {
        format!("{}:{}", self.get(kind), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_delta() {
        let mut totals = StatBlock::new(100, 10, 5, 5);
        totals.apply(&StatBlock::new(-20, 3, 0, 1));

        assert_eq!(totals, StatBlock::new(80, 13, 5, 6));
    }

    #[test]
    fn test_apply_saturates() {
        let mut totals = StatBlock::new(i32::MAX, i32::MIN, 0, 0);
        totals.apply(&StatBlock::new(1, -1, 0, 0));

        assert_eq!(totals.health, i32::MAX);
        assert_eq!(totals.qi, i32::MIN);
    }

    #[test]
    fn test_get_by_kind() {
        let block = StatBlock::new(1, 2, 3, 4);
        let values: Vec<i32> = StatKind::ALL.iter().map(|k| block.get(*k)).collect();
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_label_display() {
        let mut labels = StatLabels::default();
        assert_eq!(labels.display(StatKind::Health, 42), "Health:42");

        labels.qi = "Inner Qi".to_string();
        assert_eq!(labels.display(StatKind::Qi, -3), "Inner Qi:-3");
    }

    #[test]
    fn test_partial_deserialize() {
        let block: StatBlock = toml::from_str("health = 10").unwrap();
        assert_eq!(block, StatBlock::new(10, 0, 0, 0));
        assert!(!block.is_zero());

        let labels: StatLabels = toml::from_str("attack = \"Strike\"").unwrap();
        assert_eq!(labels.attack, "Strike");
        assert_eq!(labels.defend, "Defend");
    }
}
