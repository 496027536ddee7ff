//! Player statistics as returned by the stats endpoint.

use crate::models::ordered::OrderedMap;
use crate::models::snapshot::SkillSnapshot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub level: u32,
    pub experience: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossEntry {
    pub kc: i64,
    pub rank: i64,
}

/// Overall row; `level` is the total level, so it is not bounded by 99.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallEntry {
    pub level: u32,
    pub experience: u64,
    pub rank: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub username: String,
    pub skills: OrderedMap<SkillEntry>,
    #[serde(default)]
    pub bosses: OrderedMap<BossEntry>,
    pub overall: OverallEntry,
}

impl SkillEntry {
    pub fn snapshot(&self) -> SkillSnapshot {
        SkillSnapshot::new(self.level, self.experience)
    }
}

impl PlayerStats {
    /// Snapshot of `skill`, matched case-insensitively.
    pub fn snapshot(&self, skill: &str) -> Option<(&str, SkillSnapshot)> {
        self.skills
            .find_ignore_case(skill)
            .map(|(name, entry)| (name, entry.snapshot()))
    }

    /// Bosses the player has at least one kill on.
    pub fn killed_bosses(&self) -> impl Iterator<Item = (&str, &BossEntry)> {
        self.bosses
            .iter()
            .filter(|(_, b)| b.kc > 0)
            .map(|(name, b)| (name.as_str(), b))
    }
}
