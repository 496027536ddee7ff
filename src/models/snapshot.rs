use crate::core::experience::{experience_for_level, level_for_experience};
use serde::{Deserialize, Serialize};

/// Level and cumulative experience of one skill at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSnapshot {
    pub level: u32,
    pub experience: u64,
}

impl SkillSnapshot {
    pub fn new(level: u32, experience: u64) -> Self {
        Self { level, experience }
    }

    /// Snapshot sitting exactly on the threshold of `level`.
    pub fn at_level(level: u32) -> Self {
        Self::new(level, experience_for_level(level))
    }

    /// True when the stored level agrees with the experience table.
    pub fn is_consistent(&self) -> bool {
        level_for_experience(self.experience) == self.level
    }
}
