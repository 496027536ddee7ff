//! Projections over a progress window: ETAs and ranked gains.

use crate::core::duration::format_duration;
use crate::core::experience::{MAX_LEVEL, experience_to_max, experience_to_next_level};
use crate::models::gain::Gain;
use crate::models::player::PlayerStats;

/// How many rows a ranking keeps when the caller does not say otherwise.
pub const DEFAULT_TOP_COUNT: usize = 10;

pub const MAX_LEVEL_REACHED: &str = "Max level reached!";
pub const INSUFFICIENT_DATA: &str = "Insufficient data";

fn eta(level: u32, remaining: u64, daily_rate: f64) -> String {
    if level >= MAX_LEVEL {
        return MAX_LEVEL_REACHED.to_string();
    }
    // NaN falls through to here as well
    if daily_rate.is_nan() || daily_rate <= 0.0 {
        return INSUFFICIENT_DATA.to_string();
    }

    format_duration(remaining as f64 / daily_rate)
}

/// Time until the next level at `daily_rate` experience per day.
pub fn time_to_next_level(level: u32, experience: u64, daily_rate: f64) -> String {
    eta(level, experience_to_next_level(level, experience), daily_rate)
}

/// Time until level 99 at `daily_rate` experience per day.
pub fn time_to_max(level: u32, experience: u64, daily_rate: f64) -> String {
    eta(level, experience_to_max(level, experience), daily_rate)
}

/// Keeps positive gains, sorts them by amount (largest first) and truncates
/// to `count` rows. Equal amounts keep their input order.
pub fn rank_top_gains(gains: &[(String, i64)], count: usize) -> Vec<Gain> {
    let mut ranked: Vec<Gain> = gains
        .iter()
        .filter(|(_, amount)| *amount > 0)
        .map(|(name, amount)| Gain::new(name.clone(), *amount))
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
    ranked.truncate(count);
    ranked
}

/// One line of the per-skill ETA report.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillEta {
    pub name: String,
    pub level: u32,
    pub experience: u64,
    pub to_next: u64,
    pub eta_next: String,
    pub eta_max: String,
}

/// ETAs for every skill of `stats`, in the order the backend sent them.
pub fn skill_etas(stats: &PlayerStats, daily_rate: f64) -> Vec<SkillEta> {
    stats
        .skills
        .iter()
        .map(|(name, skill)| SkillEta {
            name: name.clone(),
            level: skill.level,
            experience: skill.experience,
            to_next: experience_to_next_level(skill.level, skill.experience),
            eta_next: time_to_next_level(skill.level, skill.experience, daily_rate),
            eta_max: time_to_max(skill.level, skill.experience, daily_rate),
        })
        .collect()
}
