//! Experience table for the 99-level skill curve.
//!
//! Every value produced here must match the game's published table exactly
//! (level 2 → 83, level 99 → 13,034,431), so the curve is evaluated with the
//! same floor steps the table was generated with.

/// Highest regular skill level.
pub const MAX_LEVEL: u32 = 99;

/// Cumulative experience required to reach `level`.
///
/// Levels `<= 1` need no experience. Levels above [`MAX_LEVEL`] are not
/// clamped: the curve keeps going until it no longer fits in a `u64`, after
/// which every level maps to `u64::MAX`.
pub fn experience_for_level(level: u32) -> u64 {
    if level <= 1 {
        return 0;
    }

    let mut points: u64 = 0;
    for i in 1..level {
        let i = f64::from(i);
        // the float to int cast saturates, the sum must too
        points = points.saturating_add((i + 300.0 * 2f64.powf(i / 7.0)).floor() as u64);
        if points == u64::MAX {
            return u64::MAX;
        }
    }

    points / 4
}

/// Experience still missing before `current_level + 1`.
pub fn experience_to_next_level(current_level: u32, current_experience: u64) -> u64 {
    if current_level >= MAX_LEVEL {
        return 0;
    }

    experience_for_level(current_level + 1).saturating_sub(current_experience)
}

/// Experience still missing before level 99.
pub fn experience_to_max(current_level: u32, current_experience: u64) -> u64 {
    if current_level >= MAX_LEVEL {
        return 0;
    }

    experience_for_level(MAX_LEVEL).saturating_sub(current_experience)
}

/// Highest level in `1..=99` whose threshold is `<= experience`.
pub fn level_for_experience(experience: u64) -> u32 {
    let mut level = 1;
    while level < MAX_LEVEL && experience_for_level(level + 1) <= experience {
        level += 1;
    }
    level
}

/// Percentage (0–100) of the way from `current_level` to the next one.
pub fn level_progress(current_level: u32, current_experience: u64) -> f64 {
    if current_level >= MAX_LEVEL {
        return 100.0;
    }

    let floor = experience_for_level(current_level);
    let ceil = experience_for_level(current_level + 1);
    let span = ceil.saturating_sub(floor);
    if span == 0 {
        return 0.0;
    }

    let done = current_experience.saturating_sub(floor).min(span);
    done as f64 / span as f64 * 100.0
}

/// `(level, experience)` pairs for every level from 1 to 99.
pub fn experience_table() -> Vec<(u32, u64)> {
    (1..=MAX_LEVEL)
        .map(|level| (level, experience_for_level(level)))
        .collect()
}
