//! Pure computations: experience table, duration formatting, progress projections.

pub mod duration;
pub mod experience;
pub mod progress;

pub use duration::format_duration;
pub use experience::{
    MAX_LEVEL, experience_for_level, experience_to_max, experience_to_next_level,
    level_for_experience, level_progress,
};
pub use progress::{DEFAULT_TOP_COUNT, rank_top_gains, time_to_max, time_to_next_level};
