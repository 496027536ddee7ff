pub mod gain;
pub mod ordered;
pub mod player;
pub mod progress;
pub mod snapshot;
pub mod timeline;

pub use gain::Gain;
pub use ordered::OrderedMap;
pub use player::PlayerStats;
pub use progress::{GainKind, Period, ProgressAnalysis, ProgressDocument, ProgressWindow};
pub use snapshot::SkillSnapshot;
pub use timeline::{BossTimeline, BossTimelineEntry, SkillTimeline, SkillTimelineEntry};
