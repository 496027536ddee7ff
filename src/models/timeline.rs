//! Skill and boss timelines used by the detail views.
//!
//! Entries are sorted by date once decoded; the delta helpers compare each
//! entry with the previous one that carried a value.

use crate::errors::AppResult;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Accepts `YYYY-MM-DD`, RFC 3339 or a naive `YYYY-MM-DDTHH:MM:SS`, keeps the date.
pub fn parse_timeline_date(s: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_timeline_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timeline date: {raw}")))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTimelineEntry {
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub level: Option<u32>,
    #[serde(default)]
    pub experience: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossTimelineEntry {
    #[serde(deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub kc: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkillTimeline {
    pub entries: Vec<SkillTimelineEntry>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BossTimeline {
    pub entries: Vec<BossTimelineEntry>,
}

impl SkillTimeline {
    pub fn new(mut entries: Vec<SkillTimelineEntry>) -> Self {
        entries.sort_by_key(|e| e.date);
        Self { entries }
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }

    /// Experience gained since the previous entry with a known value.
    pub fn experience_deltas(&self) -> Vec<Option<i64>> {
        deltas(self.entries.iter().map(|e| e.experience.map(|x| x as i64)))
    }

    /// Experience gained between the first and last known values.
    pub fn total_gained(&self) -> i64 {
        span(self.entries.iter().map(|e| e.experience.map(|x| x as i64)))
    }
}

impl BossTimeline {
    pub fn new(mut entries: Vec<BossTimelineEntry>) -> Self {
        entries.sort_by_key(|e| e.date);
        Self { entries }
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        Ok(Self::new(serde_json::from_str(raw)?))
    }

    pub fn kill_deltas(&self) -> Vec<Option<i64>> {
        deltas(self.entries.iter().map(|e| e.kc))
    }

    pub fn total_gained(&self) -> i64 {
        span(self.entries.iter().map(|e| e.kc))
    }
}

fn deltas(values: impl Iterator<Item = Option<i64>>) -> Vec<Option<i64>> {
    let mut last: Option<i64> = None;
    values
        .map(|v| match (v, last) {
            (Some(cur), Some(prev)) => {
                last = Some(cur);
                Some(cur - prev)
            }
            (Some(cur), None) => {
                last = Some(cur);
                None
            }
            (None, _) => None,
        })
        .collect()
}

fn span(values: impl Iterator<Item = Option<i64>>) -> i64 {
    let known: Vec<i64> = values.flatten().collect();
    match (known.first(), known.last()) {
        (Some(first), Some(last)) => last - first,
        _ => 0,
    }
}
