//! Progress analysis over a reporting window.

use crate::errors::{AppError, AppResult};
use crate::models::ordered::OrderedMap;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reporting window. The backend only aggregates over these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Period {
    Day,
    Week,
    Month,
}

impl Period {
    pub fn days(self) -> u32 {
        match self {
            Period::Day => 1,
            Period::Week => 7,
            Period::Month => 30,
        }
    }

    pub fn from_days(days: u32) -> AppResult<Self> {
        match days {
            1 => Ok(Period::Day),
            7 => Ok(Period::Week),
            30 => Ok(Period::Month),
            other => Err(AppError::InvalidPeriod(other)),
        }
    }
}

impl TryFrom<u32> for Period {
    type Error = AppError;

    fn try_from(days: u32) -> AppResult<Self> {
        Period::from_days(days)
    }
}

impl From<Period> for u32 {
    fn from(p: Period) -> u32 {
        p.days()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Day => write!(f, "1 day"),
            Period::Week => write!(f, "7 days"),
            Period::Month => write!(f, "30 days"),
        }
    }
}

/// Aggregated gains and daily rates for one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressWindow {
    #[serde(default)]
    pub experience_gained: OrderedMap<i64>,
    #[serde(default)]
    pub levels_gained: OrderedMap<i64>,
    #[serde(default)]
    pub boss_kills_gained: OrderedMap<i64>,
    #[serde(default)]
    pub daily_experience_rate: f64,
    #[serde(default)]
    pub daily_kill_rate: f64,
}

/// Which gains mapping of a window to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GainKind {
    Experience,
    Levels,
    Bosses,
}

impl GainKind {
    pub fn as_str(self) -> &'static str {
        match self {
            GainKind::Experience => "experience",
            GainKind::Levels => "levels",
            GainKind::Bosses => "bosses",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GainKind::Experience => "Experience gained",
            GainKind::Levels => "Levels gained",
            GainKind::Bosses => "Boss kills gained",
        }
    }
}

impl ProgressWindow {
    pub fn gains(&self, kind: GainKind) -> &OrderedMap<i64> {
        match kind {
            GainKind::Experience => &self.experience_gained,
            GainKind::Levels => &self.levels_gained,
            GainKind::Bosses => &self.boss_kills_gained,
        }
    }
}

/// Wire shape: `{ period_days, progress: {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressAnalysis {
    pub period_days: u32,
    pub progress: ProgressWindow,
}

impl ProgressAnalysis {
    pub fn period(&self) -> AppResult<Period> {
        Period::from_days(self.period_days)
    }
}

/// A progress file holds either one window or the list the dashboard
/// requests (1, 7 and 30 days).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProgressDocument {
    Single(ProgressAnalysis),
    Many(Vec<ProgressAnalysis>),
}

impl ProgressDocument {
    pub fn windows(&self) -> &[ProgressAnalysis] {
        match self {
            ProgressDocument::Single(a) => std::slice::from_ref(a),
            ProgressDocument::Many(v) => v,
        }
    }

    /// Picks the window for `period`. A single-window document is accepted
    /// as long as its period is valid; `period` is then ignored.
    pub fn select(&self, period: Period) -> AppResult<&ProgressAnalysis> {
        for window in self.windows() {
            window.period()?;
        }

        match self {
            ProgressDocument::Single(a) => Ok(a),
            ProgressDocument::Many(v) => v
                .iter()
                .find(|a| a.period_days == period.days())
                .ok_or(AppError::MissingPeriod(period.days())),
        }
    }
}
