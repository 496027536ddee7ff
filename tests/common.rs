#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn osd() -> Command {
    let mut cmd = cargo_bin_cmd!("osrsdiff");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// Create a unique path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("osrsdiff_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temp file and return its path
pub fn write_fixture(name: &str, ext: &str, content: &str) -> String {
    let p = temp_path(name, ext);
    fs::write(&p, content).expect("write fixture");
    p
}

/// Config path that does not exist yet, so defaults apply
pub fn fresh_config(name: &str) -> String {
    temp_path(&format!("{name}_config"), "conf")
}

pub const PLAYER_STATS: &str = r#"{
  "username": "Zezima",
  "skills": {
    "attack":    { "level": 99, "experience": 13034431, "rank": 1200 },
    "strength":  { "level": 70, "experience": 737627 },
    "cooking":   { "level": 50, "experience": 101333, "rank": 250000 }
  },
  "bosses": {
    "zulrah":    { "kc": 120, "rank": 5000 },
    "vorkath":   { "kc": 0,   "rank": -1 }
  },
  "overall": { "level": 219, "experience": 13873391, "rank": 90000 }
}"#;

pub const PROGRESS_WEEK: &str = r#"{
  "period_days": 7,
  "progress": {
    "experience_gained": { "a": 5, "b": 20, "c": 0, "d": 20 },
    "levels_gained": { "cooking": 2, "strength": 1 },
    "boss_kills_gained": { "zulrah": 14, "vorkath": 0 },
    "daily_experience_rate": 1000.0,
    "daily_kill_rate": 2.0
  }
}"#;

pub const PROGRESS_ALL: &str = r#"[
  { "period_days": 1,
    "progress": { "experience_gained": { "cooking": 300 }, "levels_gained": {},
                  "boss_kills_gained": {}, "daily_experience_rate": 0.0, "daily_kill_rate": 0.0 } },
  { "period_days": 7,
    "progress": { "experience_gained": { "cooking": 7000, "strength": 9000 }, "levels_gained": {},
                  "boss_kills_gained": {}, "daily_experience_rate": 1000.0, "daily_kill_rate": 0.0 } },
  { "period_days": 30,
    "progress": { "experience_gained": { "cooking": 30000 }, "levels_gained": {},
                  "boss_kills_gained": {}, "daily_experience_rate": 50000.0, "daily_kill_rate": 0.0 } }
]"#;

pub const SKILL_TIMELINE: &str = r#"[
  { "date": "2025-06-03", "level": 51, "experience": 112000 },
  { "date": "2025-06-01", "level": 50, "experience": 101333 },
  { "date": "2025-06-02T12:30:00Z", "level": null, "experience": null },
  { "date": "2025-06-04", "level": 51, "experience": 113500 }
]"#;

pub const BOSS_TIMELINE: &str = r#"[
  { "date": "2025-06-02", "kc": 110 },
  { "date": "2025-06-01", "kc": 100 },
  { "date": "2025-06-03", "kc": 120 }
]"#;

/// Like `osd()` but with `NO_COLOR` unset, so only flags and config decide
pub fn osd_colored() -> Command {
    let mut cmd = cargo_bin_cmd!("osrsdiff");
    cmd.env_remove("NO_COLOR").env_remove("RUST_LOG");
    cmd
}
