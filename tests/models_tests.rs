use chrono::NaiveDate;
use osrsdiff::errors::AppError;
use osrsdiff::models::progress::GainKind;
use osrsdiff::models::{
    BossTimeline, Period, PlayerStats, ProgressDocument, SkillSnapshot, SkillTimeline,
};

mod common;
use common::{BOSS_TIMELINE, PLAYER_STATS, PROGRESS_ALL, PROGRESS_WEEK, SKILL_TIMELINE};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_player_stats_decode() {
    let stats: PlayerStats = serde_json::from_str(PLAYER_STATS).unwrap();
    assert_eq!(stats.username, "Zezima");
    assert_eq!(stats.skills.len(), 3);
    assert_eq!(stats.skills.get("attack").unwrap().rank, Some(1200));
    assert_eq!(stats.skills.get("strength").unwrap().rank, None);
    assert_eq!(stats.overall.level, 219);

    let killed: Vec<&str> = stats.killed_bosses().map(|(n, _)| n).collect();
    assert_eq!(killed, ["zulrah"]);
}

#[test]
fn test_snapshot_lookup_ignores_case() {
    let stats: PlayerStats = serde_json::from_str(PLAYER_STATS).unwrap();
    let (name, snap) = stats.snapshot("Cooking").unwrap();
    assert_eq!(name, "cooking");
    assert_eq!(snap, SkillSnapshot::new(50, 101_333));
    assert!(snap.is_consistent());
    assert!(stats.snapshot("sailing").is_none());
}

#[test]
fn test_snapshot_consistency() {
    assert!(SkillSnapshot::at_level(70).is_consistent());
    assert!(!SkillSnapshot::new(70, 10).is_consistent());
}

#[test]
fn test_gains_keep_document_order() {
    let doc: ProgressDocument = serde_json::from_str(PROGRESS_WEEK).unwrap();
    let window = doc.select(Period::Day).unwrap();
    let keys: Vec<&str> = window.progress.experience_gained.keys().collect();
    assert_eq!(keys, ["a", "b", "c", "d"]);
    assert_eq!(window.progress.gains(GainKind::Bosses).get("zulrah"), Some(&14));
    assert_eq!(window.period().unwrap(), Period::Week);
}

#[test]
fn test_select_window_from_list() {
    let doc: ProgressDocument = serde_json::from_str(PROGRESS_ALL).unwrap();
    assert_eq!(doc.windows().len(), 3);
    assert_eq!(doc.select(Period::Month).unwrap().progress.daily_experience_rate, 50_000.0);
    assert_eq!(doc.select(Period::Day).unwrap().period_days, 1);
}

#[test]
fn test_missing_window() {
    let raw = r#"[{ "period_days": 7, "progress": {} }]"#;
    let doc: ProgressDocument = serde_json::from_str(raw).unwrap();
    assert!(matches!(doc.select(Period::Month), Err(AppError::MissingPeriod(30))));
}

#[test]
fn test_invalid_period_rejected() {
    let raw = r#"{ "period_days": 14, "progress": {} }"#;
    let doc: ProgressDocument = serde_json::from_str(raw).unwrap();
    assert!(matches!(doc.select(Period::Week), Err(AppError::InvalidPeriod(14))));
    assert!(Period::from_days(0).is_err());
    assert_eq!(Period::from_days(30).unwrap(), Period::Month);
}

#[test]
fn test_skill_timeline_sorted_with_deltas() {
    let tl = SkillTimeline::from_json(SKILL_TIMELINE).unwrap();
    let dates: Vec<NaiveDate> = tl.entries.iter().map(|e| e.date).collect();
    assert_eq!(
        dates,
        [date(2025, 6, 1), date(2025, 6, 2), date(2025, 6, 3), date(2025, 6, 4)]
    );
    assert_eq!(
        tl.experience_deltas(),
        [None, None, Some(112_000 - 101_333), Some(1_500)]
    );
    assert_eq!(tl.total_gained(), 113_500 - 101_333);
}

#[test]
fn test_boss_timeline() {
    let tl = BossTimeline::from_json(BOSS_TIMELINE).unwrap();
    assert_eq!(tl.entries[0].date, date(2025, 6, 1));
    assert_eq!(tl.kill_deltas(), [None, Some(10), Some(10)]);
    assert_eq!(tl.total_gained(), 20);
}

#[test]
fn test_empty_and_bad_timelines() {
    let tl = SkillTimeline::from_json("[]").unwrap();
    assert_eq!(tl.total_gained(), 0);

    let err = SkillTimeline::from_json(r#"[{ "date": "yesterday" }]"#).unwrap_err();
    assert!(err.to_string().contains("invalid timeline date"));
}

#[test]
fn test_repeated_key_keeps_first_position() {
    let raw = r#"{ "period_days": 7, "progress": {
        "experience_gained": { "b": 1, "a": 2, "b": 9 } } }"#;
    let doc: ProgressDocument = serde_json::from_str(raw).unwrap();
    let gains = &doc.select(Period::Week).unwrap().progress.experience_gained;
    assert_eq!(gains.len(), 2);
    assert_eq!(gains.keys().collect::<Vec<_>>(), ["b", "a"]);
    assert_eq!(gains.get("b"), Some(&9));
}

#[test]
fn test_large_mapping_decodes_in_order() {
    let body: Vec<String> = (0..5_000).map(|i| format!("\"s{i}\": {i}")).collect();
    let raw = format!(
        r#"{{ "period_days": 30, "progress": {{ "experience_gained": {{ {} }} }} }}"#,
        body.join(", ")
    );
    let doc: ProgressDocument = serde_json::from_str(&raw).unwrap();
    let gains = &doc.select(Period::Month).unwrap().progress.experience_gained;
    assert_eq!(gains.len(), 5_000);
    assert_eq!(gains[0], ("s0".to_string(), 0));
    assert_eq!(gains[4_999], ("s4999".to_string(), 4_999));
}
