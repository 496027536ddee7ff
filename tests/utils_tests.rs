use osrsdiff::config::Config;
use osrsdiff::config::check::check_str;
use osrsdiff::models::Period;
use osrsdiff::ui::messages::{Kind, render};
use osrsdiff::utils::formatting::{format_gain, format_number, format_percent};
use osrsdiff::utils::table::{Cell, Column, Table};

#[test]
fn test_format_number() {
    assert_eq!(format_number(0, ","), "0");
    assert_eq!(format_number(999, ","), "999");
    assert_eq!(format_number(1_000, ","), "1,000");
    assert_eq!(format_number(13_034_431, ","), "13,034,431");
    assert_eq!(format_number(-1_234_567, "."), "-1.234.567");
    assert_eq!(format_number(1_234, ""), "1234");
}

#[test]
fn test_format_gain_and_percent() {
    assert_eq!(format_gain(1_200, ","), "+1,200");
    assert_eq!(format_gain(-3, ","), "-3");
    assert_eq!(format_gain(0, ","), "0");
    assert_eq!(format_percent(49.397), "49.4%");
}

#[test]
fn test_table_render_aligns_columns() {
    let mut t = Table::new(vec![Column::left("Skill"), Column::right("Level")]);
    t.add_row(vec![Cell::from("attack"), Cell::from("99")]);
    t.add_row(vec![Cell::from("hp"), Cell::colored("10", "\x1b[32m")]);

    let out = t.render('=', false);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Skill   Level");
    assert_eq!(lines[1], "=============");
    assert_eq!(lines[2], "attack     99");
    assert_eq!(lines[3], "hp         10");

    let colored = t.render('-', true);
    assert!(colored.contains("\x1b[32m   10\x1b[0m"));
}

#[test]
fn test_config_defaults_and_partial_file() {
    let cfg = Config::default();
    assert_eq!(cfg.default_period, Period::Week);
    assert_eq!(cfg.top_count, 10);

    let partial: Config = serde_yaml::from_str("default_period: 30\n").unwrap();
    assert_eq!(partial.default_period, Period::Month);
    assert_eq!(partial.separator_char, "-");
    assert!(partial.validate().is_ok());

    assert!(serde_yaml::from_str::<Config>("default_period: 5\n").is_err());
}

#[test]
fn test_config_validation() {
    let cfg = Config {
        separator_char: "--".into(),
        ..Config::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_check_str() {
    let report = check_str("top_count: 3\ntheme: dark\n").unwrap();
    assert_eq!(report.unknown, ["theme"]);
    assert!(report.missing.contains(&"default_period".to_string()));
    assert!(!report.missing.contains(&"top_count".to_string()));

    let empty = check_str("").unwrap();
    assert_eq!(empty.missing.len(), 5);
    assert!(check_str("- a\n- b\n").is_err());
}

#[test]
fn test_message_render_respects_color_flag() {
    let plain = render(Kind::Warning, "careful", false);
    assert!(!plain.contains('\x1b'));
    assert!(plain.ends_with("careful"));

    let colored = render(Kind::Error, "boom", true);
    assert!(colored.starts_with("\x1b[31m"));
}

#[test]
fn test_missing_config_file_gives_defaults() {
    let mut path = std::env::temp_dir();
    path.push("osrsdiff_missing_dir_for_load/osrsdiff.conf");
    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg, Config::default());
}
