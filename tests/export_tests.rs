use predicates::str::contains;
use std::fs;

mod common;
use common::*;

#[test]
fn test_export_csv() {
    let cfg = fresh_config("export_csv");
    let progress = write_fixture("export_csv_progress", "json", PROGRESS_WEEK);
    let out = temp_path("export_csv_out", "csv");

    osd()
        .args(["--config", &cfg, "export", &progress, "--file", &out])
        .assert()
        .success()
        .stdout(contains("export completed (3 rows)"));

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, ["rank,name,amount", "1,b,20", "2,d,20", "3,a,5"]);
}

#[test]
fn test_export_json_levels() {
    let cfg = fresh_config("export_json");
    let progress = write_fixture("export_json_progress", "json", PROGRESS_WEEK);
    let out = temp_path("export_json_out", "json");

    osd()
        .args([
            "--config", &cfg, "export", &progress, "--file", &out, "--format", "json", "--kind",
            "levels",
        ])
        .assert()
        .success();

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(v["period_days"], 7);
    assert_eq!(v["kind"], "levels");
    assert_eq!(v["gains"][0]["name"], "cooking");
    assert_eq!(v["gains"][0]["amount"], 2);
    assert_eq!(v["gains"].as_array().unwrap().len(), 2);
}

#[test]
fn test_export_requires_absolute_path() {
    let cfg = fresh_config("export_rel");
    let progress = write_fixture("export_rel_progress", "json", PROGRESS_WEEK);

    osd()
        .args(["--config", &cfg, "export", &progress, "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file() {
    let cfg = fresh_config("export_exists");
    let progress = write_fixture("export_exists_progress", "json", PROGRESS_WEEK);
    let out = write_fixture("export_exists_out", "csv", "old");

    osd()
        .args(["--config", &cfg, "export", &progress, "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");

    osd()
        .args(["--config", &cfg, "export", &progress, "--file", &out, "-f"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("rank,name,amount"));
}
