mod common;
use common::{haz, setup_catalog, temp_out};

use predicates::str::contains;
use std::fs;

#[test]
fn test_export_csv_full_table() {
    let (_dir, conf) = setup_catalog("export_csv_full");
    let out = temp_out("export_csv_full", "csv");

    haz()
        .args([
            "--config", &conf, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("Location,latitude,longitude,Year,EventLabel,Database"));
    assert!(content.contains("Akuse,6.1088,0.1281,2019,Flood,DesInventar"));
    assert!(content.contains("Timisoara,45.7489,21.2087,2019,Flood,EM-DAT"));
    assert!(content.contains("Ghana,7.9465,-1.0232,2020,Monsoon,Dartmouth"));
    // 7 complete rows + header
    assert_eq!(content.lines().count(), 8);
}

#[test]
fn test_export_csv_year_filter() {
    let (_dir, conf) = setup_catalog("export_csv_year");
    let out = temp_out("export_csv_year", "csv");

    haz()
        .args([
            "--config", &conf, "export", "--format", "csv", "--file", &out, "--year", "2019",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Akuse"));
    assert!(!content.contains("Kumasi"));
    assert!(!content.contains("Bucharest"));
}

#[test]
fn test_export_json_event_subset() {
    let (_dir, conf) = setup_catalog("export_json_subset");
    let out = temp_out("export_json_subset", "json");

    haz()
        .args([
            "--config",
            &conf,
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--year",
            "2019",
            "--desinventar",
            "Flood",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"Location\": \"Akuse\""));
    assert!(content.contains("\"Database\": \"EM-DAT\""));
    assert!(!content.contains("Accra"));
}

#[test]
fn test_export_json_keeps_absent_fields_null() {
    let (dir, _conf) = setup_catalog("export_json_nulls");
    // Re-point the config with the drop flag off so incomplete rows survive
    let conf = common::write_config(&dir, false);
    let out = temp_out("export_json_nulls", "json");

    haz()
        .args([
            "--config", &conf, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    // Tamale has no longitude, the Snowmelt row has no year
    assert!(content.contains("\"Location\": \"Tamale\""));
    assert!(content.contains("\"longitude\": null"));
    assert!(content.contains("\"Year\": null"));
}

#[test]
fn test_export_xlsx_writes_file() {
    let (_dir, conf) = setup_catalog("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");

    haz()
        .args([
            "--config", &conf, "export", "--format", "xlsx", "--file", &out,
        ])
        .assert()
        .success();

    let meta = fs::metadata(&out).expect("xlsx file created");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_requires_absolute_path() {
    let (_dir, conf) = setup_catalog("export_relative_path");

    haz()
        .args([
            "--config",
            &conf,
            "export",
            "--format",
            "csv",
            "--file",
            "relative.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let (_dir, conf) = setup_catalog("export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale content").unwrap();

    haz()
        .args([
            "--config", &conf, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(!content.contains("stale content"));
    assert!(content.contains("Akuse"));
}

#[test]
fn test_export_with_no_matching_rows_writes_nothing() {
    let (_dir, conf) = setup_catalog("export_no_match");
    let out = temp_out("export_no_match", "csv");

    haz()
        .args([
            "--config", &conf, "export", "--format", "csv", "--file", &out, "--year", "1999",
        ])
        .assert()
        .success()
        .stdout(contains("nothing exported"));

    assert!(!std::path::Path::new(&out).exists());
}
