use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{haz, setup_catalog};

#[test]
fn test_years_lists_distinct_years_ascending() {
    let (_dir, conf) = setup_catalog("cli_years");

    haz()
        .args(["--config", &conf, "years"])
        .assert()
        .success()
        .stdout(contains("2019").and(contains("2020")));
}

#[test]
fn test_summary_counts_per_source() {
    let (_dir, conf) = setup_catalog("cli_summary");

    haz()
        .args(["--config", &conf, "summary"])
        .assert()
        .success()
        .stdout(
            contains("DesInventar")
                .and(contains("EM-DAT"))
                .and(contains("Dartmouth"))
                .and(contains("Total rows"))
                .and(contains("7"))
                .and(contains("2019–2020")),
        );
}

#[test]
fn test_list_defaults_to_latest_year() {
    let (_dir, conf) = setup_catalog("cli_list_default_year");

    // Latest year in the fixtures is 2020: Kumasi, Bucharest and the Monsoon
    // row are visible, the 2019 rows are not.
    haz()
        .args(["--config", &conf, "list"])
        .assert()
        .success()
        .stdout(
            contains("Year: 2020")
                .and(contains("Visible events: 3"))
                .and(contains("Kumasi"))
                .and(contains("Bucharest"))
                .and(contains("Monsoon"))
                .and(contains("Akuse").not()),
        );
}

#[test]
fn test_list_explicit_year() {
    let (_dir, conf) = setup_catalog("cli_list_year");

    haz()
        .args(["--config", &conf, "list", "--year", "2019"])
        .assert()
        .success()
        .stdout(
            contains("Visible events: 4")
                .and(contains("Akuse"))
                .and(contains("Timisoara"))
                .and(contains("Heavy Rain"))
                .and(contains("Kumasi").not()),
        );
}

#[test]
fn test_list_event_subset_is_per_source() {
    let (_dir, conf) = setup_catalog("cli_list_subset");

    haz()
        .args([
            "--config",
            &conf,
            "list",
            "--year",
            "2019",
            "--desinventar",
            "Flood",
        ])
        .assert()
        .success()
        .stdout(
            contains("Visible events: 3")
                .and(contains("Akuse"))
                // Accra is a Storm row, excluded by the DesInventar selection
                .and(contains("Accra").not())
                // the other sources stay at select-all
                .and(contains("Timisoara")),
        );
}

#[test]
fn test_list_limit_clips_rows_not_the_count() {
    let (_dir, conf) = setup_catalog("cli_list_limit");

    haz()
        .args(["--config", &conf, "list", "--year", "2019", "--limit", "1"])
        .assert()
        .success()
        .stdout(
            contains("Visible events: 4")
                .and(contains("Akuse"))
                .and(contains("more row(s) not shown")),
        );
}

#[test]
fn test_list_rejects_bad_year() {
    let (_dir, conf) = setup_catalog("cli_list_bad_year");

    haz()
        .args(["--config", &conf, "list", "--year", "not-a-year"])
        .assert()
        .failure()
        .stderr(contains("Invalid year: not-a-year"));
}

#[test]
fn test_events_per_source() {
    let (_dir, conf) = setup_catalog("cli_events");

    haz()
        .args(["--config", &conf, "events"])
        .assert()
        .success()
        .stdout(
            contains("Flood")
                .and(contains("Storm"))
                .and(contains("Earthquake"))
                .and(contains("Heavy Rain")),
        );

    haz()
        .args(["--config", &conf, "events", "--source", "dartmouth"])
        .assert()
        .success()
        .stdout(
            contains("Heavy Rain")
                .and(contains("Monsoon"))
                .and(contains("Earthquake").not()),
        );
}

#[test]
fn test_events_rejects_unknown_source() {
    let (_dir, conf) = setup_catalog("cli_events_bad_source");

    haz()
        .args(["--config", &conf, "events", "--source", "noaa"])
        .assert()
        .failure()
        .stderr(contains("Unknown source: noaa"));
}

#[test]
fn test_cities_prints_fixed_locations() {
    let (_dir, conf) = setup_catalog("cli_cities");

    haz()
        .args(["--config", &conf, "cities"])
        .assert()
        .success()
        .stdout(
            contains("Akuse, Ghana")
                .and(contains("6.1088"))
                .and(contains("0.1281"))
                .and(contains("Timișoara, Romania"))
                .and(contains("45.7489"))
                .and(contains("21.2087"))
                .and(contains("default view")),
        );
}

#[test]
fn test_schema_broken_source_aborts_commands() {
    let (dir, conf) = setup_catalog("cli_schema_broken");

    // Dartmouth file with Began renamed away
    std::fs::write(
        dir.join("DartmouthFlood.csv"),
        "Country,lat,long,Start,MainCause\nGhana,7.9,-1.0,14/05/2019,Heavy Rain\n",
    )
    .unwrap();

    haz()
        .args(["--config", &conf, "years"])
        .assert()
        .failure()
        .stderr(contains("Schema mismatch in Dartmouth").and(contains("Began")));
}
