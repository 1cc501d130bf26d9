#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use hazatlas::config::Config;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn haz() -> Command {
    cargo_bin_cmd!("hazatlas")
}

/// Create a unique fixture directory inside the system temp dir and reset it
pub fn setup_fixture_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hazatlas", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create fixture dir");
    path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

// Small known dataset shared by most tests.
//
// Complete rows with drop_incomplete=true: 3 DesInventar + 2 EM-DAT +
// 2 Dartmouth = 7. The Tamale row lacks a longitude, the Cluj row has an
// unparseable Start Year, and the second Dartmouth row carries a Began in
// the wrong format (YYYY/MM/DD instead of DD/MM/YYYY).

pub const DESINVENTAR_CSV: &str = "\
Location,latitude,longitude,Date,Event
Akuse,6.1088,0.1281,2019/05/14,Flood
Accra,5.556,-0.1969,2019/06/03,Storm
Kumasi,6.6885,-1.6244,2020/01/10,Flood
Tamale,9.4008,,2019/02/02,Drought
";

pub const EMDAT_CSV: &str = "\
Location,Latitude,Longitude,Start Year,Disaster Type
Timisoara,45.7489,21.2087,2019,Flood
Bucharest,44.4268,26.1025,2020,Earthquake
Cluj,46.7712,23.6236,n.d.,Storm
";

pub const DARTMOUTH_CSV: &str = "\
Country,lat,long,Began,MainCause
Ghana,7.9465,-1.0232,14/05/2019,Heavy Rain
Romania,45.9432,24.9668,2019/05/14,Snowmelt
Ghana,7.9465,-1.0232,01/03/2020,Monsoon
";

/// Write the three source fixtures into `dir` with their default file names
pub fn write_sources(dir: &Path) {
    fs::write(dir.join("GhanaDesInventar.csv"), DESINVENTAR_CSV).expect("write desinventar");
    fs::write(dir.join("Romania+Ghana_EMDAT.csv"), EMDAT_CSV).expect("write emdat");
    fs::write(dir.join("DartmouthFlood.csv"), DARTMOUTH_CSV).expect("write dartmouth");
}

/// Build a Config pointing straight at the fixtures (library-level tests)
pub fn config_for(dir: &Path, drop_incomplete: bool) -> Config {
    Config {
        desinventar: dir.join("GhanaDesInventar.csv").to_string_lossy().to_string(),
        emdat: dir
            .join("Romania+Ghana_EMDAT.csv")
            .to_string_lossy()
            .to_string(),
        dartmouth: dir.join("DartmouthFlood.csv").to_string_lossy().to_string(),
        drop_incomplete,
    }
}

/// Write a config file pointing at the fixtures; returns its path (CLI tests)
pub fn write_config(dir: &Path, drop_incomplete: bool) -> String {
    let conf = dir.join("hazatlas.conf");
    let yaml = format!(
        "desinventar: {}\nemdat: {}\ndartmouth: {}\ndrop_incomplete: {}\n",
        dir.join("GhanaDesInventar.csv").display(),
        dir.join("Romania+Ghana_EMDAT.csv").display(),
        dir.join("DartmouthFlood.csv").display(),
        drop_incomplete,
    );
    fs::write(&conf, yaml).expect("write config");
    conf.to_string_lossy().to_string()
}

/// Fixture dir + config file in one call, default drop flag
pub fn setup_catalog(name: &str) -> (PathBuf, String) {
    let dir = setup_fixture_dir(name);
    write_sources(&dir);
    let conf = write_config(&dir, true);
    (dir, conf)
}
