use crate::errors::{AppError, AppResult};
use crate::models::SourceKind;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default source file names, as shipped by the three catalogs.
pub const DESINVENTAR_FILE: &str = "GhanaDesInventar.csv";
pub const EMDAT_FILE: &str = "Romania+Ghana_EMDAT.csv";
pub const DARTMOUTH_FILE: &str = "DartmouthFlood.csv";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_desinventar")]
    pub desinventar: String,
    #[serde(default = "default_emdat")]
    pub emdat: String,
    #[serde(default = "default_dartmouth")]
    pub dartmouth: String,
    /// Drop unified rows missing a coordinate or a year at load time.
    #[serde(default = "default_drop_incomplete")]
    pub drop_incomplete: bool,
}

fn default_desinventar() -> String {
    DESINVENTAR_FILE.to_string()
}
fn default_emdat() -> String {
    EMDAT_FILE.to_string()
}
fn default_dartmouth() -> String {
    DARTMOUTH_FILE.to_string()
}
fn default_drop_incomplete() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            desinventar: default_desinventar(),
            emdat: default_emdat(),
            dartmouth: default_dartmouth(),
            drop_incomplete: default_drop_incomplete(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hazatlas")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".hazatlas")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hazatlas.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Load configuration from an explicit file (global `--config`).
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Path of one source file, with `~` expanded.
    pub fn source_path(&self, source: SourceKind) -> PathBuf {
        let raw = match source {
            SourceKind::DesInventar => &self.desinventar,
            SourceKind::EmDat => &self.emdat,
            SourceKind::Dartmouth => &self.dartmouth,
        };
        expand_tilde(raw)
    }

    /// Point every source at `dir`, keeping each configured file name
    /// (global `--data-dir`).
    pub fn set_data_dir(&mut self, dir: &str) {
        let dir = expand_tilde(dir);
        for raw in [
            &mut self.desinventar,
            &mut self.emdat,
            &mut self.dartmouth,
        ] {
            let name = Path::new(raw.as_str())
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| raw.clone());
            *raw = dir.join(name).to_string_lossy().into_owned();
        }
    }

    /// Initialize the configuration file
    pub fn init_all() -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        println!("✅ Config file: {:?}", Self::config_file());

        Ok(())
    }

    /// Serialized form for `config --print`.
    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)
    }
}

/// Expand a leading `~/` using the home directory.
fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
