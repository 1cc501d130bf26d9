use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with the default source paths
pub fn handle() -> AppResult<()> {
    println!("⚙️  Initializing hazatlas…");

    Config::init_all()?;

    println!("📄 Config file : {}", Config::config_file().display());
    println!("🎉 hazatlas initialization completed!");
    Ok(())
}
