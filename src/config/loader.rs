// Configuration file loading and creation

use super::types::Config;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("touchpong");
    path.push("config.toml");
    path
}

/// Load configuration from file, or create default if it doesn't exist
pub fn load_config() -> Result<Config, io::Error> {
    load_config_from(&get_config_path())
}

/// Load configuration from an explicit path.
///
/// A file that fails to parse is reported and replaced by the defaults;
/// a missing file is created with the defaults.
pub fn load_config_from(path: &Path) -> Result<Config, io::Error> {
    if path.exists() {
        let contents = fs::read_to_string(path)?;
        Ok(parse_config(&contents))
    } else {
        create_default_config(path)?;
        Ok(Config::default())
    }
}

/// Parse TOML text, falling back to defaults on error
pub fn parse_config(contents: &str) -> Config {
    match toml::from_str(contents) {
        Ok(config) => config,
        Err(e) => {
            warn!("failed to parse config file, using defaults: {}", e);
            Config::default()
        }
    }
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<(), io::Error> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let commented_toml = format!(
        "# Touchpong Configuration File\n\
         # Restart the game after editing for changes to take effect\n\
         #\n\
         # controls.scheme: \"classic\" (one paddle) or \"extended\" (both paddles)\n\
         # controls.delta_mode: \"absolute\" (from drag origin) or \"incremental\" (per frame)\n\
         # Drags below the middle of the field steer the bottom paddle,\n\
         # drags above it steer the top paddle.\n\
         #\n\
         # Key names: \"Space\", \"Enter\", \"Esc\" or single characters like \"Q\"\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)?;
    info!("created default config file at {}", path.display());
    Ok(())
}
