//! Configuration loading
//!
//! Reads `~/.config/careplan/config.toml` (or an explicit path) and layers the
//! `CAREPLAN_API_URL` environment variable and CLI flags on top.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

pub mod types;

pub use types::{ApiConfig, Config, OutputConfig};

use crate::error::CarePlanError;

const CONFIG_DIR: &str = "careplan";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the service base URL
pub const API_URL_ENV: &str = "CAREPLAN_API_URL";

/// A loaded config plus a warning to surface when the file was unusable
#[derive(Debug, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from `path`, or from the default location when `None`
///
/// A missing file is not an error: defaults are used silently.
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    match path {
        Some(path) => load_config_from_path(path),
        None => match config_path() {
            Some(path) => load_config_from_path(&path),
            None => ConfigResult::default(),
        },
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => {
            log::debug!("No config at {}, using defaults", path.display());
            return ConfigResult::default();
        }
    };

    let mut contents = String::new();
    if let Err(e) = file.read_to_string(&mut contents) {
        return with_warning(CarePlanError::Io(e).to_string());
    }

    match parse_config(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(message) => {
            let err = CarePlanError::InvalidConfig {
                path: path.to_path_buf(),
                message,
            };
            log::warn!("{}", err);
            with_warning(err.to_string())
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config, String> {
    toml::from_str::<Config>(content).map_err(|e| e.message().to_string())
}

fn with_warning(warning: String) -> ConfigResult {
    ConfigResult {
        config: Config::default(),
        warning: Some(warning),
    }
}

/// Apply overrides in precedence order: CLI flag, then environment
pub fn apply_overrides(
    config: &mut Config,
    cli_api_url: Option<&str>,
    env_api_url: Option<&str>,
    cli_output_dir: Option<&Path>,
) {
    let api_url = cli_api_url
        .or(env_api_url)
        .map(str::trim)
        .filter(|url| !url.is_empty());
    if let Some(url) = api_url {
        config.api.base_url = url.to_string();
    }

    if let Some(dir) = cli_output_dir {
        config.output.dir = Some(dir.to_path_buf());
    }
}

/// Directory printable care plans are saved to
///
/// Falls back to the platform document directory, then the current directory.
pub fn resolve_output_dir(config: &OutputConfig) -> Option<PathBuf> {
    config
        .dir
        .clone()
        .or_else(dirs::document_dir)
        .or_else(|| std::env::current_dir().ok())
}
