use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};

use crate::cli::Cli;
use crate::dates::DateRange;
use crate::rounding::RoundingConfig;

const APP_DIR: &str = "ttsync";
const LOCAL_ENV_FILE: &str = ".env";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "USERNAME or PASSWORD is empty or missing; set them in the environment or in {}",
        .0
    )]
    MissingCredentials(String),
    #[error("could not load {}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
    #[error("{0}")]
    InvalidRange(String),
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        match (read("USERNAME"), read("PASSWORD")) {
            (Some(username), Some(password)) => Ok(Self { username, password }),
            _ => Err(ConfigError::MissingCredentials(env_file_hint())),
        }
    }
}

/// Everything one run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub range: DateRange,
    pub output: PathBuf,
    pub credentials: Credentials,
    pub request_delay: Duration,
    pub cache_lookups: bool,
    pub rounding: RoundingConfig,
}

impl Config {
    pub fn resolve<F>(cli: Cli, today: NaiveDate, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let range =
            DateRange::from_options(cli.start, cli.end, today).map_err(ConfigError::InvalidRange)?;
        let credentials = Credentials::from_lookup(lookup)?;
        Ok(Self {
            range,
            output: cli.output,
            credentials,
            request_delay: Duration::from_millis(cli.delay_ms),
            cache_lookups: cli.cache_lookups,
            rounding: RoundingConfig {
                increment_minutes: cli.round_minutes,
                mode: cli.round_mode,
            },
        })
    }
}

/// `~/.config/ttsync/.env`
pub fn user_env_path() -> Option<PathBuf> {
    let mut path = dirs::home_dir()?;
    path.push(".config");
    path.push(APP_DIR);
    path.push(LOCAL_ENV_FILE);
    Some(path)
}

/// Loads the user's env file, falling back to `.env` in the working
/// directory. Variables already in the environment are kept.
pub fn load_env_file() -> Result<Option<PathBuf>, ConfigError> {
    if let Some(path) = user_env_path() {
        if load_from(&path)? {
            return Ok(Some(path));
        }
        warn!(path = %path.display(), "env file not found, trying local .env instead");
    }

    let local = PathBuf::from(LOCAL_ENV_FILE);
    if load_from(&local)? {
        return Ok(Some(local));
    }
    debug!("no .env file found, using process environment only");
    Ok(None)
}

fn load_from(path: &Path) -> Result<bool, ConfigError> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!(path = %path.display(), "loaded env file");
            Ok(true)
        }
        Err(err) if err.not_found() => Ok(false),
        Err(source) => Err(ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn env_file_hint() -> String {
    user_env_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| LOCAL_ENV_FILE.to_string())
}
