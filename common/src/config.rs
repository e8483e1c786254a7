//! # Runtime Configuration
//!
//! The resolved [`Config`] is an explicit context object handed to whoever
//! needs it. Nothing here is stored in process-wide state.
//!
//! Values are layered, later sources winning:
//! 1. Built-in defaults.
//! 2. A YAML file (`--config <path>`, else `$HOME/.recon.yaml` when present).
//! 3. `RECON_*` environment variables.
//! 4. Command-line flags (applied by the CLI after [`Config::load`]).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::Level;

use crate::error::ConfigError;

pub const DEFAULT_AMASS_BIN: &str = "amass";
pub const CONFIG_FILE_NAME: &str = ".recon.yaml";
pub const LOG_FILE_NAME: &str = "asn.log";

const ENV_VERBOSE: &str = "RECON_VERBOSE";
const ENV_AMASS_BIN: &str = "RECON_AMASS_BIN";
const ENV_ECHO_UNMATCHED: &str = "RECON_ECHO_UNMATCHED";
const ENV_STRICT_ASN: &str = "RECON_STRICT_ASN";
const ENV_LOG_DIR: &str = "RECON_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Most verbose level written to the log.
    pub level: Level,

    /// Program invoked as `<amass_bin> intel -org <name>`.
    pub amass_bin: String,

    /// Echo tokens matching neither pattern while classifying.
    pub echo_unmatched: bool,

    /// Require ASN tokens to be exactly five digits.
    ///
    /// Off by default, in which case only the first five characters must be digits.
    pub strict_asn: bool,

    /// Directory holding the log file. `None` logs to stderr.
    pub log_dir: Option<PathBuf>,

    /// The config file that was read, if any.
    pub config_file: Option<PathBuf>,
}

/// On-disk shape of the YAML config file. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    verbose: Option<String>,
    amass_bin: Option<String>,
    echo_unmatched: Option<bool>,
    strict_asn: Option<bool>,
    log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults(dirs::home_dir().as_deref())
    }
}

impl Config {
    /// Built-in defaults relative to the given home directory.
    pub fn defaults(home: Option<&Path>) -> Self {
        Self {
            level: Level::WARN,
            amass_bin: DEFAULT_AMASS_BIN.to_string(),
            echo_unmatched: false,
            strict_asn: false,
            log_dir: home.map(|h| h.join(".recon").join("log")),
            config_file: None,
        }
    }

    /// Resolves defaults, config file and environment for the current process.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(explicit, dirs::home_dir().as_deref(), |key| {
            std::env::var(key).ok()
        })
    }

    /// Same as [`Config::load`] with the home directory and environment injected.
    ///
    /// An explicitly named file must exist. The default `$HOME/.recon.yaml`
    /// is optional.
    pub fn load_with<F>(
        explicit: Option<&Path>,
        home: Option<&Path>,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::defaults(home);

        let file: Option<PathBuf> = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => home
                .map(|h| h.join(CONFIG_FILE_NAME))
                .filter(|path| path.is_file()),
        };

        if let Some(path) = file {
            let file_cfg = read_file(&path)?;
            cfg.apply_file(file_cfg)?;
            cfg.config_file = Some(path);
        }

        cfg.apply_env(env)?;
        Ok(cfg)
    }

    /// Full path of the log file, if file logging is enabled.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_dir.as_ref().map(|dir| dir.join(LOG_FILE_NAME))
    }

    fn apply_file(&mut self, file: FileConfig) -> Result<(), ConfigError> {
        if let Some(verbose) = file.verbose {
            self.level = parse_level(&verbose)?;
        }
        if let Some(amass_bin) = file.amass_bin {
            self.amass_bin = amass_bin;
        }
        if let Some(echo) = file.echo_unmatched {
            self.echo_unmatched = echo;
        }
        if let Some(strict) = file.strict_asn {
            self.strict_asn = strict;
        }
        if let Some(log_dir) = file.log_dir {
            self.log_dir = Some(log_dir);
        }
        Ok(())
    }

    fn apply_env<F>(&mut self, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(verbose) = env(ENV_VERBOSE) {
            self.level = parse_level(&verbose)?;
        }
        if let Some(amass_bin) = env(ENV_AMASS_BIN) {
            self.amass_bin = amass_bin;
        }
        if let Some(echo) = env(ENV_ECHO_UNMATCHED) {
            self.echo_unmatched = parse_bool(ENV_ECHO_UNMATCHED, &echo)?;
        }
        if let Some(strict) = env(ENV_STRICT_ASN) {
            self.strict_asn = parse_bool(ENV_STRICT_ASN, &strict)?;
        }
        if let Some(log_dir) = env(ENV_LOG_DIR) {
            self.log_dir = Some(PathBuf::from(log_dir));
        }
        Ok(())
    }
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(FileConfig::default());
    }

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a log level name.
///
/// `fatal` and `panic` are accepted as aliases of `error`.
pub fn parse_level(s: &str) -> Result<Level, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" | "fatal" | "panic" => Ok(Level::ERROR),
        _ => Err(ConfigError::InvalidLevel(s.to_string())),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
