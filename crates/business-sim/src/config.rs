use std::{env, fmt};

use ui::WindowOptions;

const ENV_WIDTH_KEY: &str = "BUSINESS_SIM_WINDOW_WIDTH";
const ENV_HEIGHT_KEY: &str = "BUSINESS_SIM_WINDOW_HEIGHT";
const ENV_LOG_KEY: &str = "BUSINESS_SIM_LOG";

const DEFAULT_LOG_OUTPUT: LogOutput = LogOutput::Json;
const MAX_WINDOW_DIMENSION: f32 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Json,
    Off,
}

impl LogOutput {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "json" => Some(Self::Json),
            "off" => Some(Self::Off),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub window: WindowOptions,
    pub log_output: LogOutput,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidWindowWidth,
    InvalidWindowHeight,
    InvalidLogOutput,
    NonUnicodeWindowWidth,
    NonUnicodeWindowHeight,
    NonUnicodeLogOutput,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWindowWidth => write!(
                f,
                "{ENV_WIDTH_KEY} must be a finite size between 0 and {MAX_WINDOW_DIMENSION}"
            ),
            Self::InvalidWindowHeight => write!(
                f,
                "{ENV_HEIGHT_KEY} must be a finite size between 0 and {MAX_WINDOW_DIMENSION}"
            ),
            Self::InvalidLogOutput => write!(f, "{ENV_LOG_KEY} must be one of: json, off"),
            Self::NonUnicodeWindowWidth => write!(f, "{ENV_WIDTH_KEY} contains non-unicode data"),
            Self::NonUnicodeWindowHeight => {
                write!(f, "{ENV_HEIGHT_KEY} contains non-unicode data")
            }
            Self::NonUnicodeLogOutput => write!(f, "{ENV_LOG_KEY} contains non-unicode data"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = WindowOptions::default();

        let width = parse_dimension_env(
            ENV_WIDTH_KEY,
            defaults.width,
            ConfigError::InvalidWindowWidth,
            ConfigError::NonUnicodeWindowWidth,
        )?;

        let height = parse_dimension_env(
            ENV_HEIGHT_KEY,
            defaults.height,
            ConfigError::InvalidWindowHeight,
            ConfigError::NonUnicodeWindowHeight,
        )?;

        let log_output = match env::var(ENV_LOG_KEY) {
            Ok(value) => LogOutput::parse(value.trim()).ok_or(ConfigError::InvalidLogOutput)?,
            Err(env::VarError::NotPresent) => DEFAULT_LOG_OUTPUT,
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicodeLogOutput);
            }
        };

        Ok(Self {
            window: WindowOptions { width, height },
            log_output,
        })
    }
}

fn parse_dimension_env(
    key: &str,
    default_value: f32,
    invalid_error: ConfigError,
    non_unicode_error: ConfigError,
) -> Result<f32, ConfigError> {
    match env::var(key) {
        Ok(value) => {
            let parsed = match value.trim().parse::<f32>() {
                Ok(parsed) => parsed,
                Err(_) => return Err(invalid_error),
            };
            if !parsed.is_finite() || parsed <= 0.0 || parsed > MAX_WINDOW_DIMENSION {
                return Err(invalid_error);
            }
            Ok(parsed)
        }
        Err(env::VarError::NotPresent) => Ok(default_value),
        Err(env::VarError::NotUnicode(_)) => Err(non_unicode_error),
    }
}
