//! Harness configuration.
//!
//! Settings come from environment variables with fixed defaults, so the
//! binary runs without flags against `http://localhost:8080/`. Values are
//! read with strict UTF-8 enforcement and empty values are rejected rather
//! than silently ignored.

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Base address used when `TASKCHECK_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// Environment keys read by [`HarnessConfig::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessEnv {
    /// Base address of the service under test.
    BaseUrl,
    /// Optional request timeout in seconds (positive integer).
    TimeoutSeconds,
    /// Disables colored output when set to any non-empty value.
    NoColor,
}

impl HarnessEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "TASKCHECK_BASE_URL",
            Self::TimeoutSeconds => "TASKCHECK_TIMEOUT_SECS",
            Self::NoColor => "NO_COLOR",
        }
    }
}

/// Errors raised while reading the configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable holds bytes that are not UTF-8.
    #[error("{0} must be valid UTF-8")]
    NotUnicode(&'static str),

    /// A variable is set but empty.
    #[error("{0} must not be empty")]
    Empty(&'static str),

    /// The base address does not parse as an http(s) URL.
    #[error("{name} is not a valid http(s) URL: {reason}")]
    InvalidUrl {
        /// Variable name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The timeout is not a positive whole number of seconds.
    #[error("{0} must be a positive integer number of seconds")]
    InvalidTimeout(&'static str),
}

/// Typed harness configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Base address every probe path is resolved against.
    pub base_url: Url,
    /// Optional per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Whether the console report is colored.
    pub color: bool,
}

impl HarnessConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is not valid UTF-8, is empty, or
    /// fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(read_env_strict)
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns an error when a value is empty or fails validation, or when
    /// the lookup itself fails.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(HarnessEnv) -> Result<Option<String>, ConfigError>,
    {
        let nonempty = |key: HarnessEnv| -> Result<Option<String>, ConfigError> {
            match lookup(key)? {
                Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(key.as_str())),
                other => Ok(other),
            }
        };

        let base_url = nonempty(HarnessEnv::BaseUrl)?.map_or_else(default_base_url, |raw| {
            parse_base_url(HarnessEnv::BaseUrl.as_str(), &raw)
        })?;
        let timeout = nonempty(HarnessEnv::TimeoutSeconds)?
            .map(|raw| parse_timeout_seconds(HarnessEnv::TimeoutSeconds.as_str(), &raw))
            .transpose()?;
        // NO_COLOR only needs to be present; an empty value is not an error.
        let color = !lookup(HarnessEnv::NoColor)?.is_some_and(|v| !v.is_empty());

        Ok(Self {
            base_url,
            timeout,
            color,
        })
    }
}

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns an error when the environment variable contains invalid UTF-8.
pub fn read_env_strict(key: HarnessEnv) -> Result<Option<String>, ConfigError> {
    std::env::var_os(key.as_str()).map_or(Ok(None), |raw| {
        raw.into_string()
            .map(Some)
            .map_err(|_| ConfigError::NotUnicode(key.as_str()))
    })
}

fn default_base_url() -> Result<Url, ConfigError> {
    parse_base_url(HarnessEnv::BaseUrl.as_str(), DEFAULT_BASE_URL)
}

/// Parses an http(s) base address.
fn parse_base_url(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
        name,
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl {
            name,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}

/// Parses a positive timeout value.
fn parse_timeout_seconds(name: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidTimeout(name))?;
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout(name));
    }
    Ok(Duration::from_secs(secs))
}
