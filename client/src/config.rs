//! Client configuration resolved once at startup.
//!
//! Values are baked in at build time from the environment `trunk` runs in, so
//! a deployed bundle always talks to the service it was built for.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8900";
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 1000;
pub const DEFAULT_TYPESETTER_SRC: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/mathjax/2.7.9/MathJax.js?config=TeX-MML-AM_CHTML";

/// A build-time configuration value that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("CALC_API_URL is empty")]
    EmptyBaseUrl,

    #[error("invalid CALC_REVEAL_DELAY_MS '{0}': expected whole milliseconds")]
    RevealDelay(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Recognition service root, without a trailing slash.
    pub api_base_url: String,
    /// Delay before each result of a batch is revealed.
    pub reveal_delay_ms: u32,
    /// Script URL of the math typesetter.
    pub typesetter_src: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            typesetter_src: DEFAULT_TYPESETTER_SRC.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build typed config from build-time environment variables.
    ///
    /// Optional:
    /// - `CALC_API_URL`: recognition service root, default `http://localhost:8900`
    /// - `CALC_REVEAL_DELAY_MS`: default 1000
    /// - `CALC_MATHJAX_SRC`: typesetter script URL, default MathJax 2.7.9 from cdnjs
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set but unusable.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("CALC_API_URL"),
            option_env!("CALC_REVEAL_DELAY_MS"),
            option_env!("CALC_MATHJAX_SRC"),
        )
    }

    /// Build config from raw optional values; `None` selects the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the base URL is blank or the delay is not a
    /// non-negative integer.
    pub fn from_values(
        api_base_url: Option<&str>,
        reveal_delay_ms: Option<&str>,
        typesetter_src: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = match api_base_url {
            Some(raw) => {
                let trimmed = raw.trim().trim_end_matches('/');
                if trimmed.is_empty() {
                    return Err(ConfigError::EmptyBaseUrl);
                }
                trimmed.to_owned()
            }
            None => DEFAULT_API_BASE_URL.to_owned(),
        };
        let reveal_delay_ms = match reveal_delay_ms {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::RevealDelay(raw.to_owned()))?,
            None => DEFAULT_REVEAL_DELAY_MS,
        };
        let typesetter_src = typesetter_src.map_or_else(|| DEFAULT_TYPESETTER_SRC.to_owned(), str::to_owned);

        Ok(Self { api_base_url, reveal_delay_ms, typesetter_src })
    }
}

/// Resolve the startup config, falling back to defaults (with a warning) when
/// the build environment carried an unusable value.
pub fn load() -> ClientConfig {
    match ClientConfig::from_build_env() {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("{e}; using default client config");
            ClientConfig::default()
        }
    }
}
