//! Client configuration shared by every transport.

/// API prefix used when nothing else is configured.
pub const DEFAULT_API_BASE: &str = "/api";

/// Where the REST API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base URL or path prefix; endpoint paths are appended to it.
    pub api_base: String,
}

impl Config {
    /// Build a config from an optional override, falling back to [`DEFAULT_API_BASE`].
    #[must_use]
    pub fn from_override(api_base: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE);
        Self { api_base: api_base.trim_end_matches('/').to_owned() }
    }

    /// Join an endpoint path such as `/todos/` onto the base.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_override(None)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
