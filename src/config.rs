//! Page configuration: endpoint paths, DOM ids, navigation targets.
//!
//! Defaults match the backend's routes and templates. A page may override a
//! few values through `data-*` attributes on `<body>`:
//!
//! - `data-api-base`: prefix for API paths (empty, `/path`, or `http(s)://...`)
//! - `data-log-level`: `error`, `warn` (default), `info`, `debug`, or `trace`
//!
//! Keys are parsed independently: a malformed value keeps that key's default
//! and is reported, while the other keys still apply.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Warn;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid log level '{0}'")]
    InvalidLogLevel(String),
    #[error("invalid api base '{0}' (expected empty, an absolute path, or an http(s) URL)")]
    InvalidApiBase(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEndpoints {
    /// Prefix joined onto every API path. Empty means same origin, root.
    pub base: String,
    pub me: String,
    pub login: String,
    pub register: String,
}

impl ApiEndpoints {
    /// Join `path` onto the base without doubling the slash.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self {
            base: String::new(),
            me: "/auth/me".to_owned(),
            login: "/auth/login".to_owned(),
            register: "/auth/register".to_owned(),
        }
    }
}

/// Element ids the server-rendered templates use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementIds {
    pub navbar: String,
    pub login_form: String,
    pub login_message: String,
    pub register_form: String,
    pub register_message: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            navbar: "nav-user".to_owned(),
            login_form: "login-form".to_owned(),
            login_message: "login-msg".to_owned(),
            register_form: "register-form".to_owned(),
            register_message: "register-msg".to_owned(),
        }
    }
}

/// Page-level navigation targets. These are never prefixed with the API base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavTargets {
    pub login_page: String,
    pub plans_page: String,
    pub logout_action: String,
}

impl Default for NavTargets {
    fn default() -> Self {
        Self {
            login_page: "/ui/login".to_owned(),
            plans_page: "/ui/plans".to_owned(),
            logout_action: "/ui/logout".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiConfig {
    pub endpoints: ApiEndpoints,
    pub elements: ElementIds,
    pub targets: NavTargets,
    /// `localStorage` key for the cached access token.
    pub storage_key: String,
    pub log_level: log::Level,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            endpoints: ApiEndpoints::default(),
            elements: ElementIds::default(),
            targets: NavTargets::default(),
            storage_key: "access_token".to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl UiConfig {
    /// Build config from a key lookup (the browser passes `<body>` data attributes).
    ///
    /// Keys: `api-base`, `log-level`. Missing or blank keys keep defaults.
    /// A malformed key also keeps its default and is returned as a
    /// [`ConfigError`] alongside the config.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();
        if let Some(base) = non_blank(lookup("api-base")) {
            match parse_api_base(&base) {
                Ok(base) => config.endpoints.base = base,
                Err(e) => errors.push(e),
            }
        }
        if let Some(level) = non_blank(lookup("log-level")) {
            match parse_log_level(&level) {
                Ok(level) => config.log_level = level,
                Err(e) => errors.push(e),
            }
        }
        (config, errors)
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_api_base(raw: &str) -> Result<String, ConfigError> {
    let valid = raw.starts_with('/') || raw.starts_with("http://") || raw.starts_with("https://");
    if !valid || raw.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidApiBase(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_log_level(raw: &str) -> Result<log::Level, ConfigError> {
    raw.parse::<log::Level>()
        .map_err(|_| ConfigError::InvalidLogLevel(raw.to_owned()))
}
