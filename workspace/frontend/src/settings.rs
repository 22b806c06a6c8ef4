use log::Level;
use loan_common::SessionContext;
use web_sys::window;

const STORAGE_PREFIX: &str = "loanrisk_";

/// Session storage key the authentication layer writes the signed-in user to.
pub const SESSION_USER_KEY: &str = "loanrisk_user";

/// Global application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Backend API host (e.g., "localhost" or "api.example.com")
    pub api_host: String,

    /// Backend API port
    pub api_port: u16,

    /// Path prefix of the prediction endpoints
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// Toast notification duration in milliseconds
    pub toast_duration_ms: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 8000,
            api_path: "/api/predictions".to_string(),
            api_use_https: false,
            log_level: Level::Info,
            debug_mode: false,
            toast_duration_ms: 5000,
        }
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

impl AppSettings {
    /// Create settings from the window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            settings.apply_overrides(|key| {
                storage
                    .get_item(&format!("{}{}", STORAGE_PREFIX, key))
                    .ok()
                    .flatten()
            });
        }

        settings
    }

    /// Apply overrides from a key/value source. Unparseable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_host) = lookup("api_host") {
            self.api_host = api_host;
        }
        if let Some(port) = lookup("api_port").and_then(|v| v.parse::<u16>().ok()) {
            self.api_port = port;
        }
        if let Some(api_path) = lookup("api_path") {
            self.api_path = api_path;
        }
        if let Some(use_https) = lookup("api_use_https") {
            self.api_use_https = use_https.to_lowercase() == "true";
        }
        if let Some(level) = lookup("log_level").as_deref().and_then(parse_level) {
            self.log_level = level;
        }
        if let Some(duration) = lookup("toast_duration_ms").and_then(|v| v.parse::<u32>().ok()) {
            self.toast_duration_ms = duration;
        }
    }

    /// Get the backend origin (protocol + host + port)
    pub fn api_origin(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}", protocol, self.api_host, self.api_port)
    }

    /// Get the base API URL (origin + prediction path prefix)
    pub fn api_base_url(&self) -> String {
        format!("{}{}", self.api_origin(), self.api_path)
    }

    /// Get the full API URL for an endpoint
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base_url(), endpoint)
    }
}

/// Read the signed-in user the authentication layer left in sessionStorage.
pub fn load_session() -> SessionContext {
    let raw = window()
        .and_then(|window| window.session_storage().ok().flatten())
        .and_then(|storage| storage.get_item(SESSION_USER_KEY).ok().flatten());
    SessionContext::from_stored_json(raw.as_deref())
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_endpoints() {
        let settings = AppSettings::default();
        assert_eq!(settings.api_origin(), "http://localhost:8000");
        assert_eq!(
            settings.api_url("/history"),
            "http://localhost:8000/api/predictions/history"
        );
        assert_eq!(
            settings.api_url("/predict"),
            "http://localhost:8000/api/predictions/predict"
        );
    }

    #[test]
    fn test_overrides() {
        let stored: HashMap<&str, &str> = HashMap::from([
            ("api_host", "risk.example.com"),
            ("api_port", "8443"),
            ("api_use_https", "TRUE"),
            ("log_level", "warn"),
            ("toast_duration_ms", "not-a-number"),
        ]);

        let mut settings = AppSettings::default();
        settings.apply_overrides(|key| stored.get(key).map(|v| v.to_string()));

        assert_eq!(
            settings.api_url("/history"),
            "https://risk.example.com:8443/api/predictions/history"
        );
        assert_eq!(settings.log_level, Level::Warn);
        assert_eq!(settings.toast_duration_ms, 5000);
    }
}
