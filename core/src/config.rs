//! Client configuration.
//!
//! The base address is an explicit value handed to `NotesClient`; nothing
//! reads the environment behind the caller's back.

/// Environment variable holding the service base address.
pub const BASE_URL_ENV: &str = "NOTES_API_BASE";

/// Used when `NOTES_API_BASE` is unset or blank.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base address from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, against an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(v) = lookup(BASE_URL_ENV) {
            let v = v.trim();
            if !v.is_empty() {
                config.base_url = v.to_string();
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_loopback() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_base_url_from_lookup() {
        let config = ClientConfig::from_lookup(|key| {
            (key == BASE_URL_ENV).then(|| "https://notes.example.com".to_string())
        });
        assert_eq!(config.base_url, "https://notes.example.com");
    }

    #[test]
    fn blank_value_falls_back_to_default() {
        let config = ClientConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, ClientConfig::default());
    }
}
