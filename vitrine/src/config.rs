//! Site configuration.
//!
//! Every value has a default matching the live site, so an empty JSON object
//! (or no file at all) is a valid configuration.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use vitrine::config::SiteConfig;
//!
//! let config = SiteConfig::from_json(r#"{ "timing": { "submit_delay_ms": 500 } }"#).unwrap();
//! assert_eq!(config.timing.submit_delay(), Duration::from_millis(500));
//! assert_eq!(config.timing.success_banner(), Duration::from_secs(8));
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration for a [`Site`](crate::site::Site).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub form: FormConfig,
    pub timing: TimingConfig,
    pub scroll: ScrollConfig,
    pub transport: TransportConfig,
}

impl SiteConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Sets the submission endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.transport.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the simulated submission delay.
    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.timing.submit_delay_ms = millis(delay);
        self
    }
}

/// Contact form settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Id of the contact form element.
    pub form_id: String,
    /// Id of the message textarea.
    pub message_id: String,
    /// Id of the character counter.
    pub counter_id: String,
    /// Minimum length of the `name` field.
    pub name_min_length: usize,
    /// Counter turns amber above this many characters.
    pub counter_warn: usize,
    /// Counter turns red above this many characters.
    pub counter_limit: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: "contact-form".to_string(),
            message_id: "message".to_string(),
            counter_id: "char-count".to_string(),
            name_min_length: 2,
            counter_warn: 200,
            counter_limit: 250,
        }
    }
}

/// Timers, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub submit_delay_ms: u64,
    pub success_banner_ms: u64,
    pub error_banner_ms: u64,
    pub banner_fade_ms: u64,
    pub modal_focus_delay_ms: u64,
    pub reveal_stagger_ms: u64,
    pub theme_transition_ms: u64,
    pub frame_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            success_banner_ms: 8000,
            error_banner_ms: 6000,
            banner_fade_ms: 300,
            modal_focus_delay_ms: 100,
            reveal_stagger_ms: 80,
            theme_transition_ms: 300,
            frame_ms: 16,
        }
    }
}

impl TimingConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn success_banner(&self) -> Duration {
        Duration::from_millis(self.success_banner_ms)
    }

    pub fn error_banner(&self) -> Duration {
        Duration::from_millis(self.error_banner_ms)
    }

    pub fn banner_fade(&self) -> Duration {
        Duration::from_millis(self.banner_fade_ms)
    }

    pub fn modal_focus_delay(&self) -> Duration {
        Duration::from_millis(self.modal_focus_delay_ms)
    }

    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }

    pub fn theme_transition(&self) -> Duration {
        Duration::from_millis(self.theme_transition_ms)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

/// Scroll thresholds, in page pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Header switches to its scrolled style past this position.
    pub header_threshold: i32,
    /// Height of the fixed header, subtracted when scrolling to a section.
    pub section_offset: i32,
    /// Look-ahead added to the scroll position when picking the active section.
    pub active_offset: i32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_threshold: 100,
            section_offset: 100,
            active_offset: 150,
        }
    }
}

/// Where submissions go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Backend endpoint. Without one, submissions are simulated.
    pub endpoint: Option<String>,
    /// Request timeout for the HTTP transport.
    pub timeout_ms: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_ms: 10_000,
        }
    }
}

impl TransportConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_defaults_match_site() {
        let config = SiteConfig::default();
        assert_eq!(config.timing.submit_delay(), Duration::from_secs(2));
        assert_eq!(config.timing.success_banner(), Duration::from_secs(8));
        assert_eq!(config.timing.error_banner(), Duration::from_secs(6));
        assert_eq!(config.form.name_min_length, 2);
        assert_eq!(config.scroll.active_offset, 150);
        assert_eq!(config.transport.endpoint, None);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "scroll": { "header_threshold": 40 }, "transport": { "endpoint": "https://example.com/contact" } }"#,
        )
        .unwrap();
        assert_eq!(config.scroll.header_threshold, 40);
        assert_eq!(config.scroll.section_offset, 100);
        assert_eq!(
            config.transport.endpoint.as_deref(),
            Some("https://example.com/contact")
        );
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = SiteConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SiteConfig::load("/nonexistent/vitrine.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/vitrine.json"));
    }

    #[test]
    fn test_builders() {
        let config = SiteConfig::default()
            .with_endpoint("http://localhost:8080")
            .with_submit_delay(Duration::from_millis(250));
        assert_eq!(config.transport.endpoint.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.timing.submit_delay_ms, 250);
    }
}
