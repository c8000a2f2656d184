//! Configuration types for the back-office client.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use num_format::Locale;
use serde::{Deserialize, Deserializer};
use std::time::Duration;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// Default time a toast stays fully visible.
pub const DEFAULT_TOAST_DISPLAY_MS: u64 = 5_000;
/// Default length of the toast fade transition.
pub const DEFAULT_TOAST_FADE_MS: u64 = 300;
/// Default counter animation length.
pub const DEFAULT_COUNTER_DURATION_MS: u64 = 2_000;

/// The complete client configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientConfig {
    /// Backend API settings.
    pub api: ApiConfig,
    /// Toast notification timings.
    #[serde(default)]
    pub notifications: NotificationConfig,
    /// Animated counter settings.
    #[serde(default)]
    pub counter: CounterConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080/api/".to_string(),
                timeout_ms: DEFAULT_TIMEOUT_MS,
                tenant_id: None,
                auth_token: None,
            },
            notifications: NotificationConfig::default(),
            counter: CounterConfig::default(),
        }
    }
}

/// Backend API settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Base URL every service path is resolved against.
    pub base_url: String,
    /// Transport timeout applied to every request.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Tenant sent in the `X-Tenant-Id` header.
    #[serde(default)]
    pub tenant_id: Option<String>,
    /// Bearer token sent in the `Authorization` header.
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl ApiConfig {
    /// Returns the request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Toast notification timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NotificationConfig {
    /// How long a toast stays fully visible.
    #[serde(default = "default_display_ms")]
    pub display_ms: u64,
    /// How long the fade transition lasts before removal.
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u64,
}

impl NotificationConfig {
    /// Returns the visible window as a [`Duration`].
    pub fn display(&self) -> Duration {
        Duration::from_millis(self.display_ms)
    }

    /// Returns the fade window as a [`Duration`].
    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            display_ms: DEFAULT_TOAST_DISPLAY_MS,
            fade_ms: DEFAULT_TOAST_FADE_MS,
        }
    }
}

/// Animated counter settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CounterConfig {
    /// Total animation time.
    #[serde(default = "default_counter_duration_ms")]
    pub duration_ms: u64,
    /// Locale whose grouping and decimal mark are used, by name (`en`, `de`, `en-IN`).
    #[serde(default = "default_locale", deserialize_with = "locale_by_name")]
    pub locale: Locale,
    /// Fraction digits kept when formatting.
    #[serde(default = "default_max_fraction_digits")]
    pub max_fraction_digits: u32,
}

impl CounterConfig {
    /// Returns the animation length as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_COUNTER_DURATION_MS,
            locale: default_locale(),
            max_fraction_digits: default_max_fraction_digits(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_display_ms() -> u64 {
    DEFAULT_TOAST_DISPLAY_MS
}

fn default_fade_ms() -> u64 {
    DEFAULT_TOAST_FADE_MS
}

fn default_counter_duration_ms() -> u64 {
    DEFAULT_COUNTER_DURATION_MS
}

fn default_locale() -> Locale {
    Locale::en
}

fn locale_by_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Locale, D::Error> {
    let name = String::deserialize(deserializer)?;
    Locale::from_name(&name).map_err(|e| {
        serde::de::Error::custom(format!("unknown locale '{}': {}", name, e))
    })
}

fn default_max_fraction_digits() -> u32 {
    3
}
