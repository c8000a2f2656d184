//! Configuration loading for the back-office client.
//!
//! This module loads the client configuration from a YAML file: the API
//! endpoint, toast notification timings, and animated counter formatting.
//!
//! # Example
//!
//! ```no_run
//! use backoffice_client::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/client.yaml").unwrap().into_config();
//! println!("Toasts stay visible for {} ms", config.notifications.display_ms);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ApiConfig, ClientConfig, CounterConfig, DEFAULT_COUNTER_DURATION_MS, DEFAULT_TIMEOUT_MS,
    DEFAULT_TOAST_DISPLAY_MS, DEFAULT_TOAST_FADE_MS, NotificationConfig,
};
