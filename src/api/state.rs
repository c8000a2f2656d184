//! Application state for the back-office client.
//!
//! This module defines the shared state a host creates once at startup and
//! hands to every screen that talks to the API.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::pipeline::{RequestActivity, RequestPipeline, ToastHost};

use super::client::ApiClient;
use super::payroll::PayrollService;
use super::shifts::ShiftService;

/// Shared application state.
///
/// Holds the configuration, the single request pipeline (and with it the
/// process-wide in-flight counter), and the data-access services. Clones are
/// cheap and share everything.
///
/// # Example
///
/// ```
/// use backoffice_client::api::AppState;
/// use backoffice_client::config::ClientConfig;
/// use backoffice_client::pipeline::ToastBoard;
/// use std::sync::Arc;
///
/// let state = AppState::new(ClientConfig::default(), Arc::new(ToastBoard::new()))?;
/// assert!(!state.activity().is_loading());
/// # Ok::<(), backoffice_client::error::ClientError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<ClientConfig>,
    client: ApiClient,
    payroll: PayrollService,
    shifts: ShiftService,
}

impl AppState {
    /// Builds the state, showing request failures on `toasts`.
    pub fn new(config: ClientConfig, toasts: Arc<dyn ToastHost>) -> ClientResult<Self> {
        let pipeline = RequestPipeline::with_host(toasts, config.notifications);
        let client = ApiClient::new(&config.api, pipeline)?;

        Ok(Self {
            config: Arc::new(config),
            payroll: PayrollService::new(client.clone()),
            shifts: ShiftService::new(client.clone()),
            client,
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the API client, for endpoints without a dedicated service.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Returns the in-flight request counter driving the loading indicator.
    pub fn activity(&self) -> &RequestActivity {
        self.client.pipeline().activity()
    }

    /// Returns the payroll service.
    pub fn payroll(&self) -> &PayrollService {
        &self.payroll
    }

    /// Returns the shift service.
    pub fn shifts(&self) -> &ShiftService {
        &self.shifts
    }
}
