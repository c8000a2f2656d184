//! HTTP client for the back-office REST API.
//!
//! This module provides [`ApiClient`], which resolves endpoint paths against
//! the configured base URL and sends every call through the
//! [`RequestPipeline`].

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::pipeline::{RequestFailure, RequestPipeline};

/// Header carrying the tenant the request acts for.
pub const TENANT_HEADER: &str = "x-tenant-id";

/// JSON client for the back-office API.
///
/// Paths are given as segments, which are percent-encoded and appended to
/// the base URL. Clones share the connection pool and the pipeline.
///
/// # Example
///
/// ```no_run
/// use backoffice_client::api::ApiClient;
/// use backoffice_client::config::ClientConfig;
/// use backoffice_client::pipeline::{RequestPipeline, ToastBoard};
/// use std::sync::Arc;
///
/// # async fn run() -> backoffice_client::error::ClientResult<()> {
/// let config = ClientConfig::default();
/// let pipeline = RequestPipeline::with_host(Arc::new(ToastBoard::new()), config.notifications);
/// let client = ApiClient::new(&config.api, pipeline)?;
///
/// let totals: serde_json::Value = client.get(&["reports", "daily"]).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    pipeline: RequestPipeline,
}

impl ApiClient {
    /// Builds a client from the API configuration.
    ///
    /// Returns `InvalidConfig` if the base URL, tenant or token cannot be used.
    pub fn new(config: &ApiConfig, pipeline: RequestPipeline) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| invalid("api.base_url", e))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("api.base_url", "URL cannot hold a path"));
        }

        let mut headers = HeaderMap::new();
        if let Some(tenant) = &config.tenant_id {
            let value = HeaderValue::from_str(tenant).map_err(|e| invalid("api.tenant_id", e))?;
            headers.insert(TENANT_HEADER, value);
        }
        if let Some(token) = &config.auth_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| invalid("api.auth_token", e))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| invalid("api", e))?;

        Ok(Self {
            http,
            base_url,
            pipeline,
        })
    }

    /// Returns the pipeline every request goes through.
    pub fn pipeline(&self) -> &RequestPipeline {
        &self.pipeline
    }

    /// Returns the URL an endpoint resolves to.
    pub fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        self.resolve(segments)
            .map_err(|_| invalid("api.base_url", "URL cannot hold a path"))
    }

    /// Sends `GET` and decodes the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<T> {
        let request = self.request(Method::GET, segments);
        self.pipeline
            .wrap(async move { decode(dispatch(request).await?).await })
            .await
    }

    /// Sends `GET` with query parameters and decodes the JSON response.
    pub async fn get_with_query<T, Q>(&self, segments: &[&str], query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self
            .request(Method::GET, segments)
            .map(|builder| builder.query(query));
        self.pipeline
            .wrap(async move { decode(dispatch(request).await?).await })
            .await
    }

    /// Sends `POST` with a JSON body and decodes the JSON response.
    pub async fn post<B, T>(&self, segments: &[&str], body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::POST, segments)
            .map(|builder| builder.json(body));
        self.pipeline
            .wrap(async move { decode(dispatch(request).await?).await })
            .await
    }

    /// Sends `POST` without a body and decodes the JSON response.
    pub async fn post_empty<T: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<T> {
        let request = self.request(Method::POST, segments);
        self.pipeline
            .wrap(async move { decode(dispatch(request).await?).await })
            .await
    }

    /// Sends `PUT` with a JSON body and decodes the JSON response.
    pub async fn put<B, T>(&self, segments: &[&str], body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::PUT, segments)
            .map(|builder| builder.json(body));
        self.pipeline
            .wrap(async move { decode(dispatch(request).await?).await })
            .await
    }

    /// Sends `DELETE`, ignoring any response body.
    pub async fn delete(&self, segments: &[&str]) -> ClientResult<()> {
        let request = self.request(Method::DELETE, segments);
        self.pipeline
            .wrap(async move { dispatch(request).await.map(|_| ()) })
            .await
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, RequestFailure> {
        let url = self.resolve(segments)?;
        Ok(self.http.request(method, url))
    }

    fn resolve(&self, segments: &[&str]) -> Result<Url, RequestFailure> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                RequestFailure::transport(format!("base URL '{}' cannot hold a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Sends a request, turning transport errors and non-success statuses into
/// [`RequestFailure`]s.
async fn dispatch(request: Result<RequestBuilder, RequestFailure>) -> Result<Response, RequestFailure> {
    let response = request?
        .send()
        .await
        .map_err(|e| RequestFailure::transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let status_text = status.canonical_reason().unwrap_or("Unknown").to_string();
    let body = response.json::<Value>().await.ok();
    Err(RequestFailure::status(status.as_u16(), status_text, body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, RequestFailure> {
    response
        .json::<T>()
        .await
        .map_err(|e| RequestFailure::transport(e.to_string()))
}

fn invalid(field: &str, message: impl ToString) -> ClientError {
    ClientError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientConfig, NotificationConfig};
    use crate::pipeline::ToastBoard;
    use std::sync::Arc;

    fn client_for(base_url: &str) -> ClientResult<ApiClient> {
        let mut config = ClientConfig::default();
        config.api.base_url = base_url.to_string();
        let pipeline =
            RequestPipeline::with_host(Arc::new(ToastBoard::new()), NotificationConfig::default());
        ApiClient::new(&config.api, pipeline)
    }

    #[test]
    fn test_endpoint_with_trailing_slash() {
        let client = client_for("http://localhost:8080/api/").unwrap();
        let url = client.endpoint(&["payroll", "pay_001"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/payroll/pay_001");
    }

    #[test]
    fn test_endpoint_without_trailing_slash() {
        let client = client_for("http://localhost:8080/api").unwrap();
        let url = client.endpoint(&["shifts"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/shifts");
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = client_for("http://localhost:8080/").unwrap();
        let url = client.endpoint(&["shifts", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/shifts/a%2Fb%20c");
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        assert!(matches!(
            client_for("mailto:payroll@example.com"),
            Err(ClientError::InvalidConfig { .. })
        ));
        assert!(matches!(
            client_for("::"),
            Err(ClientError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_rejects_header_unsafe_tenant() {
        let mut config = ClientConfig::default();
        config.api.tenant_id = Some("bad\ntenant".to_string());
        let pipeline =
            RequestPipeline::with_host(Arc::new(ToastBoard::new()), NotificationConfig::default());

        match ApiClient::new(&config.api, pipeline) {
            Err(ClientError::InvalidConfig { field, .. }) => assert_eq!(field, "api.tenant_id"),
            other => panic!("Expected InvalidConfig, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        let client = client_for(&format!("http://127.0.0.1:{}/api/", port)).unwrap();

        let result: ClientResult<Value> = client.get(&["payroll"]).await;

        assert!(matches!(result, Err(ClientError::Transport { .. })));
        assert_eq!(client.pipeline().activity().active_count(), 0);
    }
}
