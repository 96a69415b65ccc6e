use crate::config::Config;
use crate::models::error::AppError;
use serde::de::DeserializeOwned;

/// Backend endpoints, one per dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Segmentation,
    LoanRisk,
    FeeOptimization,
    ForexSimulator,
}

impl Endpoint {
    /// Path relative to the API host.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Segmentation => "/api/segmentation/",
            Endpoint::LoanRisk => "/api/loan-risk/",
            Endpoint::FeeOptimization => "/api/fee-optimization/",
            Endpoint::ForexSimulator => "/api/forex-simulator-data",
        }
    }

    /// Message shown in place of the page body when the fetch fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Endpoint::Segmentation => "Failed to fetch segmentation data",
            Endpoint::LoanRisk => "Failed to load loan risk data",
            Endpoint::FeeOptimization => "Failed to load fee optimization data",
            Endpoint::ForexSimulator => "Failed to load forex simulator data",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

// API CONFIGURATION
/// Configuration for the dashboard API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Constructs the full URL for an endpoint.
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::API_BASE_URL.to_string()),
        }
    }
}

// DASHBOARD CLIENT
/// HTTP client for the analytics backend.
pub struct DashboardClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl DashboardClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Executes a single GET against `endpoint` and decodes the body.
    pub async fn fetch_endpoint<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
    ) -> Result<T, AppError> {
        let url = self.config.url(endpoint);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response body: {e}")))?;

        decode_body(&body)
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Network(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::Network(format!("Request error: {error}"))
        } else {
            AppError::Network(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        AppError::HttpStatus {
            status: status.as_u16(),
            body: body.to_string(),
        }
    }
}

/// Parses a response body, keeping decode failures distinct from transport ones.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, AppError> {
    serde_json::from_str(body)
        .map_err(|e| AppError::Parse(format!("Failed to parse response: {e}")))
}

// CONVENIENCE FUNCTIONS
/// Fetches `endpoint` using default configuration.
pub async fn fetch_endpoint<T: DeserializeOwned>(endpoint: Endpoint) -> Result<T, AppError> {
    DashboardClient::new()?.fetch_endpoint(endpoint).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::loan_risk::LoanRiskResponse;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Segmentation.path(), "/api/segmentation/");
        assert_eq!(Endpoint::LoanRisk.path(), "/api/loan-risk/");
        assert_eq!(Endpoint::FeeOptimization.path(), "/api/fee-optimization/");
        assert_eq!(Endpoint::ForexSimulator.path(), "/api/forex-simulator-data");
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url(), Config::API_BASE_URL);
    }

    #[test]
    fn test_url_construction_trims_trailing_slash() {
        let config = ApiConfig::builder()
            .base_url("https://analytics.example.com/")
            .build();

        assert_eq!(
            config.url(Endpoint::LoanRisk),
            "https://analytics.example.com/api/loan-risk/"
        );
        assert_eq!(
            config.url(Endpoint::ForexSimulator),
            "https://analytics.example.com/api/forex-simulator-data"
        );
    }

    #[test]
    fn test_client_creation() {
        let client = DashboardClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_decode_failure_is_parse_error() {
        let result: Result<LoanRiskResponse, _> = decode_body("<html>502 Bad Gateway</html>");
        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
        assert!(err.is_fetch_failure());
    }

    #[test]
    fn test_decode_missing_required_field_is_parse_error() {
        let result: Result<LoanRiskResponse, _> = decode_body(r#"{"loans": []}"#);
        assert!(matches!(result, Err(AppError::Parse(_))));
    }

    #[test]
    fn test_error_for_status_keeps_status_and_body() {
        let client = DashboardClient::new().unwrap();
        let err = client.error_for_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "boom");

        assert!(err.is_fetch_failure());
        assert_eq!(err.to_string(), "HTTP error 500: boom");
    }
}
