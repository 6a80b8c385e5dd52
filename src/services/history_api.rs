use crate::config::Config;
use crate::models::{error::AppError, history::HistoryResponse};

// CONSTANTS
const BASE_URL: &str = "https://api.electricitymap.org/v3";
const DEFAULT_ZONE: &str = Config::ZONE;
const AUTH_HEADER: &str = "auth-token";

/// Electricity Maps zone identifier, e.g. `PT` or `US-CAL-CISO`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Zone(String);

impl Zone {
    /// Returns the code used in API URLs.
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Default for Zone {
    fn default() -> Self {
        Self(DEFAULT_ZONE.to_string())
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Zone {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        let valid = !code.is_empty()
            && !code.starts_with('-')
            && !code.ends_with('-')
            && code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-');

        if valid {
            Ok(Self(code))
        } else {
            Err(AppError::ConfigError(format!("Invalid zone code: {s}")))
        }
    }
}

// API CONFIGURATION
/// Configuration for the Electricity Maps history client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    zone: Zone,
    auth_token: Option<String>,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// URL of the carbon intensity history endpoint.
    pub fn carbon_intensity_history_url(&self) -> String {
        self.history_url("carbon-intensity")
    }

    /// URL of the power breakdown history endpoint.
    pub fn power_breakdown_history_url(&self) -> String {
        self.history_url("power-breakdown")
    }

    fn history_url(&self, resource: &str) -> String {
        format!(
            "{}/{resource}/history?zone={}",
            self.base_url.trim_end_matches('/'),
            self.zone.code()
        )
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
    zone: Option<Zone>,
    auth_token: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing or a proxy).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn zone(mut self, zone: Zone) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Sets the token sent in the `auth-token` header.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Builds the `ApiConfig`, falling back to the build-time token.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
            zone: self.zone.unwrap_or_default(),
            auth_token: self
                .auth_token
                .or_else(|| Config::AUTH_TOKEN.map(str::to_string))
                .filter(|t| !t.is_empty()),
        }
    }
}

// HISTORY CLIENT
/// HTTP client for the Electricity Maps history endpoints.
pub struct HistoryClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HistoryClient {
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

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the carbon intensity history. `Ok(None)` means the API returned nothing.
    pub async fn fetch_carbon_intensity_history(
        &self,
    ) -> Result<Option<HistoryResponse>, AppError> {
        self.fetch(&self.config.carbon_intensity_history_url())
            .await
    }

    /// Fetches the power breakdown history, which carries `renewablePercentage`.
    pub async fn fetch_power_breakdown_history(
        &self,
    ) -> Result<Option<HistoryResponse>, AppError> {
        self.fetch(&self.config.power_breakdown_history_url())
            .await
    }

    /// Executes a single fetch attempt.
    async fn fetch(&self, url: &str) -> Result<Option<HistoryResponse>, AppError> {
        let mut request = self.http.get(url);
        if let Some(token) = self.config.auth_token() {
            request = request.header(AUTH_HEADER, token);
        }

        let response = request.send().await.map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))?;

        HistoryResponse::from_json(body)
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            429 => AppError::RateLimited,
            401 | 403 => AppError::AuthError(format!("Authentication failed: {status}")),
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches carbon intensity history for a zone using default configuration.
pub async fn fetch_carbon_intensity_history(
    zone: &Zone,
) -> Result<Option<HistoryResponse>, AppError> {
    let config = ApiConfig::builder().zone(zone.clone()).build();
    HistoryClient::with_config(config)?
        .fetch_carbon_intensity_history()
        .await
}

/// Fetches power breakdown history for a zone using default configuration.
pub async fn fetch_power_breakdown_history(
    zone: &Zone,
) -> Result<Option<HistoryResponse>, AppError> {
    let config = ApiConfig::builder().zone(zone.clone()).build();
    HistoryClient::with_config(config)?
        .fetch_power_breakdown_history()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_parsing() {
        assert_eq!("PT".parse::<Zone>().unwrap().code(), "PT");
        assert_eq!("pt".parse::<Zone>().unwrap().code(), "PT");
        assert_eq!("us-cal-ciso".parse::<Zone>().unwrap().code(), "US-CAL-CISO");
        assert!("".parse::<Zone>().is_err());
        assert!("P T".parse::<Zone>().is_err());
        assert!("-PT".parse::<Zone>().is_err());
    }

    #[test]
    fn test_default_zone_is_portugal() {
        assert_eq!(Zone::default().code(), "PT");
        assert_eq!(ApiConfig::default().zone().code(), "PT");
    }

    #[test]
    fn test_carbon_intensity_url_construction() {
        let config = ApiConfig::builder().build();
        assert_eq!(
            config.carbon_intensity_history_url(),
            "https://api.electricitymap.org/v3/carbon-intensity/history?zone=PT"
        );
    }

    #[test]
    fn test_power_breakdown_url_construction() {
        let config = ApiConfig::builder()
            .base_url("http://localhost:8080/v3/")
            .zone("ES".parse().unwrap())
            .build();
        assert_eq!(
            config.power_breakdown_history_url(),
            "http://localhost:8080/v3/power-breakdown/history?zone=ES"
        );
    }

    #[test]
    fn test_config_builder_auth_token() {
        let config = ApiConfig::builder().auth_token("secret").build();
        assert_eq!(config.auth_token(), Some("secret"));

        let config = ApiConfig::builder().auth_token("").build();
        assert_eq!(config.auth_token(), None);
    }

    #[test]
    fn test_client_creation() {
        let client = HistoryClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_error_for_status() {
        let client = HistoryClient::new().unwrap();
        assert!(matches!(
            client.error_for_status(reqwest::StatusCode::TOO_MANY_REQUESTS, ""),
            AppError::RateLimited
        ));
        assert!(matches!(
            client.error_for_status(reqwest::StatusCode::UNAUTHORIZED, ""),
            AppError::AuthError(_)
        ));
        assert!(matches!(
            client.error_for_status(reqwest::StatusCode::NOT_FOUND, "missing"),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            client.error_for_status(reqwest::StatusCode::BAD_GATEWAY, "down"),
            AppError::ApiError(_)
        ));
    }
}
