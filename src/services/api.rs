use crate::config::Config;
use crate::models::{
    bill::BillSubmission,
    comparison::{ComparisonQuery, ComparisonResult},
    error::AppError,
    explorer::ExplorerDataset,
};
use crate::services::timeout::with_timeout;
use serde::Deserialize;
use serde::de::DeserializeOwned;

// CONSTANTS
const BILLS_PATH: &str = "/api/bills";
const COMPARE_PATH: &str = "/api/compare";

pub const SUBMIT_FALLBACK: &str = "Submission failed.";
pub const COMPARE_FALLBACK: &str = "Comparison failed.";
pub const DATASET_FALLBACK: &str = "Failed to fetch data";

// API CONFIGURATION
/// Configuration for the BillWise backend client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    timeout_ms: u32,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// Endpoint for submitting and listing bills.
    pub fn bills_url(&self) -> String {
        format!("{}{BILLS_PATH}", self.base_url)
    }

    pub fn compare_url(&self) -> String {
        format!("{}{COMPARE_PATH}", self.base_url)
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
    timeout_ms: Option<u32>,
}

impl ApiConfigBuilder {
    /// Sets a custom backend origin (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| Config::API_BASE_URL.to_string());

        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_ms: self.timeout_ms.unwrap_or(Config::REQUEST_TIMEOUT_MS),
        }
    }
}

// API RESPONSE TYPES
#[derive(Deserialize, Debug, Default)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Error for a non-2xx response: the body's `message`, else `fallback`.
pub fn server_error(body: &str, fallback: &str) -> AppError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty());

    AppError::Server(message.unwrap_or_else(|| fallback.to_string()))
}

// BILLWISE CLIENT
/// HTTP client for the BillWise backend.
pub struct BillwiseClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl BillwiseClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Builds `POST /api/bills` with the bill as its JSON body.
    pub fn submit_request(&self, bill: &BillSubmission) -> Result<reqwest::Request, AppError> {
        self.http
            .post(self.config.bills_url())
            .json(bill)
            .build()
            .map_err(Self::build_error)
    }

    /// Builds `GET /api/compare?provider=&city=&amount=&units=`.
    pub fn compare_request(&self, query: &ComparisonQuery) -> Result<reqwest::Request, AppError> {
        self.http
            .get(self.config.compare_url())
            .query(query)
            .build()
            .map_err(Self::build_error)
    }

    pub fn dataset_request(&self) -> Result<reqwest::Request, AppError> {
        self.http
            .get(self.config.bills_url())
            .build()
            .map_err(Self::build_error)
    }

    /// Submits a bill. The success body carries nothing we use.
    pub async fn submit_bill(&self, bill: &BillSubmission) -> Result<(), AppError> {
        let request = self.submit_request(bill)?;

        with_timeout(
            async {
                self.send(request, SUBMIT_FALLBACK).await?;
                Ok(())
            },
            self.config.timeout_ms,
        )
        .await
    }

    /// Compares a bill against the community data for its provider and city.
    pub async fn compare(&self, query: &ComparisonQuery) -> Result<ComparisonResult, AppError> {
        let request = self.compare_request(query)?;

        with_timeout(
            async {
                let response = self.send(request, COMPARE_FALLBACK).await?;
                Self::decode(response).await
            },
            self.config.timeout_ms,
        )
        .await
    }

    /// Fetches the aggregate dataset shown by the explorer.
    pub async fn fetch_dataset(&self) -> Result<ExplorerDataset, AppError> {
        let request = self.dataset_request()?;

        with_timeout(
            async {
                let response = self.send(request, DATASET_FALLBACK).await?;
                Self::decode(response).await
            },
            self.config.timeout_ms,
        )
        .await
    }

    /// Executes a single request, mapping non-2xx responses to errors.
    async fn send(
        &self,
        request: reqwest::Request,
        fallback: &str,
    ) -> Result<reqwest::Response, AppError> {
        let label = format!("{} {}", request.method(), request.url().path());
        gloo::console::log!(format!("{label} - sending"));

        let response = self
            .http
            .execute(request)
            .await
            .map_err(Self::classify_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = server_error(&body, fallback);
            gloo::console::error!(format!("{label} - {status}: {error}"));
            return Err(error);
        }

        gloo::console::log!(format!("{label} - {status}"));
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        response
            .json()
            .await
            .map_err(|e| AppError::Data(e.to_string()))
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(error: reqwest::Error) -> AppError {
        if error.is_decode() {
            AppError::Data(error.to_string())
        } else {
            AppError::Network(error.to_string())
        }
    }

    fn build_error(error: reqwest::Error) -> AppError {
        AppError::Config(format!("Failed to build request: {error}"))
    }
}

// CONVENIENCE FUNCTIONS
/// Submits a bill using default configuration.
pub async fn submit_bill(bill: BillSubmission) -> Result<(), AppError> {
    BillwiseClient::new()?.submit_bill(&bill).await
}

/// Runs a comparison using default configuration.
pub async fn compare(query: ComparisonQuery) -> Result<ComparisonResult, AppError> {
    BillwiseClient::new()?.compare(&query).await
}

/// Fetches the explorer dataset using default configuration.
pub async fn fetch_dataset() -> Result<ExplorerDataset, AppError> {
    BillwiseClient::new()?.fetch_dataset().await
}
