//! HTTP client for the symptom-analysis backend
//!
//! One request per analysis, no retries and no session state. The backend
//! fronts an LLM, so `POST /analyze` can legitimately take tens of seconds;
//! the timeout comes from [`BackendConfig`].

use crate::config::BackendConfig;
use crate::error::{Error, Result};
use crate::report::{AnalysisReport, AnalyzeRequest, HealthStatus, ServerStatus};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

/// Error body shape the backend returns for non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    detail: String,
}

/// Client for the analysis backend
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    client: Client,
    config: BackendConfig,
}

impl AnalysisClient {
    /// Create a new client
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(BackendConfig::from_env())
    }

    /// The configuration this client was built with
    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Submit a symptom description for analysis.
    ///
    /// Any 2xx JSON body is accepted; report fields the backend left out
    /// come back as empty strings.
    #[instrument(skip_all, fields(chars = description.len()))]
    pub async fn analyze(&self, description: &str) -> Result<AnalysisReport> {
        // The description is medical free text; it stays out of the logs.
        let url = format!("{}/analyze", self.config.base_url);
        let request = AnalyzeRequest::new(description);

        debug!("Sending analysis request to {}", url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !status.is_success() {
            if let Ok(error) = serde_json::from_str::<ApiErrorBody>(&body) {
                return Err(Error::Api(format!(
                    "backend returned {}: {}",
                    status, error.detail
                )));
            }
            return Err(Error::Api(format!("backend returned {}", status)));
        }

        serde_json::from_str(&body).map_err(|e| Error::InvalidResponse(e.to_string()))
    }

    /// Fetch the API banner from `GET /`
    pub async fn status(&self) -> Result<ServerStatus> {
        self.get_json(&format!("{}/", self.config.base_url)).await
    }

    /// Fetch `GET /health`
    pub async fn health(&self) -> Result<HealthStatus> {
        self.get_json(&format!("{}/health", self.config.base_url))
            .await
    }

    /// Check if the backend answers at all
    pub async fn is_available(&self) -> bool {
        let url = format!("{}/health", self.config.base_url);
        self.client.get(&url).send().await.is_ok()
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api(format!("backend returned {}", status)));
        }

        response
            .json()
            .await
            .map_err(|e| Error::InvalidResponse(e.to_string()))
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_connect() {
            Error::Network(format!(
                "Failed to connect to backend at {}: {}",
                self.config.base_url, e
            ))
        } else if e.is_timeout() {
            Error::Timeout(self.config.timeout.as_millis() as u64)
        } else {
            Error::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client_for(url: &str) -> AnalysisClient {
        let config = BackendConfig::new()
            .with_base_url(url)
            .with_timeout(Duration::from_secs(5));
        AnalysisClient::new(config).expect("client should build")
    }

    #[test]
    fn config_round_trips_through_the_client() {
        let config = BackendConfig::new()
            .with_base_url("http://10.0.0.1:8000")
            .with_timeout(Duration::from_secs(7));

        let client = AnalysisClient::new(config.clone()).expect("client should build");
        assert_eq!(client.config(), &config);
    }

    #[test]
    fn from_env_builds_a_client() {
        // Other tests mutate TRIAGE_* variables, so only assert that the
        // env-derived client comes up with a usable base URL.
        let client = AnalysisClient::from_env().expect("env-derived client should build");
        assert!(client.config().base_url.starts_with("http"));
    }

    #[tokio::test]
    async fn analyze_parses_a_well_formed_report() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/analyze")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "description": "sharp chest pain and sweating"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "disease_name": "Angina",
                    "suggested_treatment": "Rest and consult a cardiologist promptly.",
                    "analysis_reasoning": "Chest pain with exertion suggests reduced cardiac blood flow.",
                    "disclaimer": "This analysis is AI-generated and not a medical diagnosis."
                }"#,
            )
            .create_async()
            .await;

        let report = client_for(&server.url())
            .analyze("sharp chest pain and sweating")
            .await
            .expect("analysis should succeed");

        mock.assert_async().await;
        assert_eq!(report.disease_name, "Angina");
        assert_eq!(
            report.disclaimer,
            "This analysis is AI-generated and not a medical diagnosis."
        );
    }

    #[tokio::test]
    async fn analyze_maps_non_success_to_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/analyze")
            .with_status(500)
            .with_body(r#"{"detail": "model backend unavailable"}"#)
            .create_async()
            .await;

        let error = client_for(&server.url())
            .analyze("headache")
            .await
            .expect_err("500 should fail");

        match error {
            Error::Api(message) => {
                assert!(message.contains("500"));
                assert!(message.contains("model backend unavailable"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn analyze_rejects_non_json_bodies() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/analyze")
            .with_status(200)
            .with_body("<html>proxy error</html>")
            .create_async()
            .await;

        let error = client_for(&server.url())
            .analyze("headache")
            .await
            .expect_err("non-JSON should fail");

        assert!(matches!(error, Error::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn analyze_surfaces_refused_connections() {
        // Port 9 (discard) is privileged, so nothing listens there.
        let error = client_for("http://127.0.0.1:9")
            .analyze("headache")
            .await
            .expect_err("nothing is listening");

        assert!(matches!(error, Error::Network(_) | Error::Timeout(_)));
        assert_eq!(
            error.user_message(),
            "Failed to connect to the server. Is the backend running?"
        );
    }

    #[tokio::test]
    async fn health_round_trip() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/health")
            .with_status(200)
            .with_body(r#"{"status": "ok"}"#)
            .create_async()
            .await;

        let client = client_for(&server.url());
        let health = client.health().await.expect("health should succeed");
        assert!(health.is_ok());
        assert!(client.is_available().await);
    }

    #[tokio::test]
    async fn status_returns_the_api_banner() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_body(r#"{"message": "Medical AI API is running", "status": "active"}"#)
            .create_async()
            .await;

        let status = client_for(&server.url())
            .status()
            .await
            .expect("status should succeed");

        assert_eq!(status.message, "Medical AI API is running");
        assert_eq!(status.status, "active");
    }
}
