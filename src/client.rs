//! HTTP client for a running calculator server.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::api::{ErrorBody, HealthStatus, OperationRequest, OperationResult};
use crate::calc::{Operation, ParsedExpression};
use crate::config::ClientConfig;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server could not be reached or returned an unreadable body.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server returned {status}: {detail}")]
    Api { status: u16, detail: String },
}

impl ClientError {
    /// Message suitable for showing to the user.
    pub fn detail(&self) -> String {
        match self {
            ClientError::Transport(_) => "Unable to reach the calculator service".to_string(),
            ClientError::Api { detail, .. } => detail.clone(),
        }
    }
}

/// Anything that can evaluate a parsed expression remotely.
pub trait CalculatorApi {
    fn calculate(
        &self,
        expression: &ParsedExpression,
    ) -> impl Future<Output = Result<OperationResult, ClientError>> + Send;
}

#[derive(Debug, Clone)]
pub struct CalculatorClient {
    http: reqwest::Client,
    base_url: String,
}

impl CalculatorClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn calculate_operation(
        &self,
        operation: Operation,
        a: f64,
        b: f64,
    ) -> Result<OperationResult, ClientError> {
        let url = format!("{}/{}", self.base_url, operation.name());
        tracing::debug!(%url, a, b, "Sending calculation");

        let response = self
            .http
            .post(url)
            .json(&OperationRequest { a, b })
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let detail = match response.json::<ErrorBody>().await {
            Ok(body) => body.detail,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string(),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            detail,
        })
    }
}

impl CalculatorApi for CalculatorClient {
    async fn calculate(
        &self,
        expression: &ParsedExpression,
    ) -> Result<OperationResult, ClientError> {
        self.calculate_operation(expression.operation, expression.a, expression.b)
            .await
    }
}
