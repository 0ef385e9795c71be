//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use calculator_api::api::{
    build_router, dispatch, AppState, CalculatorServer, OperationRequest, OperationResult,
    ServerHandle,
};
use calculator_api::calc::ParsedExpression;
use calculator_api::client::{CalculatorApi, ClientError};
use calculator_api::config::ServerConfig;

pub const SERVICE_NAME: &str = "Calculator API";

// -- Router helpers -----------------------------------------------------------

pub fn test_router() -> Router {
    build_router(AppState::new(SERVICE_NAME))
}

/// Send one request through `router` and return status, headers and raw body.
pub async fn send(router: Router, method: &str, uri: &str, body: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");

    let response = router.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    (status, headers, String::from_utf8_lossy(&bytes).into_owned())
}

/// Like [`send`] against the default router, decoding the body as JSON.
pub async fn send_json(method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let (status, _, text) = send(test_router(), method, uri, body).await;
    let json = serde_json::from_str(&text).unwrap_or_else(|e| panic!("body {text:?} is not JSON: {e}"));
    (status, json)
}

// -- Live server ----------------------------------------------------------------

/// Bind a server on an ephemeral port and run it in the background.
pub async fn spawn_server() -> (SocketAddr, ServerHandle) {
    let config = ServerConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        service_name: SERVICE_NAME.to_string(),
    };
    let server = CalculatorServer::bind(&config).await.expect("Failed to bind");
    let addr = server.local_addr();
    let handle = server.handle();

    tokio::spawn(async move {
        let _ = server.run().await;
    });

    assert!(wait_for_server(addr, Duration::from_secs(2)).await, "server did not start");
    (addr, handle)
}

/// Wait for a server to become available.
pub async fn wait_for_server(addr: SocketAddr, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

// -- Mock API -------------------------------------------------------------------

/// In-process stand-in for the HTTP client. Evaluates locally and records
/// every expression it was asked for.
#[derive(Clone, Default)]
pub struct MockApi {
    calls: Arc<Mutex<Vec<ParsedExpression>>>,
    failure: Option<String>,
}

impl MockApi {
    /// A mock whose every call fails with `detail`.
    pub fn failing(detail: &str) -> Self {
        Self {
            calls: Arc::default(),
            failure: Some(detail.to_string()),
        }
    }

    pub fn calls(&self) -> Vec<ParsedExpression> {
        self.calls.lock().unwrap().clone()
    }
}

impl CalculatorApi for MockApi {
    async fn calculate(&self, expression: &ParsedExpression) -> Result<OperationResult, ClientError> {
        self.calls.lock().unwrap().push(*expression);

        if let Some(detail) = &self.failure {
            return Err(ClientError::Api {
                status: 400,
                detail: detail.clone(),
            });
        }

        let request = OperationRequest {
            a: expression.a,
            b: expression.b,
        };
        dispatch(expression.operation, request).map_err(|e| ClientError::Api {
            status: 400,
            detail: e.to_string(),
        })
    }
}
