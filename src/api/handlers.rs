use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse, Json};

use crate::api::dispatch::dispatch;
use crate::api::dto::{HealthStatus, OperationResult};
use crate::api::error::ApiError;
use crate::api::validate::validate_request;
use crate::calc::Operation;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const APP_JS: &str = include_str!("../../static/app.js");
const STYLE_CSS: &str = include_str!("../../static/style.css");

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    service_name: Arc<str>,
}

impl AppState {
    pub fn new(service_name: impl Into<Arc<str>>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    tracing::debug!("Health check requested");
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: state.service_name().to_string(),
    })
}

/// `POST /{operation}`: resolve the name, validate the body, dispatch.
pub async fn calculate(
    Path(name): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<OperationResult>, ApiError> {
    let operation: Operation = name.parse()?;
    let request = validate_request(&body?)?;
    let result = dispatch(operation, request)?;

    tracing::info!(
        operation = %operation,
        a = request.a,
        b = request.b,
        result = result.result,
        "Calculation completed"
    );
    Ok(Json(result))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Non-POST request to `/{operation}`: unknown names are still a 404.
pub async fn operation_method_not_allowed(Path(name): Path<String>) -> ApiError {
    match name.parse::<Operation>() {
        Ok(_) => ApiError::MethodNotAllowed,
        Err(e) => e.into(),
    }
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn app_js() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/javascript; charset=utf-8")], APP_JS)
}

pub async fn style_css() -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}
