//! HTTP server mode for REST API access to gateway operations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{Error, Result};
use crate::gateway::Gateway;

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    gateway: Arc<Gateway>,
}

/// Query parameters for customer search
#[derive(Debug, Deserialize)]
struct CustomerSearchQuery {
    #[serde(default)]
    q: String,
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_take", alias = "pageSize")]
    page_size: u32,
}

/// Query parameters for item and sales order search
#[derive(Debug, Deserialize)]
struct TakeSkipQuery {
    #[serde(default)]
    q: String,
    #[serde(default = "default_take")]
    take: u32,
    #[serde(default)]
    skip: u32,
}

fn default_page() -> u32 {
    1
}

fn default_take() -> u32 {
    25
}

/// Gateway error carried out of a handler
struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Exhausted { .. } | Error::Upstream { .. } => StatusCode::BAD_GATEWAY,
            Error::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// Start the HTTP server
pub async fn serve(gateway: Gateway, port: u16) -> Result<()> {
    let state = AppState {
        gateway: Arc::new(gateway),
    };

    // Allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(state).layer(cors).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/customers/search", get(search_customers))
        .route("/api/customers/:id", get(get_customer))
        .route("/api/items/search", get(search_items))
        .route("/api/items/:id", get(get_item))
        .route("/api/sales-orders/search", get(search_sales_orders))
        .route("/api/sales-orders/:id", get(get_sales_order))
        .route("/api/diag/ping", get(ping))
        .with_state(Arc::new(state))
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn search_customers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CustomerSearchQuery>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let customers = state
        .gateway
        .search_customers(&query.q, query.page, query.page_size)
        .await?;
    Ok(Json(customers))
}

async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let customer = state.gateway.get_customer(id).await?;
    Ok(Json(customer))
}

async fn search_items(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TakeSkipQuery>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let items = state
        .gateway
        .search_items(&query.q, query.take, query.skip)
        .await?;
    Ok(Json(items))
}

async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let item = state.gateway.get_item(id).await?;
    Ok(Json(item))
}

async fn search_sales_orders(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TakeSkipQuery>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let orders = state
        .gateway
        .search_sales_orders(&query.q, query.take)
        .await?;
    Ok(Json(orders))
}

async fn get_sales_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let order = state.gateway.get_sales_order(id).await?;
    Ok(Json(order))
}

async fn ping(
    State(state): State<Arc<AppState>>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let report = state.gateway.ping().await?;
    Ok(Json(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_for(e: Error) -> StatusCode {
        ApiError(e).into_response().status()
    }

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            status_for(Error::validation("query required")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(Error::not_found("customer", 9)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(Error::Exhausted {
                attempts: 8,
                detail: "401".to_string(),
            }),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(Error::upstream(503, "unavailable")),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(Error::Timeout { timeout_ms: 20_000 }),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            status_for(Error::config("no credentials")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
