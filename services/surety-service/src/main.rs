use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use surety_contract_client::ContractClient;
use surety_contract_eth::EthBridgeAdapter;
use tower_http::cors::CorsLayer;
use tracing::info;

mod flights;
mod passenger;

#[derive(Debug, Serialize)]
struct HealthResponse {
    service: &'static str,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct VersionResponse {
    service: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

#[derive(Clone)]
struct AppState {
    contract: Arc<dyn ContractClient>,
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/contract/operational", get(flights::operational))
        .route("/contract/flights", get(flights::schedule))
        .route("/contract/flights/register", post(flights::register))
        .route("/contract/flights/status", get(flights::status))
        .route("/contract/oracle/request", post(flights::oracle_request))
        .route("/contract/insurance/buy", post(passenger::buy))
        .route("/contract/passenger/balance", get(passenger::balance))
        .route("/contract/passenger/withdraw", post(passenger::withdraw))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let state = AppState {
        contract: Arc::new(EthBridgeAdapter::default()),
    };

    let addr = std::env::var("SURETY_BIND_ADDR")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8080)));
    info!("surety-service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "surety-service",
        status: "ok",
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        service: "surety-service",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_owned(),
        }),
    )
}

/// Contract-call failures surface as 502 with the error's string form.
fn contract_error(err: anyhow::Error) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: format!("{err:#}"),
        }),
    )
}
