use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use surety_api_types::{
    FlightCode, FlightScheduleResponse, FlightStatusResponse, OperationalResponse, OracleRequest,
    OracleRequestResponse, RegisterFlightRequest, RegisterFlightResponse,
};
use surety_flight_board::DEFAULT_SCHEDULE;
use tracing::info;

use crate::{ApiResult, AppState, bad_request, contract_error};

pub(crate) async fn operational(State(state): State<AppState>) -> ApiResult<OperationalResponse> {
    let operational = state
        .contract
        .is_operational()
        .await
        .map_err(contract_error)?;

    Ok(Json(OperationalResponse { operational }))
}

/// The fixed flight schedule offered to each dashboard session.
pub(crate) async fn schedule() -> Json<FlightScheduleResponse> {
    Json(FlightScheduleResponse {
        flights: DEFAULT_SCHEDULE.iter().map(|code| code.to_string()).collect(),
    })
}

pub(crate) async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterFlightRequest>,
) -> ApiResult<RegisterFlightResponse> {
    if request.flight.trim().is_empty() {
        return Err(bad_request("flight is required"));
    }

    let receipt = state
        .contract
        .register_flight(&FlightCode(request.flight), request.timestamp)
        .await
        .map_err(contract_error)?;

    info!("registered flight {}", receipt.flight.0);

    Ok(Json(RegisterFlightResponse {
        flight: receipt.flight.0,
        accepted: receipt.accepted,
    }))
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlightStatusQuery {
    pub(crate) flight: String,
}

pub(crate) async fn status(
    State(state): State<AppState>,
    Query(query): Query<FlightStatusQuery>,
) -> ApiResult<FlightStatusResponse> {
    if query.flight.trim().is_empty() {
        return Err(bad_request("flight is required"));
    }

    let report = state
        .contract
        .check_flight_status(&FlightCode(query.flight))
        .await
        .map_err(contract_error)?;

    Ok(Json(FlightStatusResponse {
        flight: report.flight.0,
        status: report.status_code,
    }))
}

pub(crate) async fn oracle_request(
    State(state): State<AppState>,
    Json(request): Json<OracleRequest>,
) -> ApiResult<OracleRequestResponse> {
    if request.flight.trim().is_empty() {
        return Err(bad_request("flight is required"));
    }

    let receipt = state
        .contract
        .fetch_flight_status(&FlightCode(request.flight), request.timestamp)
        .await
        .map_err(contract_error)?;

    Ok(Json(OracleRequestResponse {
        flight: receipt.flight.0,
        timestamp: receipt.timestamp,
    }))
}
