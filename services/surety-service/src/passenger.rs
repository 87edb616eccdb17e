use axum::{Json, extract::State};
use surety_api_types::{
    BalanceResponse, BuyInsuranceRequest, BuyInsuranceResponse, FlightCode, Wei, WithdrawResponse,
};
use tracing::info;

use crate::{ApiResult, AppState, bad_request, contract_error};

pub(crate) async fn buy(
    State(state): State<AppState>,
    Json(request): Json<BuyInsuranceRequest>,
) -> ApiResult<BuyInsuranceResponse> {
    if request.flight.trim().is_empty() {
        return Err(bad_request("flight is required"));
    }
    if request.premium_wei.trim().is_empty() {
        return Err(bad_request("premium_wei is required"));
    }

    let receipt = state
        .contract
        .buy(&FlightCode(request.flight), &Wei(request.premium_wei))
        .await
        .map_err(contract_error)?;

    info!(
        "insurance bought for {} at {} wei",
        receipt.flight.0, receipt.premium.0
    );

    Ok(Json(BuyInsuranceResponse {
        flight: receipt.flight.0,
        premium_wei: receipt.premium.0,
        accepted: true,
    }))
}

pub(crate) async fn balance(State(state): State<AppState>) -> ApiResult<BalanceResponse> {
    let report = state.contract.get_balance().await.map_err(contract_error)?;

    Ok(Json(BalanceResponse {
        balance_wei: report.balance.0,
    }))
}

pub(crate) async fn withdraw(State(state): State<AppState>) -> ApiResult<WithdrawResponse> {
    let receipt = state.contract.withdraw().await.map_err(contract_error)?;

    // The dashboard renders a fixed success label; the amount only reaches
    // the service log.
    info!("payout of {} wei settled", receipt.amount.0);

    Ok(Json(WithdrawResponse {
        accepted: receipt.accepted,
        amount_wei: receipt.amount.0,
    }))
}
