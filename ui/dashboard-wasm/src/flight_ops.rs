//! Dashboard operations.
//!
//! Each function corresponds to one user action (plus the startup calls).
//! The guard logic runs synchronously against the session board, then the
//! gateway round-trip is awaited and the outcome rendered.

use gloo_console::log;
use surety_api_types::{
    BalanceResponse, BuyInsuranceResponse, FlightCode, FlightStatusResponse, OperationalResponse,
    OracleRequestResponse, RegisterFlightResponse, Wei, WithdrawResponse,
};
use surety_contract_client::{
    BalanceReport, FlightStatusReport, InsuranceReceipt, OracleRequestReceipt,
    RegistrationReceipt, WithdrawalReceipt,
};
use surety_dashboard::PurchaseDecision;
use surety_dashboard::display::{
    balance_section, operational_section, oracle_section, purchase_rejected_section,
    purchase_section, purchase_unknown_section, registration_section, status_section,
    withdraw_section,
};

use crate::api;
use crate::display;
use crate::dom::{self, Elements};
use crate::state;

/// GET /contract/operational (startup read transaction)
pub async fn show_operational_status(els: &Elements) {
    let result = match api::request("/contract/operational", "GET", None).await {
        Ok(value) => api::parse::<OperationalResponse>(value).map(|r| r.operational),
        Err(e) => Err(e),
    }
    .map_err(anyhow::Error::msg);

    display::append_section(els, &operational_section(result));
}

/// POST /contract/flights/register (startup, one call per scheduled flight)
pub async fn register_flight(els: &Elements, code: String, timestamp: u64) {
    let body = serde_json::json!({ "flight": code, "timestamp": timestamp });

    let receipt = match api::request("/contract/flights/register", "POST", Some(body.to_string()))
        .await
    {
        Ok(value) => api::parse::<RegisterFlightResponse>(value).map(|r| RegistrationReceipt {
            flight: FlightCode(r.flight),
            accepted: r.accepted,
        }),
        Err(e) => Err(e),
    }
    .map_err(anyhow::Error::msg);

    display::append_section(els, &registration_section(&code, receipt));
}

/// POST /contract/oracle/request
pub async fn on_submit_oracle(els: &Elements) {
    let code = dom::get_input_value(&els.flight_number);

    // Unknown codes are a silent no-op; the landed latch only fires for
    // flights on the board.
    let Some(query) = state::begin_oracle_request(&code) else {
        return;
    };

    let body = serde_json::json!({
        "flight": query.flight.0,
        "timestamp": query.timestamp,
    });

    let receipt = match api::request("/contract/oracle/request", "POST", Some(body.to_string()))
        .await
    {
        Ok(value) => api::parse::<OracleRequestResponse>(value).map(|ack| OracleRequestReceipt {
            flight: FlightCode(ack.flight),
            timestamp: ack.timestamp,
        }),
        Err(e) => Err(e),
    }
    .map_err(anyhow::Error::msg);

    display::append_section(els, &oracle_section(receipt));
}

/// GET /contract/flights/status
pub async fn on_check_status(els: &Elements) {
    let code = dom::get_input_value(&els.flight_number);
    let Some(flight) = state::status_query(&code) else {
        return;
    };

    let path = format!(
        "/contract/flights/status?flight={}",
        js_sys::encode_uri_component(&flight.0)
    );

    let report = match api::request(&path, "GET", None).await {
        Ok(value) => api::parse::<FlightStatusResponse>(value).map(|r| FlightStatusReport {
            flight: FlightCode(r.flight),
            status_code: r.status,
        }),
        Err(e) => Err(e),
    }
    .map_err(anyhow::Error::msg);

    display::append_section(els, &status_section(report));
}

/// POST /contract/insurance/buy
pub async fn on_buy(els: &Elements) {
    let code = dom::get_input_value(&els.flight_number);
    let Some(decision) = state::review_purchase(&code) else {
        return;
    };

    match decision {
        PurchaseDecision::UnknownFlight => {
            display::append_section(els, &purchase_unknown_section(&code));
        }
        PurchaseDecision::Landed { flight } => {
            display::append_section(els, &purchase_rejected_section(&flight));
        }
        PurchaseDecision::Clear { flight } => {
            let premium = Wei(dom::get_input_value(&els.insurance_premium));
            let body = serde_json::json!({
                "flight": flight.0,
                "premium_wei": premium.0,
            });

            let receipt = match api::request(
                "/contract/insurance/buy",
                "POST",
                Some(body.to_string()),
            )
            .await
            {
                Ok(value) => api::parse::<BuyInsuranceResponse>(value).map(|r| InsuranceReceipt {
                    flight: FlightCode(r.flight),
                    premium: Wei(r.premium_wei),
                }),
                Err(e) => Err(e),
            }
            .map_err(anyhow::Error::msg);

            display::append_section(els, &purchase_section(&flight, &premium, receipt));
        }
    }
}

/// GET /contract/passenger/balance
pub async fn on_balance(els: &Elements) {
    let report = match api::request("/contract/passenger/balance", "GET", None).await {
        Ok(value) => api::parse::<BalanceResponse>(value).map(|r| BalanceReport {
            balance: Wei(r.balance_wei),
        }),
        Err(e) => Err(e),
    }
    .map_err(anyhow::Error::msg);

    display::append_section(els, &balance_section(report));
}

/// POST /contract/passenger/withdraw
pub async fn on_withdraw(els: &Elements) {
    let receipt = match api::request("/contract/passenger/withdraw", "POST", None).await {
        Ok(value) => api::parse::<WithdrawResponse>(value).map(|r| {
            // Amount stays in the console; the panel shows the fixed label
            log!("payout settled:", r.amount_wei.clone());
            WithdrawalReceipt {
                amount: Wei(r.amount_wei),
                accepted: r.accepted,
            }
        }),
        Err(e) => Err(e),
    }
    .map_err(anyhow::Error::msg);

    display::append_section(els, &withdraw_section(receipt));
}
