use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use surety_api_types::{FlightCode, Wei};
use surety_contract_client::{
    BalanceReport, ContractClient, FlightStatusReport, InsuranceReceipt, OracleRequestReceipt,
    RegistrationReceipt, WithdrawalReceipt,
};
use tracing::warn;

/// Real HTTP adapter for the deployed surety app contract, reached through
/// its Ethereum REST bridge.
///
/// Reads `SURETY_ETH_BRIDGE_URL` from environment at construction time
/// (default: `http://localhost:8545`).
pub struct EthBridgeAdapter {
    endpoint: String,
    http: reqwest::Client,
}

impl Default for EthBridgeAdapter {
    fn default() -> Self {
        Self::new(None)
    }
}

impl EthBridgeAdapter {
    pub fn new(endpoint: Option<String>) -> Self {
        let endpoint = endpoint
            .or_else(|| std::env::var("SURETY_ETH_BRIDGE_URL").ok())
            .unwrap_or_else(|| "http://localhost:8545".to_string());
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }
}

// ── Bridge REST API types ────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct RegisterFlightBody {
    flight: String,
    timestamp: u64,
}

#[derive(Debug, Serialize)]
struct OracleRequestBody {
    flight: String,
    timestamp: u64,
}

#[derive(Debug, Serialize)]
struct BuyInsuranceBody {
    flight: String,
    premium_wei: String,
}

#[derive(Debug, Deserialize)]
struct OperationalBody {
    operational: bool,
}

#[derive(Debug, Deserialize)]
struct OracleAckBody {
    flight: String,
    timestamp: u64,
}

#[derive(Debug, Deserialize)]
struct StatusBody {
    #[allow(dead_code)]
    flight: String,
    #[serde(default)]
    status: u8,
}

#[derive(Debug, Deserialize)]
struct BalanceBody {
    balance_wei: String,
}

#[derive(Debug, Deserialize)]
struct PayoutBody {
    amount_wei: String,
    accepted: bool,
}

#[derive(Debug, Deserialize)]
struct BridgeErrorResponse {
    error: String,
}

/// Surface the bridge's structured `{"error": ...}` body when present,
/// otherwise report the raw status line.
fn bridge_failure(call: &str, status: reqwest::StatusCode, text: &str) -> anyhow::Error {
    if let Ok(err) = serde_json::from_str::<BridgeErrorResponse>(text) {
        anyhow::anyhow!("{}", err.error)
    } else {
        anyhow::anyhow!("surety {call} HTTP {status}: {text}")
    }
}

#[async_trait]
impl ContractClient for EthBridgeAdapter {
    async fn is_operational(&self) -> Result<bool> {
        let url = format!("{}/app/operational", self.endpoint);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("surety is_operational transport")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(bridge_failure("is_operational", status, &text));
        }

        let body: OperationalBody = response
            .json()
            .await
            .context("surety is_operational parse")?;
        Ok(body.operational)
    }

    async fn register_flight(
        &self,
        flight: &FlightCode,
        timestamp: u64,
    ) -> Result<RegistrationReceipt> {
        let body = RegisterFlightBody {
            flight: flight.0.clone(),
            timestamp,
        };

        let url = format!("{}/app/flights", self.endpoint);
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("surety register_flight transport")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(bridge_failure("register_flight", status, &text));
        }

        Ok(RegistrationReceipt {
            flight: flight.clone(),
            accepted: true,
        })
    }

    async fn fetch_flight_status(
        &self,
        flight: &FlightCode,
        timestamp: u64,
    ) -> Result<OracleRequestReceipt> {
        let body = OracleRequestBody {
            flight: flight.0.clone(),
            timestamp,
        };

        let url = format!("{}/app/oracles/request", self.endpoint);
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("surety fetch_flight_status transport")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(bridge_failure("fetch_flight_status", status, &text));
        }

        let ack: OracleAckBody = response
            .json()
            .await
            .context("surety fetch_flight_status parse")?;

        Ok(OracleRequestReceipt {
            flight: FlightCode(ack.flight),
            timestamp: ack.timestamp,
        })
    }

    async fn check_flight_status(&self, flight: &FlightCode) -> Result<FlightStatusReport> {
        let url = format!("{}/app/flights/{}/status", self.endpoint, flight.0);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("surety check_flight_status transport")?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            // No oracle report yet, decodes to the Unknown status label
            return Ok(FlightStatusReport {
                flight: flight.clone(),
                status_code: 0,
            });
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(bridge_failure("check_flight_status", status, &text));
        }

        let body: StatusBody = response
            .json()
            .await
            .context("surety check_flight_status parse")?;

        Ok(FlightStatusReport {
            flight: flight.clone(),
            status_code: body.status,
        })
    }

    async fn buy(&self, flight: &FlightCode, premium: &Wei) -> Result<InsuranceReceipt> {
        let body = BuyInsuranceBody {
            flight: flight.0.clone(),
            premium_wei: premium.0.clone(),
        };

        let url = format!("{}/app/insurance", self.endpoint);
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("surety buy transport")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(bridge_failure("buy", status, &text));
        }

        Ok(InsuranceReceipt {
            flight: flight.clone(),
            premium: premium.clone(),
        })
    }

    async fn get_balance(&self) -> Result<BalanceReport> {
        let url = format!("{}/app/passengers/balance", self.endpoint);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("surety get_balance transport")?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            // Passenger has no credit entry yet
            return Ok(BalanceReport {
                balance: Wei("0".to_owned()),
            });
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(bridge_failure("get_balance", status, &text));
        }

        let body: BalanceBody = response.json().await.context("surety get_balance parse")?;

        Ok(BalanceReport {
            balance: Wei(body.balance_wei),
        })
    }

    async fn withdraw(&self) -> Result<WithdrawalReceipt> {
        let url = format!("{}/app/passengers/payout", self.endpoint);
        let response = self
            .http
            .post(&url)
            .send()
            .await
            .context("surety withdraw transport")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(bridge_failure("withdraw", status, &text));
        }

        let body: PayoutBody = response.json().await.context("surety withdraw parse")?;
        if !body.accepted {
            warn!("payout not accepted by bridge, amount {}", body.amount_wei);
        }

        Ok(WithdrawalReceipt {
            amount: Wei(body.amount_wei),
            accepted: body.accepted,
        })
    }
}
