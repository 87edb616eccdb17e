//! Async dashboard operations.
//!
//! One function per user action, generic over the contract client. Errors
//! are never propagated past this layer: each call folds its outcome into
//! the [`DisplaySection`] it renders, and no call is retried.

use crate::display::{self, DisplaySection};
use crate::Dashboard;
use surety_api_types::{FlightCode, Wei};
use surety_contract_client::ContractClient;

pub async fn operational_status<C: ContractClient>(contract: &C) -> DisplaySection {
    display::operational_section(contract.is_operational().await)
}

pub async fn register_flight<C: ContractClient>(
    contract: &C,
    code: &str,
    timestamp: u64,
) -> DisplaySection {
    let receipt = contract
        .register_flight(&FlightCode(code.to_owned()), timestamp)
        .await;
    display::registration_section(code, receipt)
}

/// Latch the flight as landed, then ask the oracles for its status.
///
/// Unknown codes are a silent no-op: nothing is latched, nothing rendered.
pub async fn trigger_oracle<C: ContractClient>(
    dash: &mut Dashboard,
    contract: &C,
    code: &str,
) -> Option<DisplaySection> {
    let query = dash.begin_oracle_request(code)?;
    let receipt = contract
        .fetch_flight_status(&query.flight, query.timestamp)
        .await;
    Some(display::oracle_section(receipt))
}

pub async fn check_status<C: ContractClient>(
    dash: &Dashboard,
    contract: &C,
    code: &str,
) -> Option<DisplaySection> {
    let flight = dash.status_query(code)?;
    let report = contract.check_flight_status(&flight).await;
    Some(display::status_section(report))
}

/// Guard first, then submit at most one purchase transaction.
pub async fn buy_insurance<C: ContractClient>(
    dash: &Dashboard,
    contract: &C,
    code: &str,
    premium: &str,
) -> DisplaySection {
    match dash.review_purchase(code) {
        crate::PurchaseDecision::UnknownFlight => display::purchase_unknown_section(code),
        crate::PurchaseDecision::Landed { flight } => display::purchase_rejected_section(&flight),
        crate::PurchaseDecision::Clear { flight } => {
            let premium = Wei(premium.to_owned());
            let receipt = contract.buy(&flight, &premium).await;
            display::purchase_section(&flight, &premium, receipt)
        }
    }
}

pub async fn get_balance<C: ContractClient>(contract: &C) -> DisplaySection {
    display::balance_section(contract.get_balance().await)
}

pub async fn withdraw<C: ContractClient>(contract: &C) -> DisplaySection {
    display::withdraw_section(contract.withdraw().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{bail, Result};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use surety_contract_client::{
        BalanceReport, FlightStatusReport, InsuranceReceipt, OracleRequestReceipt,
        RegistrationReceipt, WithdrawalReceipt,
    };
    use surety_flight_board::FlightBoard;

    #[derive(Default)]
    struct MockContract {
        status_code: u8,
        withdraw_amount: String,
        oracle_fails: bool,
        balance_fails: bool,
        register_fails: bool,
        registered: Mutex<Vec<(String, u64)>>,
        oracle_requests: Mutex<Vec<String>>,
        purchases: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl ContractClient for MockContract {
        async fn is_operational(&self) -> Result<bool> {
            Ok(true)
        }

        async fn register_flight(
            &self,
            flight: &FlightCode,
            timestamp: u64,
        ) -> Result<RegistrationReceipt> {
            self.registered
                .lock()
                .unwrap()
                .push((flight.0.clone(), timestamp));
            if self.register_fails {
                bail!("gas estimation failed");
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
            self.oracle_requests.lock().unwrap().push(flight.0.clone());
            if self.oracle_fails {
                bail!("oracle request reverted");
            }
            Ok(OracleRequestReceipt {
                flight: flight.clone(),
                timestamp,
            })
        }

        async fn check_flight_status(&self, flight: &FlightCode) -> Result<FlightStatusReport> {
            Ok(FlightStatusReport {
                flight: flight.clone(),
                status_code: self.status_code,
            })
        }

        async fn buy(&self, flight: &FlightCode, premium: &Wei) -> Result<InsuranceReceipt> {
            self.purchases
                .lock()
                .unwrap()
                .push((flight.0.clone(), premium.0.clone()));
            Ok(InsuranceReceipt {
                flight: flight.clone(),
                premium: premium.clone(),
            })
        }

        async fn get_balance(&self) -> Result<BalanceReport> {
            if self.balance_fails {
                bail!("connection refused");
            }
            Ok(BalanceReport {
                balance: Wei("1000000".to_owned()),
            })
        }

        async fn withdraw(&self) -> Result<WithdrawalReceipt> {
            Ok(WithdrawalReceipt {
                amount: Wei(self.withdraw_amount.clone()),
                accepted: true,
            })
        }
    }

    fn dashboard_with(codes: &[&str]) -> Dashboard {
        Dashboard::new(FlightBoard::new(codes.iter().copied()))
    }

    #[tokio::test]
    async fn initialization_registers_every_flight_in_list_order() {
        let contract = MockContract::default();
        let mut dash = dashboard_with(&["AA100", "BB200"]);

        let up = operational_status(&contract).await;
        assert_eq!(up.results[0].value, "true");
        assert_eq!(up.results[0].error, None);

        for (code, ts) in dash.registration_plan(1_700_000_000) {
            let section = register_flight(&contract, &code, ts).await;
            assert_eq!(section.results[0].label, "Insurance Available for");
            assert_eq!(section.results[0].value, code);
        }

        let registered = contract.registered.lock().unwrap();
        assert_eq!(
            *registered,
            vec![
                ("AA100".to_owned(), 1_700_000_000),
                ("BB200".to_owned(), 1_700_000_000)
            ]
        );
    }

    #[tokio::test]
    async fn registration_failure_renders_the_error_per_flight() {
        let contract = MockContract {
            register_fails: true,
            ..MockContract::default()
        };

        let section = register_flight(&contract, "AA100", 1_700_000_000).await;
        let err = section.results[0].error.as_deref().expect("error slot");
        assert!(err.contains("gas estimation failed"));
        assert!(section.results[0].value.is_empty());
    }

    #[tokio::test]
    async fn trigger_oracle_latches_landed_even_when_the_call_fails() {
        let contract = MockContract {
            oracle_fails: true,
            ..MockContract::default()
        };
        let mut dash = dashboard_with(&["AA100"]);
        dash.registration_plan(1_700_000_000);

        let section = trigger_oracle(&mut dash, &contract, "AA100")
            .await
            .expect("known flight renders");
        assert!(
            section.results[0]
                .error
                .as_deref()
                .unwrap()
                .contains("oracle request reverted")
        );

        // Latch survives the failed call, for every later lookup.
        assert!(dash.board().find("AA100").unwrap().landed);
        assert!(matches!(
            dash.review_purchase("AA100"),
            crate::PurchaseDecision::Landed { .. }
        ));
    }

    #[tokio::test]
    async fn trigger_oracle_on_unknown_code_is_a_silent_noop() {
        let contract = MockContract::default();
        let mut dash = dashboard_with(&["AA100"]);

        assert!(trigger_oracle(&mut dash, &contract, "ZZ999").await.is_none());
        assert!(contract.oracle_requests.lock().unwrap().is_empty());
        assert!(!dash.board().find("AA100").unwrap().landed);
    }

    #[tokio::test]
    async fn trigger_oracle_echoes_flight_and_timestamp() {
        let contract = MockContract::default();
        let mut dash = dashboard_with(&["AA100"]);
        dash.registration_plan(1_700_000_042);

        let section = trigger_oracle(&mut dash, &contract, "AA100").await.unwrap();
        assert_eq!(section.title, "Oracles");
        assert_eq!(section.results[0].value, "AA100 1700000042");
    }

    #[tokio::test]
    async fn check_status_decodes_a_weather_delay() {
        let contract = MockContract {
            status_code: 30,
            ..MockContract::default()
        };
        let dash = dashboard_with(&["AA100"]);

        let section = check_status(&dash, &contract, "AA100").await.unwrap();
        assert_eq!(section.results[0].value, "Late due to weather");
    }

    #[tokio::test]
    async fn check_status_renders_unknown_for_unlisted_codes() {
        let contract = MockContract {
            status_code: 77,
            ..MockContract::default()
        };
        let dash = dashboard_with(&["AA100"]);

        let section = check_status(&dash, &contract, "AA100").await.unwrap();
        assert_eq!(section.results[0].value, "Unknown");
    }

    #[tokio::test]
    async fn check_status_on_unknown_code_is_a_silent_noop() {
        let contract = MockContract::default();
        let dash = dashboard_with(&["AA100"]);
        assert!(check_status(&dash, &contract, "ZZ999").await.is_none());
    }

    #[tokio::test]
    async fn buy_issues_exactly_one_transaction_with_the_given_premium() {
        let contract = MockContract::default();
        let dash = dashboard_with(&["AA100"]);

        let section = buy_insurance(&dash, &contract, "AA100", "100").await;
        assert!(section.results[0].value.contains("AA100"));
        assert!(section.results[0].value.contains("100 wei"));

        let purchases = contract.purchases.lock().unwrap();
        assert_eq!(*purchases, vec![("AA100".to_owned(), "100".to_owned())]);
    }

    #[tokio::test]
    async fn buy_on_a_landed_flight_never_reaches_the_contract() {
        let contract = MockContract::default();
        let mut dash = dashboard_with(&["AA100"]);
        assert!(trigger_oracle(&mut dash, &contract, "AA100").await.is_some());

        let section = buy_insurance(&dash, &contract, "AA100", "100").await;
        assert!(
            section.results[0]
                .value
                .contains("has landed, you cannot buy insurance for landed flights")
        );
        assert!(contract.purchases.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn buy_on_an_unknown_code_renders_a_notice_without_a_transaction() {
        let contract = MockContract::default();
        let dash = dashboard_with(&["AA100"]);

        let section = buy_insurance(&dash, &contract, "ZZ999", "100").await;
        assert!(section.results[0].value.contains("ZZ999"));
        assert!(contract.purchases.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn balance_renders_the_raw_amount_or_the_error() {
        let contract = MockContract::default();
        let section = get_balance(&contract).await;
        assert_eq!(section.results[0].value, "1000000");

        let failing = MockContract {
            balance_fails: true,
            ..MockContract::default()
        };
        let section = get_balance(&failing).await;
        assert!(
            section.results[0]
                .error
                .as_deref()
                .unwrap()
                .contains("connection refused")
        );
    }

    #[tokio::test]
    async fn withdraw_renders_successful_regardless_of_the_returned_amount() {
        let contract = MockContract {
            withdraw_amount: "987654321".to_owned(),
            ..MockContract::default()
        };

        let section = withdraw(&contract).await;
        assert_eq!(section.results[0].value, "Successful");
        assert_eq!(section.results[0].error, None);
    }
}
