//! Result formatting for the display panel.
//!
//! Each user action produces one [`DisplaySection`]; a contract error takes
//! the place of the value in the same result slot.

use anyhow::Result;
use surety_api_types::{FlightCode, FlightStatus, Wei};
use surety_contract_client::{
    BalanceReport, FlightStatusReport, InsuranceReceipt, OracleRequestReceipt,
    RegistrationReceipt, WithdrawalReceipt,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayResult {
    pub label: String,
    pub error: Option<String>,
    pub value: String,
}

impl DisplayResult {
    pub fn ok(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_owned(),
            error: None,
            value: value.into(),
        }
    }

    pub fn err(label: &str, error: &anyhow::Error) -> Self {
        Self {
            label: label.to_owned(),
            error: Some(format!("{error:#}")),
            value: String::new(),
        }
    }

    fn from_result<T>(label: &str, result: Result<T>, value: impl FnOnce(T) -> String) -> Self {
        match result {
            Ok(inner) => Self::ok(label, value(inner)),
            Err(err) => Self::err(label, &err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySection {
    pub title: String,
    pub description: String,
    pub results: Vec<DisplayResult>,
}

impl DisplaySection {
    fn new(title: &str, description: &str, result: DisplayResult) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            results: vec![result],
        }
    }
}

pub fn operational_section(result: Result<bool>) -> DisplaySection {
    DisplaySection::new(
        "Operational Status",
        "Check if contract is operational",
        DisplayResult::from_result("Operational Status", result, |up| up.to_string()),
    )
}

pub fn registration_section(code: &str, result: Result<RegistrationReceipt>) -> DisplaySection {
    // Success shows the flight now open for insurance, not the receipt
    DisplaySection::new(
        "Flight",
        "Register flights",
        DisplayResult::from_result("Insurance Available for", result, |_| code.to_owned()),
    )
}

pub fn oracle_section(result: Result<OracleRequestReceipt>) -> DisplaySection {
    DisplaySection::new(
        "Oracles",
        "Trigger oracles",
        DisplayResult::from_result("Fetch Flight Status", result, |ack| {
            format!("{} {}", ack.flight.0, ack.timestamp)
        }),
    )
}

pub fn status_section(result: Result<FlightStatusReport>) -> DisplaySection {
    DisplaySection::new(
        "Flight",
        "Check status",
        DisplayResult::from_result("Flight Status", result, |report| {
            FlightStatus::from_code(report.status_code).label().to_owned()
        }),
    )
}

pub fn purchase_unknown_section(code: &str) -> DisplaySection {
    DisplaySection::new(
        "Passenger",
        "Buy Insurance",
        DisplayResult::ok("Flight ", format!("{code} is not a registered flight")),
    )
}

pub fn purchase_rejected_section(flight: &FlightCode) -> DisplaySection {
    DisplaySection::new(
        "Passenger",
        "Buy Insurance",
        DisplayResult::ok(
            "Flight ",
            format!(
                "{} has landed, you cannot buy insurance for landed flights",
                flight.0
            ),
        ),
    )
}

pub fn purchase_section(
    flight: &FlightCode,
    premium: &Wei,
    result: Result<InsuranceReceipt>,
) -> DisplaySection {
    let code = flight.0.clone();
    let premium = premium.0.clone();
    DisplaySection::new(
        "Passenger",
        "Buy Insurance",
        DisplayResult::from_result("Flight ", result, move |_| {
            format!("{code} for {premium} wei")
        }),
    )
}

pub fn balance_section(result: Result<BalanceReport>) -> DisplaySection {
    DisplaySection::new(
        "Passenger",
        "Balance",
        DisplayResult::from_result("Current balance: ", result, |report| report.balance.0),
    )
}

pub fn withdraw_section(result: Result<WithdrawalReceipt>) -> DisplaySection {
    // The returned amount is never rendered; only an error replaces the
    // fixed success label.
    DisplaySection::new(
        "Passenger",
        "Withdraw",
        DisplayResult::from_result("Withdraw: ", result, |_| "Successful".to_owned()),
    )
}
