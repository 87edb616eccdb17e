use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightCode(pub String);

/// Amount in the contract's smallest currency unit, carried as a string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wei(pub String);

/// Decoded flight status as reported by the oracles.
///
/// The contract encodes status as a bare numeric code; anything outside the
/// known table decodes to `Unknown`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlightStatus {
    Unknown,
    OnTime,
    LateAirline,
    LateWeather,
    LateTechnical,
    LateOther,
    LateAirlineProcessed,
}

impl FlightStatus {
    pub fn from_code(code: u8) -> Self {
        match code {
            10 => FlightStatus::OnTime,
            20 => FlightStatus::LateAirline,
            30 => FlightStatus::LateWeather,
            40 => FlightStatus::LateTechnical,
            50 => FlightStatus::LateOther,
            60 => FlightStatus::LateAirlineProcessed,
            _ => FlightStatus::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlightStatus::Unknown => "Unknown",
            FlightStatus::OnTime => "On time",
            FlightStatus::LateAirline => "Late due to airline",
            FlightStatus::LateWeather => "Late due to weather",
            FlightStatus::LateTechnical => "Late due to technical reasons",
            FlightStatus::LateOther => "Late due to other reasons",
            FlightStatus::LateAirlineProcessed => "Late due to airline, and processed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationalResponse {
    pub operational: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightScheduleResponse {
    pub flights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterFlightRequest {
    pub flight: String,
    pub timestamp: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterFlightResponse {
    pub flight: String,
    pub accepted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleRequest {
    pub flight: String,
    pub timestamp: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleRequestResponse {
    pub flight: String,
    pub timestamp: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightStatusResponse {
    pub flight: String,
    #[serde(default)]
    pub status: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyInsuranceRequest {
    pub flight: String,
    pub premium_wei: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyInsuranceResponse {
    pub flight: String,
    pub premium_wei: String,
    pub accepted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub balance_wei: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawResponse {
    pub accepted: bool,
    pub amount_wei: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_status_codes_decode_to_fixed_labels() {
        let table = [
            (10, "On time"),
            (20, "Late due to airline"),
            (30, "Late due to weather"),
            (40, "Late due to technical reasons"),
            (50, "Late due to other reasons"),
            (60, "Late due to airline, and processed"),
        ];
        for (code, label) in table {
            assert_eq!(FlightStatus::from_code(code).label(), label);
        }
    }

    #[test]
    fn unlisted_codes_decode_to_unknown() {
        for code in [0, 1, 11, 25, 61, 255] {
            assert_eq!(FlightStatus::from_code(code), FlightStatus::Unknown);
            assert_eq!(FlightStatus::from_code(code).label(), "Unknown");
        }
    }

    #[test]
    fn status_response_defaults_missing_code_to_unknown() {
        let parsed: FlightStatusResponse =
            serde_json::from_str(r#"{"flight":"AA100"}"#).expect("parse");
        assert_eq!(FlightStatus::from_code(parsed.status), FlightStatus::Unknown);
    }
}
