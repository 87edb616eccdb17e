use anyhow::Result;
use async_trait::async_trait;
use surety_api_types::{FlightCode, Wei};

#[derive(Debug, Clone)]
pub struct RegistrationReceipt {
    pub flight: FlightCode,
    pub accepted: bool,
}

#[derive(Debug, Clone)]
pub struct OracleRequestReceipt {
    pub flight: FlightCode,
    pub timestamp: u64,
}

#[derive(Debug, Clone)]
pub struct FlightStatusReport {
    pub flight: FlightCode,
    pub status_code: u8,
}

#[derive(Debug, Clone)]
pub struct InsuranceReceipt {
    pub flight: FlightCode,
    pub premium: Wei,
}

#[derive(Debug, Clone)]
pub struct BalanceReport {
    pub balance: Wei,
}

#[derive(Debug, Clone)]
pub struct WithdrawalReceipt {
    pub amount: Wei,
    pub accepted: bool,
}

/// One async method per on-chain action of the surety app contract.
#[async_trait]
pub trait ContractClient: Send + Sync {
    async fn is_operational(&self) -> Result<bool>;
    async fn register_flight(
        &self,
        flight: &FlightCode,
        timestamp: u64,
    ) -> Result<RegistrationReceipt>;
    async fn fetch_flight_status(
        &self,
        flight: &FlightCode,
        timestamp: u64,
    ) -> Result<OracleRequestReceipt>;
    async fn check_flight_status(&self, flight: &FlightCode) -> Result<FlightStatusReport>;
    async fn buy(&self, flight: &FlightCode, premium: &Wei) -> Result<InsuranceReceipt>;
    async fn get_balance(&self) -> Result<BalanceReport>;
    async fn withdraw(&self) -> Result<WithdrawalReceipt>;
}
