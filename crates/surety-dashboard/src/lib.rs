//! Dashboard controller for the flight surety dapp.
//!
//! The controller owns the session's [`FlightBoard`] and exposes the guard
//! logic of each user action as synchronous operations; the async contract
//! round-trips live in [`session`]. Board mutations always happen before
//! the corresponding contract call is awaited.

pub mod display;
pub mod session;

use surety_api_types::FlightCode;
use surety_flight_board::FlightBoard;

/// Prepared oracle request for a flight that is on the board.
#[derive(Debug, Clone)]
pub struct OracleQuery {
    pub flight: FlightCode,
    pub timestamp: u64,
}

/// Outcome of the buy-insurance guard.
#[derive(Debug, Clone)]
pub enum PurchaseDecision {
    /// Code not on the board; nothing is submitted.
    UnknownFlight,
    /// An oracle request was already triggered for this flight.
    Landed { flight: FlightCode },
    /// Purchase may proceed.
    Clear { flight: FlightCode },
}

pub struct Dashboard {
    board: FlightBoard,
}

impl Dashboard {
    pub fn new(board: FlightBoard) -> Self {
        Self { board }
    }

    pub fn with_default_schedule() -> Self {
        Self::new(FlightBoard::with_default_schedule())
    }

    pub fn board(&self) -> &FlightBoard {
        &self.board
    }

    /// Stamp all flights with the registration time and return the
    /// `(code, timestamp)` pairs to register, in list order.
    pub fn registration_plan(&mut self, now: u64) -> Vec<(String, u64)> {
        self.board.stamp_all(now)
    }

    /// Latch `landed` and hand back the oracle query for a known flight.
    ///
    /// `landed` records that an oracle request was triggered, not an actual
    /// landing event. Unknown codes are a no-op and latch nothing.
    pub fn begin_oracle_request(&mut self, code: &str) -> Option<OracleQuery> {
        let flight = self.board.mark_landed(code)?;
        Some(OracleQuery {
            flight: FlightCode(flight.flight),
            timestamp: flight.timestamp,
        })
    }

    pub fn status_query(&self, code: &str) -> Option<FlightCode> {
        self.board.find(code).map(|f| FlightCode(f.flight.clone()))
    }

    /// Guard a purchase: existence first, then the landed latch.
    pub fn review_purchase(&self, code: &str) -> PurchaseDecision {
        let Some(flight) = self.board.find(code) else {
            return PurchaseDecision::UnknownFlight;
        };
        if flight.landed {
            PurchaseDecision::Landed {
                flight: FlightCode(flight.flight.clone()),
            }
        } else {
            PurchaseDecision::Clear {
                flight: FlightCode(flight.flight.clone()),
            }
        }
    }
}
