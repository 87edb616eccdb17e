//! Session-scoped flight store.
//!
//! The board owns the fixed flight list for one page session and is the
//! only thing allowed to mutate it. Lookups are a first-match linear scan;
//! codes are assumed unique, so duplicates are not rejected and the first
//! entry wins.

use serde::{Deserialize, Serialize};

/// Flights offered for insurance during a demo session.
pub const DEFAULT_SCHEDULE: &[&str] = &["ND1309", "AA2537", "UA0847"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flight {
    pub flight: String,
    pub timestamp: u64,
    pub landed: bool,
}

impl Flight {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            flight: code.into(),
            timestamp: 0,
            landed: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FlightBoard {
    flights: Vec<Flight>,
}

impl FlightBoard {
    pub fn new(codes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            flights: codes.into_iter().map(Flight::new).collect(),
        }
    }

    pub fn with_default_schedule() -> Self {
        Self::new(DEFAULT_SCHEDULE.iter().copied())
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// First flight whose code matches exactly (case-sensitive).
    pub fn find(&self, code: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.flight == code)
    }

    /// Stamp every flight with the given registration time, in list order.
    /// Returns `(code, timestamp)` pairs for the registration transactions.
    pub fn stamp_all(&mut self, now: u64) -> Vec<(String, u64)> {
        for flight in &mut self.flights {
            flight.timestamp = now;
        }
        self.flights
            .iter()
            .map(|f| (f.flight.clone(), f.timestamp))
            .collect()
    }

    /// Latch the `landed` flag on the first matching flight.
    ///
    /// One-directional: once set it is never cleared. Returns a copy of the
    /// flight after the latch, or `None` when the code is not on the board.
    pub fn mark_landed(&mut self, code: &str) -> Option<Flight> {
        let flight = self.flights.iter_mut().find(|f| f.flight == code)?;
        flight.landed = true;
        Some(flight.clone())
    }
}
