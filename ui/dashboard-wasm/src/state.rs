//! Session state.
//!
//! The dashboard controller (and its flight board) lives in
//! `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Accessors keep every borrow synchronous; nothing is held across an
//! await point.

use std::cell::RefCell;
use surety_api_types::FlightCode;
use surety_dashboard::{Dashboard, OracleQuery, PurchaseDecision};

thread_local! {
    static DASHBOARD: RefCell<Option<Dashboard>> = const { RefCell::new(None) };
}

/// Install the controller once the flight schedule is known.
pub fn install(dashboard: Dashboard) {
    DASHBOARD.with(|slot| *slot.borrow_mut() = Some(dashboard));
}

fn with_mut<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut Dashboard) -> R,
{
    DASHBOARD.with(|slot| slot.borrow_mut().as_mut().map(f))
}

pub fn registration_plan(now: u64) -> Vec<(String, u64)> {
    with_mut(|d| d.registration_plan(now)).unwrap_or_default()
}

pub fn begin_oracle_request(code: &str) -> Option<OracleQuery> {
    with_mut(|d| d.begin_oracle_request(code)).flatten()
}

pub fn status_query(code: &str) -> Option<FlightCode> {
    with_mut(|d| d.status_query(code)).flatten()
}

pub fn review_purchase(code: &str) -> Option<PurchaseDecision> {
    with_mut(|d| d.review_purchase(code))
}
