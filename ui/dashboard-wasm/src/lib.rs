//! FlightSurety Dashboard WASM Frontend
//!
//! Pure Rust + WASM dashboard for the surety dapp. Modularised for
//! extensibility: each concern lives in its own module.

pub mod api;
pub mod display;
pub mod dom;
pub mod events;
pub mod flight_ops;
pub mod state;

use gloo_console::warn;
use surety_api_types::FlightScheduleResponse;
use surety_dashboard::Dashboard;
use surety_flight_board::{DEFAULT_SCHEDULE, FlightBoard};
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().await
}

/// Main initialisation sequence (the contract-ready phase).
async fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    // Read transaction: operational status first
    flight_ops::show_operational_status(&els).await;

    // Seed the session board with the fixed schedule
    let schedule = load_schedule().await;
    state::install(Dashboard::new(FlightBoard::new(schedule)));

    // Register every flight, stamped with the current time, fire-and-forget
    // in list order; completions may interleave.
    let now = (js_sys::Date::now() / 1000.0) as u64;
    for (code, timestamp) in state::registration_plan(now) {
        let els2 = els.clone();
        wasm_bindgen_futures::spawn_local(async move {
            flight_ops::register_flight(&els2, code, timestamp).await;
        });
    }

    // Bind all event listeners
    events::bind_events(&els);

    Ok(())
}

/// Fetch the flight schedule from the gateway, falling back to the built-in
/// list when the gateway is unreachable at load time.
async fn load_schedule() -> Vec<String> {
    match api::request("/contract/flights", "GET", None).await {
        Ok(value) => match api::parse::<FlightScheduleResponse>(value) {
            Ok(schedule) => schedule.flights,
            Err(e) => {
                warn!("bad schedule payload:", e);
                DEFAULT_SCHEDULE.iter().map(|code| code.to_string()).collect()
            }
        },
        Err(e) => {
            warn!("schedule fetch failed:", e);
            DEFAULT_SCHEDULE.iter().map(|code| code.to_string()).collect()
        }
    }
}
