//! Event binding.
//!
//! Wires the five dashboard buttons. To add new events, add closures here
//! and (if async) spawn via `wasm_bindgen_futures::spawn_local`.

use crate::dom::Elements;
use crate::flight_ops;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Helper: attach async click handler to an HtmlElement.
macro_rules! on_click_async {
    ($el:expr, $els:expr, $handler:expr) => {{
        let els = $els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let els2 = els.clone();
            wasm_bindgen_futures::spawn_local(async move {
                $handler(&els2).await;
            });
        }) as Box<dyn FnMut(_)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    on_click_async!(els.submit_oracle, els, flight_ops::on_submit_oracle);
    on_click_async!(els.check_status, els, flight_ops::on_check_status);
    on_click_async!(els.buy, els, flight_ops::on_buy);
    on_click_async!(els.balance, els, flight_ops::on_balance);
    on_click_async!(els.withdraw, els, flight_ops::on_withdraw);
}
