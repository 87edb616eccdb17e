//! HTTP API client.
//!
//! Wraps `fetch` for JSON requests to the surety-service gateway.
//! `base_url()` auto-detects Codespace forwarding.

use crate::dom;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

/// Determine the gateway base URL: Codespace auto-detect, else same-origin
/// host on port 8080.
pub fn base_url() -> String {
    let loc = dom::window().location();
    let host = loc.hostname().unwrap_or_default();
    let protocol = loc.protocol().unwrap_or_else(|_| "http:".into());

    // GitHub Codespaces: rewrite port in hostname
    if host.contains(".app.github.dev") {
        let base = host.replace(".app.github.dev", "");
        let parts: Vec<&str> = base.rsplitn(2, '-').collect();
        let prefix = if parts.len() == 2 { parts[1] } else { &base };
        return format!("https://{}-8080.app.github.dev", prefix);
    }

    format!("{}//{}:8080", protocol, host)
}

/// Perform a fetch request, returning the parsed JSON as `serde_json::Value`.
pub async fn request(
    path: &str,
    method: &str,
    body: Option<String>,
) -> Result<serde_json::Value, String> {
    let url = format!("{}{}", base_url(), path);

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    let headers = Headers::new().map_err(|e| format!("{:?}", e))?;

    if let Some(ref b) = body {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| format!("{:?}", e))?;
        let js_body = JsValue::from_str(b);
        opts.set_body(&js_body);
    }

    opts.set_headers(&headers);

    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{:?}", e))?;

    let window = dom::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch error: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "response is not a Response".to_string())?;

    let text = JsFuture::from(resp.text().map_err(|e| format!("{:?}", e))?)
        .await
        .map_err(|e| format!("text error: {:?}", e))?;

    let text_str = text.as_string().unwrap_or_default();

    if !resp.ok() {
        // The gateway wraps failures as {"error": ...}; show the clean text
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&text_str) {
            if let Some(message) = parsed.get("error").and_then(|v| v.as_str()) {
                return Err(message.to_owned());
            }
        }
        return Err(format!("{} {}: {}", resp.status(), resp.status_text(), text_str));
    }

    serde_json::from_str(&text_str).map_err(|e| format!("JSON parse error: {} — raw: {}", e, text_str))
}

/// Parse a JSON response into a typed DTO.
pub fn parse<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| format!("unexpected response shape: {e}"))
}
