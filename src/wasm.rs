use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::classification::localize::DefaultLocalizer;
use crate::classification::table::classify;
use crate::codes::{DepositErrorCode, ErrorKind};
use crate::guard::SessionLanguages;
use crate::types::{ClassifyContext, ErrorInput, ScreenConfig};

fn to_js<T: Serialize>(value: &T) -> JsValue {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or(JsValue::NULL)
}

fn error_result(msg: &str) -> JsValue {
    to_js(&serde_json::json!({ "error": msg }))
}

fn context(
    message: impl Into<String>,
    currency: Option<String>,
    missing_currency: Option<String>,
) -> ClassifyContext {
    let config = missing_currency
        .map(ScreenConfig::with_missing_currency)
        .unwrap_or_default();
    ClassifyContext::new(message, config.resolve_currency(currency))
}

/// Classify a deposit error into untranslated display content.
///
/// The host translates `title`/`buttonText` and wires `action` to its own reload.
/// `missing_currency` is interpolated while `currency` is absent.
#[wasm_bindgen]
pub fn classify_error(
    code: &str,
    message: &str,
    currency: Option<String>,
    missing_currency: Option<String>,
) -> JsValue {
    let ctx = context(message, currency, missing_currency);
    to_js(&classify(code, &ctx, &DefaultLocalizer))
}

/// Classify the `error` object of a raw cashier response (JSON string).
#[wasm_bindgen]
pub fn classify_socket_response(
    json: &str,
    currency: Option<String>,
    missing_currency: Option<String>,
) -> JsValue {
    let parsed: serde_json::Value = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(_) => return error_result("Invalid JSON"),
    };
    let input = match ErrorInput::from_socket_response(&parsed) {
        Ok(input) => input,
        Err(e) => return error_result(&e.to_string()),
    };

    let ctx = context(input.message, currency, missing_currency);
    to_js(&classify(&input.code, &ctx, &DefaultLocalizer))
}

/// Known error codes with their kinds.
#[wasm_bindgen]
pub fn known_error_codes() -> JsValue {
    let codes: Vec<serde_json::Value> = DepositErrorCode::all_codes()
        .iter()
        .map(|code| {
            serde_json::json!({
                "code": code,
                "kind": ErrorKind::of(code).as_ref(),
            })
        })
        .collect();
    to_js(&codes)
}

/// Whether the session must be reloaded to match the selected language.
#[wasm_bindgen]
pub fn is_session_stale(session_language: &str, current_language: &str) -> bool {
    SessionLanguages::new(session_language, current_language).is_stale()
}
