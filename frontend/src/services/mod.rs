//! Wallet and contract services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`session`] - NEAR wallet session (sign-in, sign-out, account id)
//! - [`contract`] - Plantary contract calls (list, mint, harvest)
//! - [`metadata`] - Off-chain token metadata fetch and extraction
//!
//! # JavaScript Bindings
//!
//! The wallet and contract services use near-api-js through bindings in
//! `src/js/near.js`; metadata documents are fetched directly over HTTP.

pub mod session;
pub mod contract;
pub mod metadata;

pub use session::*;
pub use contract::*;
pub use metadata::*;

use wasm_bindgen::JsValue;

/// Extract a readable message from a JS rejection value.
pub(crate) fn js_error_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string())
}
