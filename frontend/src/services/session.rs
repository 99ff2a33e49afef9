//! NEAR wallet session, wrapped from near-api-js.
//!
//! The original app kept the wallet connection and account id in
//! `window`-scoped globals. Here the session is an explicit object,
//! provided to the component tree through Leptos context.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::config::{APP_NAME, CONTRACT_ID};
use crate::services::js_error_message;
use crate::types::{AppError, AppResult};

/// Wallet session state shared across components.
///
/// `Copy` so components can capture it in closures; the inner signal is
/// the only piece of shared state in the application.
#[derive(Clone, Copy)]
pub struct WalletSession {
    account_id: RwSignal<Option<String>>,
}

impl WalletSession {
    /// Create a fresh, signed-out session.
    pub fn new() -> Self {
        Self {
            account_id: create_rw_signal(None),
        }
    }

    /// Initialize the NEAR connection and restore a previous sign-in
    /// from the wallet's local storage, if one exists.
    pub async fn restore(self) -> AppResult<()> {
        JsFuture::from(init_near(CONTRACT_ID))
            .await
            .map_err(|e| AppError::Wallet(js_error_message(&e)))?;

        if is_signed_in() {
            let account = get_account_id();
            if !account.is_empty() {
                log::info!("🔑 Restored wallet session: {}", account);
                self.account_id.set(Some(account));
            }
        }
        Ok(())
    }

    /// Whether a wallet account is currently signed in.
    pub fn signed_in(&self) -> bool {
        self.account_id.with(|a| a.is_some())
    }

    /// The signed-in account id, if any. Reactive.
    pub fn account_id(&self) -> Option<String> {
        self.account_id.get()
    }

    /// Start the wallet redirect sign-in flow for the Plantary contract.
    pub fn request_sign_in(&self) {
        log::info!("🔌 Requesting wallet sign-in...");
        request_sign_in(CONTRACT_ID, APP_NAME);
    }

    /// Sign out and reload so every component drops its view state.
    pub fn sign_out(&self) {
        log::info!("👋 Signing out");
        sign_out();
        self.account_id.set(None);
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

impl Default for WalletSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the [`WalletSession`] from context.
pub fn use_session() -> WalletSession {
    use_context::<WalletSession>().expect("WalletSession provided at app root")
}

/// JavaScript functions from near.js
#[wasm_bindgen(module = "/src/js/near.js")]
extern "C" {
    #[wasm_bindgen(js_name = "initNear")]
    fn init_near(contract_id: &str) -> js_sys::Promise;

    #[wasm_bindgen(js_name = "isSignedIn")]
    fn is_signed_in() -> bool;

    #[wasm_bindgen(js_name = "getAccountId")]
    fn get_account_id() -> String;

    #[wasm_bindgen(js_name = "requestSignIn")]
    fn request_sign_in(contract_id: &str, app_title: &str);

    #[wasm_bindgen(js_name = "signOut")]
    fn sign_out();
}
