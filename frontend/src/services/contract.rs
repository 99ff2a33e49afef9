//! Plantary contract interaction service.
//!
//! Wraps the near-api-js contract handle set up in `near.js`. View calls
//! return JSON the contract serialized itself; change calls attach a
//! deposit and go through the wallet for signing.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::services::js_error_message;
use crate::types::{AppError, AppResult, TokenId, TokenKind, TokenRecord};

/// One Ⓝ in yocto-NEAR has 24 decimal places.
const NEAR_DECIMALS: usize = 24;

/// Convert a whole-Ⓝ fee to a yocto-NEAR decimal string.
///
/// Deposits cross the JS boundary as strings because u128 does not
/// survive the trip through JsValue.
pub fn near_to_yocto(near: u64) -> String {
    if near == 0 {
        return "0".to_string();
    }
    format!("{}{}", near, "0".repeat(NEAR_DECIMALS))
}

/// Client for the Plantary NFT contract.
pub struct ContractClient;

impl ContractClient {
    /// Create a new client. The underlying connection is established
    /// once by [`WalletSession::restore`](crate::services::WalletSession::restore).
    pub fn new() -> Self {
        Self
    }

    /// List tokens owned by `owner_id`, filtered by kind, paged.
    ///
    /// `page_size == 0` requests the whole list. The response replaces
    /// any previously held list wholesale; there is no merging.
    pub async fn list_owned_tokens(
        &self,
        owner_id: &str,
        kind: TokenKind,
        page_size: u64,
        page: u64,
    ) -> AppResult<Vec<TokenRecord>> {
        log::debug!("🌱 Listing {:?} tokens for {}", kind, owner_id);

        let promise = list_owned_tokens_js(owner_id, kind.code(), page_size, page);
        let js_result = JsFuture::from(promise)
            .await
            .map_err(|e| AppError::Contract(js_error_message(&e)))?;

        serde_wasm_bindgen::from_value(js_result)
            .map_err(|e| AppError::Contract(format!("Failed to parse token list: {}", e)))
    }

    /// Mint a new plant of the given variety, attaching the minting fee.
    pub async fn mint_token(&self, subtype: i8, deposit_near: u64) -> AppResult<()> {
        log::info!("🌱 Minting plant variety {} for {} Ⓝ", subtype, deposit_near);

        let promise = mint_token_js(subtype, &near_to_yocto(deposit_near));
        JsFuture::from(promise)
            .await
            .map_err(|e| AppError::Contract(js_error_message(&e)))?;
        Ok(())
    }

    /// Harvest from the plant `parent_vid`, attaching the harvest fee.
    ///
    /// The owned-token list is not refreshed here; callers re-fetch to
    /// see the new harvest.
    pub async fn harvest_token(&self, parent_vid: TokenId, deposit_near: u64) -> AppResult<()> {
        log::info!("🌾 Harvesting plant {} for {} Ⓝ", parent_vid, deposit_near);

        let promise = harvest_token_js(parent_vid, &near_to_yocto(deposit_near));
        JsFuture::from(promise)
            .await
            .map_err(|e| AppError::Contract(js_error_message(&e)))?;
        Ok(())
    }
}

impl Default for ContractClient {
    fn default() -> Self {
        Self::new()
    }
}

/// JavaScript functions from near.js
#[wasm_bindgen(module = "/src/js/near.js")]
extern "C" {
    #[wasm_bindgen(js_name = "listOwnedTokens")]
    fn list_owned_tokens_js(owner_id: &str, vtype: i8, page_size: u64, page: u64)
        -> js_sys::Promise;

    #[wasm_bindgen(js_name = "mintToken")]
    fn mint_token_js(vsubtype: i8, deposit_yocto: &str) -> js_sys::Promise;

    #[wasm_bindgen(js_name = "harvestToken")]
    fn harvest_token_js(parent_vid: u64, deposit_yocto: &str) -> js_sys::Promise;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_to_yocto() {
        assert_eq!(near_to_yocto(0), "0");
        assert_eq!(near_to_yocto(1), "1000000000000000000000000");
        assert_eq!(near_to_yocto(5), "5000000000000000000000000");
        assert_eq!(near_to_yocto(30), "30000000000000000000000000");
    }

    #[test]
    fn test_yocto_has_24_decimals() {
        let yocto = near_to_yocto(7);
        assert_eq!(yocto.len(), 1 + NEAR_DECIMALS);
        assert!(yocto[1..].chars().all(|c| c == '0'));
    }
}
