//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Token Types** - On-chain token records and classification codes
//! - **Metadata Types** - Off-chain metadata documents and hydrated display
//! - **Fetch Types** - Explicit async fetch state for views
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::PLANT_NAMES;

// =============================================================================
// Token Types
// =============================================================================

/// Token identifier, as minted by the contract.
pub type TokenId = u64;

/// Classification of an owned token.
///
/// Wire codes match the contract (`vtype`): 1 = Plant, 2 = Harvest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A plant, minted directly. Can be harvested.
    Plant,
    /// A harvest, derived from a parent plant.
    Harvest,
}

impl TokenKind {
    /// Decode a contract `vtype` code.
    pub fn from_code(code: i8) -> Option<TokenKind> {
        match code {
            1 => Some(TokenKind::Plant),
            2 => Some(TokenKind::Harvest),
            _ => None,
        }
    }

    /// Encode back to the contract `vtype` code.
    pub fn code(&self) -> i8 {
        match self {
            TokenKind::Plant => 1,
            TokenKind::Harvest => 2,
        }
    }
}

/// A token record as returned by `get_owner_veggies_page_json`.
///
/// Ownership and lifecycle live entirely in the contract; this struct is
/// read-only view input. `dna` and `parent_vid` are opaque pass-through.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Token id
    pub vid: TokenId,
    /// Kind code (1 = plant, 2 = harvest)
    pub vtype: i8,
    /// Variety code within the kind
    pub vsubtype: i8,
    /// Parent token id (0 for minted plants)
    #[serde(default)]
    pub parent_vid: TokenId,
    /// Opaque lineage data
    #[serde(default)]
    pub dna: u64,
    /// URL of the off-chain metadata document
    pub meta_url: String,
}

impl TokenRecord {
    /// Decoded kind, if the wire code is known.
    pub fn kind(&self) -> Option<TokenKind> {
        TokenKind::from_code(self.vtype)
    }
}

/// Display name for a token's type.
///
/// Plants are looked up in the fixed variety table; an out-of-range
/// subtype code gets an explicit fallback rather than panicking.
pub fn type_name(kind: TokenKind, subtype: i8) -> &'static str {
    match kind {
        TokenKind::Plant => {
            if subtype >= 1 {
                PLANT_NAMES
                    .get(subtype as usize - 1)
                    .copied()
                    .unwrap_or("Unknown plant")
            } else {
                "Unknown plant"
            }
        }
        TokenKind::Harvest => "Harvest",
    }
}

// =============================================================================
// Metadata Types
// =============================================================================

/// One `trait_type`/`value` pair from a metadata document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetadataAttribute {
    pub trait_type: String,
    pub value: String,
}

/// Off-chain metadata document for a token.
///
/// Fetched by plain GET from the token's `meta_url`. Every field is
/// defaultable: a document missing fields still hydrates, with blanks.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub attributes: Vec<MetadataAttribute>,
}

/// The hydrated display fields a card actually renders.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenDisplay {
    pub name: String,
    pub description: String,
    pub image: String,
    /// "Artist: X" line, present only when the document carries an
    /// `artist` attribute.
    pub artist: Option<String>,
}

// =============================================================================
// Fetch Types
// =============================================================================

/// Explicit state of an async fetch, consumed by views.
///
/// Replaces the silent-failure pattern: a failed fetch renders as an
/// inline error with a retry affordance instead of leaving defaults.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Wallet connection / session failure.
    Wallet(String),
    /// Contract call rejected or failed.
    Contract(String),
    /// Metadata document missing or malformed.
    Metadata(String),
    /// Network/HTTP error.
    Http(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Wallet(msg) => write!(f, "Wallet error: {}", msg),
            AppError::Contract(msg) => write!(f, "Contract error: {}", msg),
            AppError::Metadata(msg) => write!(f, "Metadata error: {}", msg),
            AppError::Http(msg) => write!(f, "Network error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_round_trip() {
        assert_eq!(TokenKind::from_code(1), Some(TokenKind::Plant));
        assert_eq!(TokenKind::from_code(2), Some(TokenKind::Harvest));
        assert_eq!(TokenKind::from_code(0), None);
        assert_eq!(TokenKind::from_code(-3), None);
        assert_eq!(TokenKind::Plant.code(), 1);
        assert_eq!(TokenKind::Harvest.code(), 2);
    }

    #[test]
    fn test_type_name_known_varieties() {
        let expected = [
            "Oracle Plant",
            "Portrait Plant",
            "Money Plant",
            "Compliment Plant",
            "Insult Plant",
            "Seed Plant",
        ];
        for (i, name) in expected.iter().enumerate() {
            assert_eq!(type_name(TokenKind::Plant, (i + 1) as i8), *name);
        }
    }

    #[test]
    fn test_type_name_fallback() {
        assert_eq!(type_name(TokenKind::Plant, 0), "Unknown plant");
        assert_eq!(type_name(TokenKind::Plant, 7), "Unknown plant");
        assert_eq!(type_name(TokenKind::Plant, -1), "Unknown plant");
        assert_eq!(type_name(TokenKind::Harvest, 1), "Harvest");
    }

    #[test]
    fn test_token_record_deserialization() {
        // Shape returned by get_owner_veggies_page_json
        let json = r#"[
            {"vid": 7, "vtype": 1, "vsubtype": 1, "parent_vid": 0,
             "dna": 12345, "meta_url": "https://arweave.net/abc"},
            {"vid": 9, "vtype": 1, "vsubtype": 3,
             "meta_url": "https://arweave.net/def"}
        ]"#;

        let records: Vec<TokenRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].vid, 7);
        assert_eq!(records[0].kind(), Some(TokenKind::Plant));
        assert_eq!(records[0].dna, 12345);
        // absent optional fields default
        assert_eq!(records[1].parent_vid, 0);
        assert_eq!(records[1].dna, 0);
    }

    #[test]
    fn test_metadata_defaults() {
        let doc: TokenMetadata = serde_json::from_str("{}").unwrap();
        assert!(doc.name.is_empty());
        assert!(doc.attributes.is_empty());
    }
}
