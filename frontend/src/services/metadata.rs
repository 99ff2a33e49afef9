//! Off-chain token metadata service.
//!
//! The contract stores ownership and lineage; display metadata lives in
//! a JSON document at the token's `meta_url`. This service fetches that
//! document and extracts the fields the cards render.

use gloo_net::http::Request;

use crate::types::{AppError, AppResult, TokenDisplay, TokenMetadata};

/// Attribute tag carrying the artist credit.
const ARTIST_TRAIT: &str = "artist";

/// Project a metadata document onto the four display fields.
///
/// `name`, `description` and `image` are taken verbatim. The artist line
/// comes from the first attribute tagged `artist`; without one the card
/// shows no artist credit. Pure, so hydration is idempotent per document.
pub fn extract_display(doc: &TokenMetadata) -> TokenDisplay {
    let artist = doc
        .attributes
        .iter()
        .find(|attr| attr.trait_type == ARTIST_TRAIT)
        .map(|attr| format!("Artist: {}", attr.value));

    TokenDisplay {
        name: doc.name.clone(),
        description: doc.description.clone(),
        image: doc.image.clone(),
        artist,
    }
}

/// Turn an HTTP response outcome into a hydration result.
///
/// A non-2xx status wins over whatever parsed (or failed to parse) from
/// the body; a 2xx with an undecodable body is a metadata error. Pure,
/// so both failure shapes are testable off-wasm.
fn decode_metadata(
    ok: bool,
    status: u16,
    body: Result<TokenMetadata, String>,
) -> AppResult<TokenDisplay> {
    if !ok {
        return Err(AppError::Http(format!("Metadata host returned {}", status)));
    }

    let doc = body.map_err(|e| AppError::Metadata(format!("Malformed metadata document: {}", e)))?;
    Ok(extract_display(&doc))
}

/// Fetch and extract a token's metadata document.
///
/// Plain GET, no auth. Errors are mapped, never swallowed: the caller
/// renders a retry affordance on failure.
pub async fn fetch_token_metadata(url: &str) -> AppResult<TokenDisplay> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| AppError::Http(format!("Metadata request failed: {}", e)))?;

    let body = response
        .json::<TokenMetadata>()
        .await
        .map_err(|e| e.to_string());

    decode_metadata(response.ok(), response.status(), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MetadataAttribute;

    fn doc_with_attrs(attrs: Vec<MetadataAttribute>) -> TokenMetadata {
        TokenMetadata {
            name: "Oracle #7".to_string(),
            description: "A wise plant.".to_string(),
            image: "https://arweave.net/img".to_string(),
            attributes: attrs,
        }
    }

    #[test]
    fn test_extract_with_artist() {
        let doc = doc_with_attrs(vec![
            MetadataAttribute {
                trait_type: "rarity".to_string(),
                value: "epic".to_string(),
            },
            MetadataAttribute {
                trait_type: "artist".to_string(),
                value: "X".to_string(),
            },
        ]);

        let display = extract_display(&doc);
        assert_eq!(display.name, "Oracle #7");
        assert_eq!(display.description, "A wise plant.");
        assert_eq!(display.image, "https://arweave.net/img");
        assert_eq!(display.artist.as_deref(), Some("Artist: X"));
    }

    #[test]
    fn test_extract_first_artist_wins() {
        let doc = doc_with_attrs(vec![
            MetadataAttribute {
                trait_type: "artist".to_string(),
                value: "first".to_string(),
            },
            MetadataAttribute {
                trait_type: "artist".to_string(),
                value: "second".to_string(),
            },
        ]);

        assert_eq!(
            extract_display(&doc).artist.as_deref(),
            Some("Artist: first")
        );
    }

    #[test]
    fn test_extract_without_artist() {
        let doc = doc_with_attrs(vec![MetadataAttribute {
            trait_type: "rarity".to_string(),
            value: "common".to_string(),
        }]);
        assert_eq!(extract_display(&doc).artist, None);

        let empty = doc_with_attrs(vec![]);
        assert_eq!(extract_display(&empty).artist, None);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let doc = doc_with_attrs(vec![MetadataAttribute {
            trait_type: "artist".to_string(),
            value: "X".to_string(),
        }]);

        let first = extract_display(&doc);
        let second = extract_display(&doc);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_document_is_failed_state() {
        // 404 from the metadata host: the card gets an explicit error
        // state; whatever came back as a body is ignored.
        let result = decode_metadata(false, 404, Ok(TokenMetadata::default()));
        assert_eq!(
            result,
            Err(AppError::Http("Metadata host returned 404".to_string()))
        );

        let result = decode_metadata(false, 503, Err("unreadable".to_string()));
        assert_eq!(
            result,
            Err(AppError::Http("Metadata host returned 503".to_string()))
        );
    }

    #[test]
    fn test_malformed_document_is_failed_state() {
        // 200 with a body that is not a metadata document.
        let body = serde_json::from_str::<TokenMetadata>("<!doctype html>")
            .map_err(|e| e.to_string());
        let result = decode_metadata(true, 200, body);
        assert!(matches!(result, Err(AppError::Metadata(_))));
    }

    #[test]
    fn test_decode_ok_matches_extraction() {
        let doc = doc_with_attrs(vec![MetadataAttribute {
            trait_type: "artist".to_string(),
            value: "X".to_string(),
        }]);
        let result = decode_metadata(true, 200, Ok(doc.clone()));
        assert_eq!(result, Ok(extract_display(&doc)));
    }

    #[test]
    fn test_document_missing_fields_hydrates_blank() {
        let json = r#"{"attributes": []}"#;
        let doc: TokenMetadata = serde_json::from_str(json).unwrap();
        let display = extract_display(&doc);
        assert!(display.name.is_empty());
        assert!(display.image.is_empty());
        assert_eq!(display.artist, None);
    }
}
