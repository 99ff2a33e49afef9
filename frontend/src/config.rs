//! Application configuration.
//!
//! Centralized configuration for the Plantary frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// NEAR account id of the Plantary NFT contract.
pub const CONTRACT_ID: &str = "plantary.testnet";

/// Application name for wallet sign-in prompts.
pub const APP_NAME: &str = "Plantary";

/// Harvest fee in Ⓝ, charged when minting a harvest from a plant.
///
/// UI-side placeholder only: the contract enforces the real price.
pub const HARVEST_FEE_NEAR: u64 = 5;

/// Page size used for owned-token listings. 0 means "no paging".
pub const LIST_PAGE_SIZE: u64 = 0;

/// Display names for plant varieties, indexed by `vsubtype - 1`.
pub const PLANT_NAMES: [&str; 6] = [
    "Oracle Plant",
    "Portrait Plant",
    "Money Plant",
    "Compliment Plant",
    "Insult Plant",
    "Seed Plant",
];

/// One mintable plant variety in the catalog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlantListing {
    /// Contract `vsubtype` code.
    pub subtype: i8,
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    /// Minting fee in Ⓝ. `None` marks a variety not yet mintable.
    pub mint_fee_near: Option<u64>,
}

/// The fixed plant catalog rendered by the mint gallery.
///
/// Fees and copy match the contract's pricing; only the first three
/// varieties are mintable so far.
pub const PLANT_CATALOG: [PlantListing; 6] = [
    PlantListing {
        subtype: 1,
        name: "Oracle Plant",
        description: "The oracle plant is a mythical being with syncretic \
            wisdom laying dormant in its fruit, waiting for questions to \
            blossom in the seeker's mind.",
        image: "assets/img/portfolio/plant1.png",
        mint_fee_near: Some(10),
    },
    PlantListing {
        subtype: 2,
        name: "Portrait Plant",
        description: "The portrait plant ripens a multitude of faces, each \
            with unique features. You might see in their eyes a reflection \
            of a familiar facet, or a glimpse from the unknown.",
        image: "assets/img/portfolio/plant3.png",
        mint_fee_near: Some(20),
    },
    PlantListing {
        subtype: 3,
        name: "Money Plant",
        description: "You always wished for a money plant and here it is. \
            The mere sight of its wealthy leaves will bring abundance to \
            your life, even if they can't be used to buy groceries.",
        image: "assets/img/portfolio/plant2.png",
        mint_fee_near: Some(30),
    },
    PlantListing {
        subtype: 4,
        name: "Compliment Plant",
        description: "Available soon.",
        image: "assets/img/portfolio/plant4b.png",
        mint_fee_near: None,
    },
    PlantListing {
        subtype: 5,
        name: "Insult Plant",
        description: "Available soon.",
        image: "assets/img/portfolio/plant6.png",
        mint_fee_near: None,
    },
    PlantListing {
        subtype: 6,
        name: "Seed Plant",
        description: "Available soon.",
        image: "assets/img/portfolio/plant5.png",
        mint_fee_near: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_integrity() {
        assert_eq!(PLANT_CATALOG.len(), PLANT_NAMES.len());
        for (i, listing) in PLANT_CATALOG.iter().enumerate() {
            assert_eq!(listing.subtype as usize, i + 1);
            assert_eq!(listing.name, PLANT_NAMES[i]);
            assert!(!listing.description.is_empty());
        }
    }

    #[test]
    fn test_mintable_varieties_have_fees() {
        let mintable: Vec<_> = PLANT_CATALOG
            .iter()
            .filter(|l| l.mint_fee_near.is_some())
            .collect();
        assert_eq!(mintable.len(), 3);
        assert_eq!(mintable[0].mint_fee_near, Some(10));
        assert_eq!(mintable[1].mint_fee_near, Some(20));
        assert_eq!(mintable[2].mint_fee_near, Some(30));
    }
}
