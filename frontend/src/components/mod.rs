//! UI Components for the Plantary application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with wallet connection
//! - [`Hero`] - Masthead title and description
//! - [`Footer`] - Page footer with account link
//!
//! # Feature Components
//! - [`MintGallery`] - Fixed plant catalog with mint dialogs
//! - [`TokenList`] - Owned-token list loader, one card per record
//! - [`TokenCard`] - Single token with metadata hydration

mod header;
mod hero;
mod mint;
mod token_list;
mod token_card;
mod footer;

pub use header::*;
pub use hero::*;
pub use mint::*;
pub use token_list::*;
pub use token_card::*;
pub use footer::*;
