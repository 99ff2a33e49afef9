//! Plantary - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for minting plant NFTs and harvesting derived
//! tokens on the NEAR blockchain. All business rules live in the
//! external contract; this crate is presentation and thin call glue.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (wallet connection)                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Home                                                        │
//! │  ├── Hero (title, description)                              │
//! │  ├── MintGallery (plant catalog, mint dialogs)              │
//! │  ├── TokenList kind=Plant   ("My Plants")                   │
//! │  └── TokenList kind=Harvest ("My Harvests")                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (TokenRecord, TokenMetadata, etc.)
//! - [`components`] - UI components (Header, MintGallery, TokenList, etc.)
//! - [`services`] - External communication (wallet session, contract, metadata)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Tokens
    TokenId, TokenKind, TokenRecord,
    // Metadata
    MetadataAttribute, TokenDisplay, TokenMetadata,
    // Fetch state
    FetchState,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🌱 Plantary - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    // The one shared object: the wallet session, via context rather
    // than ambient globals.
    let session = WalletSession::new();
    provide_context(session);

    // Restore a previous sign-in once at startup.
    spawn_local(async move {
        if let Err(e) = session.restore().await {
            log::error!("❌ Wallet session restore failed: {}", e);
        }
    });

    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=Home/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <Header/>
        <Hero/>
        <MintGallery/>

        <section class="page-section" id="my-plants">
            <div class="text-center">
                <h2 class="page-section-heading">"MY PLANTS"</h2>
            </div>
            <div class="token-grid">
                <TokenList kind=TokenKind::Plant style=CardStyle::GridTile/>
            </div>
        </section>

        <section class="page-section" id="my-harvests">
            <div class="text-center">
                <h2 class="page-section-heading">"MY HARVESTS"</h2>
            </div>
            <div class="token-grid">
                <TokenList kind=TokenKind::Harvest style=CardStyle::GridTile/>
            </div>
        </section>

        <Footer/>
    }
}
