//! Mint gallery: the fixed plant catalog with per-variety mint dialogs.

use leptos::*;

use crate::config::{PlantListing, PLANT_CATALOG};
use crate::services::{use_session, ContractClient};

#[component]
pub fn MintGallery() -> impl IntoView {
    view! {
        <section class="page-section" id="mint">
            <div class="text-center">
                <h2 class="page-section-heading">"CHOOSE A PLANT"</h2>
            </div>
            <div class="mint-grid">
                {PLANT_CATALOG
                    .iter()
                    .map(|listing| view! { <MintTile listing=*listing/> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// One catalog tile; clicking opens the mint dialog for that variety.
#[component]
fn MintTile(listing: PlantListing) -> impl IntoView {
    let (open, set_open) = create_signal(false);

    view! {
        <div class="mint-tile" on:click=move |_| set_open.set(true)>
            <img class="mint-image" src=listing.image alt=listing.name/>
        </div>
        <Show when=move || open.get() fallback=|| view! {}>
            <div class="mint-dialog">
                <button class="close" on:click=move |_| set_open.set(false)>"×"</button>
                <h2 class="mint-title">{listing.name}</h2>
                <img class="mint-image" src=listing.image alt=listing.name/>
                <p class="mint-text">
                    {listing.description}
                    {listing.mint_fee_near.map(|fee| view! {
                        <br/>
                        <em>"Minting fee: " {fee} " Ⓝ"</em>
                    })}
                </p>
                {listing.mint_fee_near.map(|fee| view! {
                    <MintButton subtype=listing.subtype fee=fee/>
                })}
            </div>
        </Show>
    }
}

/// Submits the mint and surfaces the outcome inline.
///
/// Signed-out users are sent to the wallet sign-in flow instead, as in
/// the original app.
#[component]
fn MintButton(subtype: i8, fee: u64) -> impl IntoView {
    let session = use_session();
    let (status, set_status) = create_signal(None::<String>);
    let (busy, set_busy) = create_signal(false);

    let on_click = move |_| {
        if busy.get() {
            return;
        }
        if !session.signed_in() {
            session.request_sign_in();
            return;
        }
        set_busy.set(true);
        set_status.set(None);

        spawn_local(async move {
            match ContractClient::new().mint_token(subtype, fee).await {
                Ok(()) => {
                    log::info!("✅ Mint submitted for variety {}", subtype);
                    set_status.set(Some(
                        "Mint submitted. Your new plant will appear under My Plants.".to_string(),
                    ));
                }
                Err(e) => {
                    log::error!("❌ Mint failed for variety {}: {}", subtype, e);
                    set_status.set(Some(format!("❌ {}", e)));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <button class="btn btn-primary" on:click=on_click disabled=move || busy.get()>
            {move || if busy.get() { "Minting…" } else { "Mint Plant" }}
        </button>
        <Show when=move || status.get().is_some() fallback=|| view! {}>
            <div class="mint-status">{move || status.get().unwrap_or_default()}</div>
        </Show>
    }
}
