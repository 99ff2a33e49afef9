//! Card for a single owned token.
//!
//! Holds and renders one token; hydrates display metadata from the
//! token's `meta_url` on mount and re-hydrates if the URL changes.

use leptos::*;

use crate::config::HARVEST_FEE_NEAR;
use crate::services::{fetch_token_metadata, ContractClient};
use crate::types::{type_name, AppResult, FetchState, TokenDisplay, TokenId, TokenKind, TokenRecord};

/// Mutually exclusive render styles, chosen by the caller of the list
/// loader and forwarded uniformly to every card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardStyle {
    /// Image tile; clicking it opens the detail dialog.
    GridTile,
    /// Full detail panel: name, image, description, artist, type, harvest.
    Detail,
    /// Flat listing with no interactivity.
    Plain,
}

/// Harvest fee in Ⓝ for a token of this kind.
///
/// UI-side placeholder; the contract enforces the real price. Harvests
/// themselves cannot be harvested.
pub fn harvest_price(kind: TokenKind) -> Option<u64> {
    match kind {
        TokenKind::Plant => Some(HARVEST_FEE_NEAR),
        TokenKind::Harvest => None,
    }
}

#[component]
pub fn TokenCard(record: TokenRecord, style: CardStyle) -> impl IntoView {
    let vid = record.vid;
    let kind = record.kind();
    let subtype = record.vsubtype;
    let meta_url = record.meta_url.clone();

    // Keyed on the URL: a changed URL re-hydrates, and a disposed card
    // drops the resource with its scope, so a late response can never
    // write into an unmounted view.
    let meta = create_local_resource(
        move || meta_url.clone(),
        |url| async move { fetch_token_metadata(&url).await },
    );

    let display = Signal::derive(move || match meta.get() {
        None => FetchState::Loading,
        Some(Ok(d)) => FetchState::Ready(d),
        Some(Err(e)) => FetchState::Failed(e.to_string()),
    });

    match style {
        CardStyle::GridTile => {
            let (open, set_open) = create_signal(false);
            view! {
                <div class="token-tile" on:click=move |_| set_open.set(true)>
                    {move || match display.get() {
                        FetchState::Ready(d) => view! {
                            <img class="token-image" src=d.image alt=d.name/>
                        }
                        .into_view(),
                        FetchState::Loading => view! {
                            <div class="token-image placeholder">"…"</div>
                        }
                        .into_view(),
                        FetchState::Failed(_) => view! {
                            <div class="token-image placeholder">"!"</div>
                        }
                        .into_view(),
                    }}
                </div>
                <Show when=move || open.get() fallback=|| view! {}>
                    <div class="token-dialog">
                        <button
                            class="close"
                            on:click=move |_| set_open.set(false)
                        >
                            "×"
                        </button>
                        <CardDetail vid=vid kind=kind subtype=subtype meta=meta display=display/>
                    </div>
                </Show>
            }
            .into_view()
        }

        CardStyle::Detail => view! {
            <CardDetail vid=vid kind=kind subtype=subtype meta=meta display=display/>
        }
        .into_view(),

        CardStyle::Plain => view! {
            {move || match display.get() {
                FetchState::Ready(d) => view! {
                    <div class="token">
                        <div class="image"><img src=d.image alt=d.name.clone()/></div>
                        <div class="name">{d.name}</div>
                        <div class="description">{d.description}</div>
                        <div class="artist">{d.artist.unwrap_or_default()}</div>
                    </div>
                }
                .into_view(),
                FetchState::Loading => view! {
                    <div class="token loading">"Loading…"</div>
                }
                .into_view(),
                FetchState::Failed(reason) => view! {
                    <div class="token error">
                        {reason}
                        <button on:click=move |_| meta.refetch()>"Retry"</button>
                    </div>
                }
                .into_view(),
            }}
        }
        .into_view(),
    }
}

/// Detail panel shared by the dialog and the standalone detail style.
#[component]
fn CardDetail(
    vid: TokenId,
    kind: Option<TokenKind>,
    subtype: i8,
    meta: Resource<String, AppResult<TokenDisplay>>,
    display: Signal<FetchState<TokenDisplay>>,
) -> impl IntoView {
    let token_type = kind.map(|k| type_name(k, subtype)).unwrap_or("Unknown");
    let fee = kind.and_then(harvest_price);

    view! {
        <div class="token-detail">
            {move || match display.get() {
                FetchState::Ready(d) => view! {
                    <h2 class="token-title">{d.name.clone()}</h2>
                    <img class="token-image" src=d.image alt=d.name/>
                    <p class="token-text">
                        {d.description}
                        {d.artist.map(|artist| view! {
                            <br/>
                            <em>{artist}</em>
                        })}
                        <br/>
                        <em>"Type: " {token_type}</em>
                        {fee.map(|fee| view! {
                            <br/>
                            <em>"Harvest fee: " {fee} " Ⓝ"</em>
                        })}
                    </p>
                }
                .into_view(),
                FetchState::Loading => view! {
                    <p class="token-text loading">"Loading metadata…"</p>
                }
                .into_view(),
                FetchState::Failed(reason) => view! {
                    <p class="token-text error">
                        {reason}
                        <button on:click=move |_| meta.refetch()>"Retry"</button>
                    </p>
                }
                .into_view(),
            }}
            {fee.map(|fee| view! { <HarvestButton vid=vid fee=fee/> })}
        </div>
    }
}

/// Submits the harvest and surfaces the outcome inline.
///
/// The owned-token list is not refreshed afterwards; a new harvest shows
/// up on the next listing.
#[component]
fn HarvestButton(vid: TokenId, fee: u64) -> impl IntoView {
    let (status, set_status) = create_signal(None::<String>);
    let (busy, set_busy) = create_signal(false);

    let on_click = move |_| {
        if busy.get() {
            return;
        }
        set_busy.set(true);
        set_status.set(None);

        spawn_local(async move {
            match ContractClient::new().harvest_token(vid, fee).await {
                Ok(()) => {
                    log::info!("✅ Harvest submitted for token {}", vid);
                    set_status.set(Some(
                        "Harvest submitted. Revisit your harvests to see it.".to_string(),
                    ));
                }
                Err(e) => {
                    log::error!("❌ Harvest failed for token {}: {}", vid, e);
                    set_status.set(Some(format!("❌ {}", e)));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <button class="btn btn-primary" on:click=on_click disabled=move || busy.get()>
            {move || if busy.get() { "Harvesting…" } else { "Harvest Plant" }}
        </button>
        <Show when=move || status.get().is_some() fallback=|| view! {}>
            <div class="harvest-status">{move || status.get().unwrap_or_default()}</div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harvest_price_per_kind() {
        assert_eq!(harvest_price(TokenKind::Plant), Some(HARVEST_FEE_NEAR));
        assert_eq!(harvest_price(TokenKind::Harvest), None);
    }
}
