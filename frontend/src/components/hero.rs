//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="masthead" id="page-top">
            <h1 class="masthead-heading">"Grow and Harvest NFTs"</h1>
            <p class="masthead-subheading">
                "Start by minting a plant using the NEAR NFT contract. "
                "Plants you own can be harvested for derived tokens."
            </p>
        </header>
    }
}
