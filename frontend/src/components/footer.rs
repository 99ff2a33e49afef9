//! Footer component

use leptos::*;

use crate::services::use_session;

#[component]
pub fn Footer() -> impl IntoView {
    let session = use_session();

    view! {
        <footer class="footer" id="connect">
            <div class="footer-account">
                {move || match session.account_id() {
                    Some(account) => view! {
                        <span>{account}</span>
                        <a href="#" on:click=move |_| session.sign_out()>"Sign out"</a>
                    }
                    .into_view(),
                    None => view! {
                        <a href="#" on:click=move |_| session.request_sign_in()>
                            "Connect wallet"
                        </a>
                    }
                    .into_view(),
                }}
            </div>
            <div>"Copyright © Plantary 2020"</div>
        </footer>
    }
}
