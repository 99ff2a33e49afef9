use leptos::*;

use crate::services::use_session;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();

    let on_wallet_click = move |_| {
        if session.signed_in() {
            session.sign_out();
        } else {
            session.request_sign_in();
        }
    };

    view! {
        <nav class="navbar" id="mainNav">
            <a class="navbar-brand" href="#page-top">"PLANTARY"</a>
            <ul class="navbar-nav">
                <li class="nav-item"><a class="nav-link" href="#mint">"MINT A PLANT"</a></li>
                <li class="nav-item"><a class="nav-link" href="#my-plants">"MY PLANTS"</a></li>
                <li class="nav-item"><a class="nav-link" href="#my-harvests">"MY HARVESTS"</a></li>
                <li class="nav-item">
                    <a class="nav-link wallet-status" href="#" on:click=on_wallet_click>
                        {move || match session.account_id() {
                            Some(account) => account,
                            None => "CONNECT WALLET".to_string(),
                        }}
                    </a>
                </li>
            </ul>
        </nav>
    }
}
