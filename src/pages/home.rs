//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

/// Token allocation shown on the landing page, in millions of SLW.
pub const TOKENOMICS: [(&str, f64, u8); 3] = [
    ("Pre-Mined", 194.25, 35),
    ("Staking Rewards", 333.0, 60),
    ("Reserved/Burned", 27.75, 5),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let signed_in = move || auth.with(|a| a.is_authenticated());

    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1>"Nilotic Wallet"</h1>
                <p class="home-hero__tagline">"Send, mine, stake and escrow SLW from one place."</p>
                <div class="home-hero__actions">
                    <Show
                        when=signed_in
                        fallback=|| {
                            view! {
                                <A href="/register" attr:class="button button--primary">"Get Started"</A>
                                <A href="/login" attr:class="button">"Sign In"</A>
                            }
                        }
                    >
                        <A href="/dashboard" attr:class="button button--primary">"Go to Dashboard"</A>
                    </Show>
                </div>
            </section>
            <section class="home-tokenomics">
                <h2>"Tokenomics"</h2>
                <ul>
                    {TOKENOMICS
                        .iter()
                        .map(|(label, millions, pct)| {
                            view! { <li>{format!("{label} ({pct}%): {millions}M SLW")}</li> }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
