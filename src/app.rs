//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns every piece of shared state: the authorization signal, the
//! notice queue, UI chrome flags, and the backend client built over the
//! auth signal. Pages pull these from context.
//!
//! DESIGN
//! ======
//! The persisted session and theme are read in an effect, which only runs in
//! the browser. Server render and first client render therefore agree, and
//! `Protected` holds its decision until the restore has happened.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{navbar::Navbar, protected::Protected, toaster::Toaster};
use crate::config::ClientConfig;
use crate::net::client::ApiClient;
use crate::pages::{
    dashboard::DashboardPage, escrow::EscrowPage, forgot_password::ForgotPasswordPage, home::HomePage,
    kyc::KycPage, login::LoginPage, mining::MiningPage, register::RegisterPage,
    resend_verification::ResendVerificationPage, reset_password::ResetPasswordPage, staking::StakingPage,
    transactions::TransactionsPage, verify_email::VerifyEmailPage, wallet::WalletPage,
};
use crate::state::{
    auth::AuthState,
    notice::NoticeState,
    theme::{ThemeStore, apply_to_document, system_prefers_dark},
    ui::UiState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let notices = RwSignal::new(NoticeState::default());
    let ui = RwSignal::new(UiState::default());
    let config = ClientConfig::from_env();
    let api = ApiClient::new(&config, auth);

    provide_context(auth);
    provide_context(notices);
    provide_context(ui);
    provide_context(config);
    provide_context(api);

    Effect::new(move |_| {
        auth.update(AuthState::resume);
        let theme = ThemeStore::default().initial(system_prefers_dark());
        apply_to_document(theme);
        ui.update(|u| u.theme = theme);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/nilotic-wallet.css"/>
        <Title text="Nilotic Wallet"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("verify") view=VerifyEmailPage/>
                    <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                    <Route path=StaticSegment("resend-verification") view=ResendVerificationPage/>
                    <Route
                        path=(StaticSegment("auth"), StaticSegment("kyc"), ParamSegment("id"))
                        view=KycPage
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <Protected><DashboardPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("wallet")
                        view=|| view! { <Protected><WalletPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("transactions")
                        view=|| view! { <Protected><TransactionsPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("mining")
                        view=|| view! { <Protected><MiningPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("staking")
                        view=|| view! { <Protected><StakingPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("escrow-claim")
                        view=|| view! { <Protected><EscrowPage/></Protected> }
                    />
                </Routes>
            </main>
            <Toaster/>
        </Router>
    }
}
