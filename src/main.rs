//! SSR host for the wallet client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the server-rendered shell and the compiled WASM bundle. The wallet
//! backend is a separate service; this process never proxies API calls.
//!
//! ERROR HANDLING
//! ==============
//! Startup failures (configuration, bind) are logged and end the process
//! with a non-zero exit code.

#[cfg(feature = "ssr")]
mod host {
    use std::net::SocketAddr;
    use std::path::PathBuf;

    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use nilotic_wallet::app::{App, shell};
    use tower_http::services::ServeDir;
    use tower_http::trace::TraceLayer;

    /// Leptos SSR routes, static assets under `/pkg`, and a health probe.
    ///
    /// # Errors
    ///
    /// Returns an error if `[package.metadata.leptos]` cannot be loaded.
    pub fn app() -> Result<(Router, SocketAddr), String> {
        let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
        let leptos_options = conf.leptos_options;
        let addr = listen_addr(leptos_options.site_addr, std::env::var("PORT").ok().as_deref())?;
        let routes = generate_route_list(App);

        let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
        let router = Router::new()
            .route("/healthz", get(healthz))
            .leptos_routes(&leptos_options, routes, {
                let opts = leptos_options.clone();
                move || shell(opts.clone())
            })
            .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
            .layer(TraceLayer::new_for_http())
            .with_state(leptos_options);
        Ok((router, addr))
    }

    /// Configured address, with the port replaced by `PORT` when set.
    fn listen_addr(configured: SocketAddr, port: Option<&str>) -> Result<SocketAddr, String> {
        match port {
            None => Ok(configured),
            Some(raw) => {
                let port: u16 = raw.trim().parse().map_err(|e| format!("invalid PORT {raw:?}: {e}"))?;
                Ok(SocketAddr::new(configured.ip(), port))
            }
        }
    }

    async fn healthz() -> StatusCode {
        StatusCode::OK
    }

    pub async fn run() -> Result<(), String> {
        let (router, addr) = app()?;
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| format!("failed to bind {addr}: {e}"))?;
        tracing::info!(%addr, "nilotic wallet listening");
        axum::serve(listener, router.into_make_service())
            .await
            .map_err(|e| format!("server failed: {e}"))
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    tracing_subscriber::fmt::init();
    match host::run().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {}
