#![recursion_limit = "256"]

mod config;
mod routes;

use leptos::prelude::get_configuration;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, "failed to load .env");
        }
    }

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let leptos = get_configuration(None).expect("leptos configuration");

    let app = routes::app(leptos.leptos_options);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");

    tracing::info!(%addr, "compute console listening");
    axum::serve(listener, app).await.expect("server failed");
}
