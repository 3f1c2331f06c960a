mod config;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    if config.drop_enabled() {
        tracing::info!(
            rpc = config.drop.rpc_endpoint.as_deref().unwrap_or_default(),
            candy_machine = config.drop.drop_contract_address.as_deref().unwrap_or_default(),
            "drop configured"
        );
    } else {
        tracing::warn!("SOLANA_RPC_HOST or CANDY_MACHINE_ID missing; drop widget disabled");
    }

    let port = config.port;
    let app = routes::app(config.drop).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "candy-drop listening");
    axum::serve(listener, app).await.expect("server failed");
}
