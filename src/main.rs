use edusales::{routes, state, store};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    // Initialize the remote store client (non-fatal: the API serves the
    // fixture dataset when the store is unconfigured).
    let store = match store::StoreConfig::from_env() {
        Ok(config) => match store::StoreClient::new(config) {
            Ok(client) => {
                tracing::info!("remote store client initialized");
                Some(client)
            }
            Err(e) => {
                tracing::warn!(error = %e, "store client build failed — serving fixture data");
                None
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "remote store not configured — serving fixture data");
            None
        }
    };

    let state = state::AppState::new(store);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "edusales listening");
    axum::serve(listener, app).await.expect("server failed");
}
