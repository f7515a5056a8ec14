use marquee::config::Config;
use marquee::store::{FirestoreClient, SharedMovieStore};
use marquee::ui::{make_config, App, AppContext};
use tracing::{error, info};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let client = match FirestoreClient::new(config.firestore.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create store client: {}", e);
            std::process::exit(1);
        }
    };

    info!("Starting marquee");
    let context = AppContext {
        store: SharedMovieStore::new(client),
        config,
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(context)
        .launch(App);
}
