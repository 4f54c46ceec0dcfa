//! Seatbook - seat reservation web client
//!
//! One binary for both targets: with the `server` feature it renders pages
//! on the server, with `web` it is the WASM client that hydrates them.

use seatbook::app::App;

fn main() {
    #[cfg(feature = "server")]
    init_server_logging();

    #[cfg(not(feature = "server"))]
    init_web_logging();

    tracing::info!("Starting Seatbook v{}", env!("CARGO_PKG_VERSION"));
    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_server_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let dev = match seatbook::config::load_config() {
        Ok(config) => config.dev,
        Err(e) => {
            eprintln!("Failed to load configuration, using defaults: {}", e);
            false
        }
    };
    let default_filter = if dev {
        "seatbook=debug,dioxus=info"
    } else {
        "seatbook=info,dioxus=warn"
    };

    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
    if let Err(e) = result {
        eprintln!("Logging already initialized: {}", e);
    }
}

#[cfg(not(feature = "server"))]
fn init_web_logging() {
    let level = if seatbook::config::AppConfig::from_build_env().dev {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    if let Err(e) = dioxus::logger::init(level) {
        tracing::warn!("Logger already initialized: {}", e);
    }
}
