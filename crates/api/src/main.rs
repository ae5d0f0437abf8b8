use storefront_api::app::{self, AppServices};
use storefront_api::config::AppConfig;

#[tokio::main]
async fn main() {
    storefront_observability::init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // Database-unreachable at startup is fatal by design.
    let services = match &config.database_url {
        Some(url) => match AppServices::postgres(&config.catalog_csv, url).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "could not connect to the event database");
                std::process::exit(1);
            }
        },
        None => AppServices::in_memory(&config.catalog_csv),
    };

    let app = app::build_app(services, config.static_dir.clone());

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(error = %e, addr = %config.addr, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(addr = %config.addr, catalog = %config.catalog_csv.display(), "listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
