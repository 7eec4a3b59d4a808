use std::net::SocketAddr;
use std::sync::Arc;

use meadowlark_api::{app, AppState};
use meadowlark_core::catalog;
use meadowlark_core::repository::CatalogRepository;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "meadowlark_api=debug,meadowlark_core=debug,meadowlark_store=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = meadowlark_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Meadowlark Travel on port {}", config.server.port);

    let db = meadowlark_store::DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    let catalog_repo = Arc::new(meadowlark_store::PgCatalog::new(db.pool.clone()));
    catalog_repo
        .seed_if_empty(&catalog::seed_packages())
        .await
        .expect("Failed to seed the catalog");

    let state = AppState {
        catalog: catalog_repo,
        subscriptions: Arc::new(meadowlark_store::PgSubscriptions::new(db.pool.clone())),
        newsletter: Arc::new(meadowlark_store::PgNewsletter::new(db.pool.clone())),
    };

    let app = app(state, config.session.cookie_secure);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
