use axum::extract::Extension;
use axum::routing::get;
use axum::Router;
use catalog_search::auth::validator::{SharedSecretValidator, TokenValidator};
use catalog_search::events::producer::{EventProducer, LogEventProducer};
use catalog_search::search::handlers::{
    handle_get_author, handle_get_book, handle_get_series, handle_main,
};
use catalog_search::search::repository::SearchRepository;
use catalog_search::store::memory::CatalogStore;
use catalog_search::store::types::CatalogData;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!(
            "Usage: {} --bind <addr:port> [--data <catalog.json>] [--auth-token <secret>]",
            args[0]
        );
        eprintln!("Example: {} --bind 127.0.0.1:8080 --data catalog.json", args[0]);

        std::process::exit(1);
    }

    let mut bind_addr: Option<SocketAddr> = None;
    let mut data_path: Option<String> = None;
    let mut auth_token: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--data" => {
                data_path = Some(args[i + 1].clone());
                i += 2;
            }
            "--auth-token" => {
                auth_token = Some(args[i + 1].clone());
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let bind_addr = bind_addr.expect("--bind is required");

    // 1. Entity store, seeded once before the server accepts traffic:
    let store = Arc::new(CatalogStore::new());
    match &data_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            let data: CatalogData = serde_json::from_str(&raw)?;
            store.load(data);
            tracing::info!(
                "Loaded catalog from {}: {} books, {} authors, {} series",
                path,
                store.book_count(),
                store.author_count(),
                store.series_count()
            );
        }
        None => {
            tracing::warn!("No --data file given, starting with an empty catalog");
        }
    }

    // 2. Collaborators:
    let repository = Arc::new(SearchRepository::new(store));
    let validator: Arc<dyn TokenValidator> = Arc::new(SharedSecretValidator::new(auth_token));
    let producer: Arc<dyn EventProducer> = Arc::new(LogEventProducer);

    // 3. HTTP Router:
    let app = Router::new()
        .route("/main", get(handle_main))
        .route("/book/:id", get(handle_get_book))
        .route("/author/:id", get(handle_get_author))
        .route("/series/:id", get(handle_get_series))
        .layer(Extension(repository))
        .layer(Extension(validator))
        .layer(Extension(producer));

    tracing::info!("Catalog search listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
