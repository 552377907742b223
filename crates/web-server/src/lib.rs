use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use database::{BookRepository, BookStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod naming;

/// The shared application state that all handlers can access.
///
/// The store is a trait object so the concrete Postgres repository is
/// injected once at startup and tests can substitute an in-memory double.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookStore>,
}

/// Builds the application router over a given state.
///
/// Kept separate from `run_server` so tests can drive the exact production
/// routes without binding a socket or connecting to Postgres.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/books", get(handlers::list_books).post(handlers::create_book))
        .route(
            "/books/:id",
            get(handlers::get_book)
                .patch(handlers::update_book)
                .delete(handlers::delete_book),
        )
        .with_state(state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024))
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let db_pool = database::connect().await?;
    database::run_migrations(&db_pool).await?;
    let store = BookRepository::new(db_pool);

    let app_state = Arc::new(AppState {
        store: Arc::new(store),
    });

    let app = app(app_state);

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
