//! rva-server library - review analyzer HTTP service
//!
//! Keeps reviews in memory, scores their sentiment on first use and serves
//! filtered, sentiment-ordered listings alongside validated review creation.

use axum::Router;
use rva_common::SentimentScorer;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod annotate;
pub mod api;
pub mod query;
pub mod seed;
pub mod store;

use annotate::Annotator;
use store::ReviewStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The process-wide review list
    pub store: Arc<ReviewStore>,
    /// Sentiment annotation over the configured scorer
    pub annotator: Annotator,
}

impl AppState {
    /// Create new application state
    pub fn new(store: ReviewStore, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self {
            store: Arc::new(store),
            annotator: Annotator::new(scorer),
        }
    }
}

/// Build application router
///
/// `/health` is the only fixed path; every other path serves the review
/// operations. GET lists, POST creates, any other method (HEAD included)
/// is answered with 405.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let reviews = get(api::list_reviews)
        .post(api::create_review)
        .head(api::method_not_allowed)
        .fallback(api::method_not_allowed);

    Router::new()
        .route("/", reviews.clone())
        .merge(api::health_routes())
        .fallback(reviews)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
