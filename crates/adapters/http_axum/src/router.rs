//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use homebase_app::ports::HomeRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the `/homes` API plus a liveness route at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: HomeRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(liveness))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn liveness() -> &'static str {
    "hello world!\n"
}
