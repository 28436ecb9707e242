//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod homes;

use axum::Router;
use axum::routing::get;

use homebase_app::ports::HomeRepository;

use crate::state::AppState;

/// Build the `/homes` routes.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: HomeRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/homes", get(homes::list::<R>).post(homes::create::<R>))
        .route(
            "/homes/{id}",
            get(homes::get::<R>)
                .put(homes::update::<R>)
                .delete(homes::delete::<R>),
        )
}
