//! Shared application state for axum handlers.

use std::sync::Arc;

use homebase_app::ports::HomeRepository;
use homebase_app::services::home_service::HomeService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be
/// `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Home CRUD service.
    pub home_service: Arc<HomeService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            home_service: Arc::clone(&self.home_service),
        }
    }
}

impl<R> AppState<R>
where
    R: HomeRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(home_service: HomeService<R>) -> Self {
        Self {
            home_service: Arc::new(home_service),
        }
    }
}
