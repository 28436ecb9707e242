//! Storage port — repository traits for persistence.

use std::future::Future;

use homebase_domain::error::HomebaseError;
use homebase_domain::home::{Home, NewHome};
use homebase_domain::id::HomeId;

/// Repository for persisting and querying [`Home`]s.
///
/// Every method maps to a single statement against the store, so each call
/// is atomic on its own. Absence is reported through `Option`/`bool` and
/// turned into a not-found error by the service layer.
pub trait HomeRepository {
    /// Insert a new home; the store assigns its id.
    fn create(&self, home: NewHome) -> impl Future<Output = Result<Home, HomebaseError>> + Send;

    /// Get a home by id.
    fn get_by_id(
        &self,
        id: HomeId,
    ) -> impl Future<Output = Result<Option<Home>, HomebaseError>> + Send;

    /// Get every home, in ascending id order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Home>, HomebaseError>> + Send;

    /// Overwrite every field of the home with `home.id`.
    ///
    /// Resolves to `None` when no such home exists.
    fn update(
        &self,
        home: Home,
    ) -> impl Future<Output = Result<Option<Home>, HomebaseError>> + Send;

    /// Remove the home with `id`. Resolves to `false` when nothing was deleted.
    fn delete(&self, id: HomeId) -> impl Future<Output = Result<bool, HomebaseError>> + Send;
}
