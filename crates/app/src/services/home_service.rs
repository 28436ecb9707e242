//! Home service — use-cases for managing property listings.

use homebase_domain::error::{HomebaseError, NotFoundError};
use homebase_domain::home::{Home, NewHome};
use homebase_domain::id::HomeId;

use crate::ports::HomeRepository;

/// Application service for home CRUD operations.
pub struct HomeService<R> {
    repo: R,
}

fn not_found(id: HomeId) -> HomebaseError {
    NotFoundError {
        entity: "Home",
        id: id.to_string(),
    }
    .into()
}

impl<R: HomeRepository> HomeService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a new home and return it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, home), fields(agent_id = %home.agent_id))]
    pub async fn create_home(&self, home: NewHome) -> Result<Home, HomebaseError> {
        let created = self.repo.create(home).await?;
        tracing::debug!(home_id = %created.id, "home created");
        Ok(created)
    }

    /// Look up a home by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HomebaseError::NotFound`] when no home with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_home(&self, id: HomeId) -> Result<Home, HomebaseError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List all homes.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_homes(&self) -> Result<Vec<Home>, HomebaseError> {
        self.repo.get_all().await
    }

    /// Overwrite every mutable field of an existing home.
    ///
    /// # Errors
    ///
    /// Returns [`HomebaseError::NotFound`] when `home.id` does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, home), fields(home_id = %home.id))]
    pub async fn update_home(&self, home: Home) -> Result<Home, HomebaseError> {
        let id = home.id;
        self.repo.update(home).await?.ok_or_else(|| not_found(id))
    }

    /// Delete a home by id.
    ///
    /// # Errors
    ///
    /// Returns [`HomebaseError::NotFound`] when no home with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_home(&self, id: HomeId) -> Result<(), HomebaseError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homebase_domain::id::AgentId;
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryHomeRepo {
        store: Mutex<(i64, BTreeMap<HomeId, Home>)>,
    }

    impl HomeRepository for InMemoryHomeRepo {
        fn create(&self, home: NewHome) -> impl Future<Output = Result<Home, HomebaseError>> + Send {
            let mut guard = self.store.lock().unwrap();
            let (next_id, store) = &mut *guard;
            *next_id += 1;
            let home = home.with_id(HomeId::new(*next_id));
            store.insert(home.id, home.clone());
            async { Ok(home) }
        }

        fn get_by_id(
            &self,
            id: HomeId,
        ) -> impl Future<Output = Result<Option<Home>, HomebaseError>> + Send {
            let result = self.store.lock().unwrap().1.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Home>, HomebaseError>> + Send {
            let result: Vec<Home> = self.store.lock().unwrap().1.values().cloned().collect();
            async { Ok(result) }
        }

        fn update(
            &self,
            home: Home,
        ) -> impl Future<Output = Result<Option<Home>, HomebaseError>> + Send {
            let mut guard = self.store.lock().unwrap();
            let result = guard.1.get_mut(&home.id).map(|slot| {
                *slot = home.clone();
                home
            });
            async { Ok(result) }
        }

        fn delete(&self, id: HomeId) -> impl Future<Output = Result<bool, HomebaseError>> + Send {
            let removed = self.store.lock().unwrap().1.remove(&id).is_some();
            async move { Ok(removed) }
        }
    }

    fn make_service() -> HomeService<InMemoryHomeRepo> {
        HomeService::new(InMemoryHomeRepo::default())
    }

    fn lakehouse() -> NewHome {
        NewHome {
            price: 500_000,
            description: "Lakehouse".to_string(),
            address: "1 Lake Rd".to_string(),
            agent_id: AgentId::new(7),
        }
    }

    #[tokio::test]
    async fn should_return_created_home_when_fetched_by_assigned_id() {
        let svc = make_service();

        let created = svc.create_home(lakehouse()).await.unwrap();
        let fetched = svc.get_home(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.into_new(), lakehouse());
    }

    #[tokio::test]
    async fn should_return_not_found_when_home_missing() {
        let svc = make_service();
        let result = svc.get_home(HomeId::new(1)).await;
        assert!(matches!(result, Err(HomebaseError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_every_created_home() {
        let svc = make_service();
        let mut ids = Vec::new();
        for _ in 0..3 {
            ids.push(svc.create_home(lakehouse()).await.unwrap().id);
        }

        let all = svc.list_homes().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all.iter().map(|h| h.id).collect::<Vec<_>>(), ids);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_store_is_empty() {
        let svc = make_service();
        assert!(svc.list_homes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_overwrite_fields_and_keep_id_when_updating() {
        let svc = make_service();
        let created = svc.create_home(lakehouse()).await.unwrap();

        let replacement = NewHome {
            price: 650_000,
            description: "Renovated lakehouse".to_string(),
            address: "2 Lake Rd".to_string(),
            agent_id: AgentId::new(9),
        };
        let saved = svc
            .update_home(replacement.clone().with_id(created.id))
            .await
            .unwrap();

        assert_eq!(saved.id, created.id);
        assert_eq!(svc.get_home(created.id).await.unwrap().into_new(), replacement);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_home() {
        let svc = make_service();
        let result = svc.update_home(lakehouse().with_id(HomeId::new(5))).await;
        assert!(matches!(result, Err(HomebaseError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_home() {
        let svc = make_service();
        let created = svc.create_home(lakehouse()).await.unwrap();

        svc.delete_home(created.id).await.unwrap();

        let result = svc.get_home(created.id).await;
        assert!(matches!(result, Err(HomebaseError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_every_time_a_missing_home_is_deleted() {
        let svc = make_service();
        let created = svc.create_home(lakehouse()).await.unwrap();
        svc.delete_home(created.id).await.unwrap();

        for _ in 0..2 {
            let result = svc.delete_home(created.id).await;
            assert!(matches!(result, Err(HomebaseError::NotFound(_))));
        }
        let never_created = svc.delete_home(HomeId::new(404)).await;
        assert!(matches!(never_created, Err(HomebaseError::NotFound(_))));
    }
}
