//! `SQLite` implementation of [`HomeRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use homebase_app::ports::HomeRepository;
use homebase_domain::error::HomebaseError;
use homebase_domain::home::{Home, NewHome};
use homebase_domain::id::{AgentId, HomeId};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Home`].
struct Wrapper(Home);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Home> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Home {
            id: HomeId::new(row.try_get("id")?),
            price: row.try_get("price")?,
            description: row.try_get("description")?,
            address: row.try_get("address")?,
            agent_id: AgentId::new(row.try_get("agent_id")?),
        }))
    }
}

const INSERT: &str = "INSERT INTO homes (price, description, address, agent_id) VALUES (?, ?, ?, ?) \
     RETURNING id, price, description, address, agent_id";
const SELECT_BY_ID: &str = "SELECT id, price, description, address, agent_id FROM homes WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, price, description, address, agent_id FROM homes ORDER BY id";
const UPDATE: &str = "UPDATE homes SET price = ?, description = ?, address = ?, agent_id = ? \
     WHERE id = ? RETURNING id, price, description, address, agent_id";
const DELETE_BY_ID: &str = "DELETE FROM homes WHERE id = ?";

/// `SQLite`-backed home repository.
#[derive(Clone)]
pub struct SqliteHomeRepository {
    pool: SqlitePool,
}

impl SqliteHomeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl HomeRepository for SqliteHomeRepository {
    fn create(&self, home: NewHome) -> impl Future<Output = Result<Home, HomebaseError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(home.price)
                .bind(&home.description)
                .bind(&home.address)
                .bind(home.agent_id.get())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: HomeId,
    ) -> impl Future<Output = Result<Option<Home>, HomebaseError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Home>, HomebaseError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        home: Home,
    ) -> impl Future<Output = Result<Option<Home>, HomebaseError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(home.price)
                .bind(&home.description)
                .bind(&home.address)
                .bind(home.agent_id.get())
                .bind(home.id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn delete(&self, id: HomeId) -> impl Future<Output = Result<bool, HomebaseError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
