//! SurrealDB implementation of [`ShopRepository`].

use chrono::{DateTime, Utc};
use sello_core::error::SelloResult;
use sello_core::models::shop::{CreateShop, Shop, UpdateShop};
use sello_core::repository::{PaginatedResult, Pagination, ShopRepository};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;

use crate::error::DbError;

/// DB-side row struct. The tenant code is stored as a regular field in
/// addition to being the record key, so one shape covers every query.
#[derive(Debug, SurrealValue)]
struct ShopRow {
    code: String,
    name: String,
    config: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ShopRow {
    fn into_shop(self) -> Shop {
        Shop {
            code: self.code,
            name: self.name,
            config: self.config,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Row struct for count queries.
#[derive(Debug, SurrealValue)]
struct CountRow {
    total: u64,
}

/// SurrealDB implementation of the Shop repository.
///
/// Shop records are keyed directly by tenant code, so lookups are record
/// fetches rather than index scans.
pub struct SurrealShopRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> Clone for SurrealShopRepository<C> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}

impl<C: Connection> SurrealShopRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> ShopRepository for SurrealShopRepository<C> {
    async fn create(&self, input: CreateShop) -> SelloResult<Shop> {
        let code = input.code.clone();
        let config = input
            .config
            .unwrap_or(serde_json::Value::Object(Default::default()));

        let result = self
            .db
            .query(
                "CREATE type::record('shop', $code) SET \
                 code = $code, name = $name, config = $config",
            )
            .bind(("code", code.clone()))
            .bind(("name", input.name))
            .bind(("config", config))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::from_write("shop", &code, e))?;

        let rows: Vec<ShopRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "shop".into(),
            id: code,
        })?;

        Ok(row.into_shop())
    }

    async fn get_by_code(&self, code: &str) -> SelloResult<Shop> {
        let code_owned = code.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('shop', $code)")
            .bind(("code", code_owned.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ShopRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "shop".into(),
            id: code_owned,
        })?;

        Ok(row.into_shop())
    }

    async fn update(&self, code: &str, input: UpdateShop) -> SelloResult<Shop> {
        let code_owned = code.to_string();

        let mut sets = Vec::new();
        if input.name.is_some() {
            sets.push("name = $name");
        }
        if input.config.is_some() {
            sets.push("config = $config");
        }
        sets.push("updated_at = time::now()");

        let query = format!(
            "UPDATE type::record('shop', $code) SET {}",
            sets.join(", ")
        );

        let mut builder = self.db.query(&query).bind(("code", code_owned.clone()));

        if let Some(name) = input.name {
            builder = builder.bind(("name", name));
        }
        if let Some(config) = input.config {
            builder = builder.bind(("config", config));
        }

        let result = builder.await.map_err(DbError::from)?;
        let mut result = result.check().map_err(DbError::from)?;

        let rows: Vec<ShopRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "shop".into(),
            id: code_owned,
        })?;

        Ok(row.into_shop())
    }

    async fn delete(&self, code: &str) -> SelloResult<()> {
        self.db
            .query("DELETE type::record('shop', $code)")
            .bind(("code", code.to_string()))
            .await
            .map_err(DbError::from)?;

        Ok(())
    }

    async fn list(&self, pagination: Pagination) -> SelloResult<PaginatedResult<Shop>> {
        let mut count_result = self
            .db
            .query("SELECT count() AS total FROM shop GROUP ALL")
            .await
            .map_err(DbError::from)?;
        let count_rows: Vec<CountRow> = count_result.take(0).map_err(DbError::from)?;
        let total = count_rows.first().map(|r| r.total).unwrap_or(0);

        let mut result = self
            .db
            .query(
                "SELECT * FROM shop \
                 ORDER BY created_at ASC \
                 LIMIT $limit START $offset",
            )
            .bind(("limit", pagination.limit))
            .bind(("offset", pagination.offset))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ShopRow> = result.take(0).map_err(DbError::from)?;

        let items = rows.into_iter().map(ShopRow::into_shop).collect();

        Ok(PaginatedResult {
            items,
            total,
            offset: pagination.offset,
            limit: pagination.limit,
        })
    }
}
