//! PostgreSQL record store.
//!
//! Documents live in the `jobs` table as JSONB, keyed by `(owner_id, record_id)`.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, query, query_scalar, types::Json};

use crate::{
    identity::models::OwnerId,
    store::{Item, RecordKey, RecordStore, StoreError},
};

const PUT_ITEM_SQL: &str = include_str!("sql/put_item.sql");
const GET_ITEM_SQL: &str = include_str!("sql/get_item.sql");
const QUERY_BY_OWNER_SQL: &str = include_str!("sql/query_by_owner.sql");
const UPDATE_ITEM_SQL: &str = include_str!("sql/update_item.sql");
const DELETE_ITEM_SQL: &str = include_str!("sql/delete_item.sql");

#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn put(&self, key: RecordKey, item: Item) -> Result<(), StoreError> {
        query::<Postgres>(PUT_ITEM_SQL)
            .bind(key.owner.as_str())
            .bind(key.record.as_str())
            .bind(Json(item))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn get(&self, key: RecordKey) -> Result<Option<Item>, StoreError> {
        let item = query_scalar::<Postgres, Json<Item>>(GET_ITEM_SQL)
            .bind(key.owner.as_str())
            .bind(key.record.as_str())
            .fetch_optional(&self.pool)
            .await?;

        Ok(item.map(|Json(item)| item))
    }

    async fn query_by_owner(&self, owner: OwnerId) -> Result<Vec<Item>, StoreError> {
        let items = query_scalar::<Postgres, Json<Item>>(QUERY_BY_OWNER_SQL)
            .bind(owner.as_str())
            .fetch_all(&self.pool)
            .await?;

        Ok(items.into_iter().map(|Json(item)| item).collect())
    }

    async fn update(&self, key: RecordKey, fields: Item) -> Result<Item, StoreError> {
        let mut document = key.attributes();

        document.extend(fields);

        let Json(item) = query_scalar::<Postgres, Json<Item>>(UPDATE_ITEM_SQL)
            .bind(key.owner.as_str())
            .bind(key.record.as_str())
            .bind(Json(document))
            .fetch_one(&self.pool)
            .await?;

        Ok(item)
    }

    async fn delete(&self, key: RecordKey) -> Result<(), StoreError> {
        query::<Postgres>(DELETE_ITEM_SQL)
            .bind(key.owner.as_str())
            .bind(key.record.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
