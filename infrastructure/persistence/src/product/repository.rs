use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::ProductRecord;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductId;

use super::entity::ProductOwnershipEntity;

// Ids are compared as text so integer and uuid primary keys both work.
const SELECT_OWNERSHIP: &str =
    "SELECT seller_id::text AS seller_id, image_urls FROM products WHERE id::text = $1";
const DELETE_BY_ID: &str = "DELETE FROM products WHERE id::text = $1";

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_by_id(&self, id: &ProductId) -> Result<ProductRecord, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductOwnershipEntity>(SELECT_OWNERSHIP)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::database(e.to_string()))?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain(id.clone()))
    }

    async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::database(e.to_string()))?;

        tracing::debug!(
            product_id = %id,
            rows = result.rows_affected(),
            "Product row delete executed"
        );

        Ok(())
    }
}
