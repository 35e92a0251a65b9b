use sqlx::FromRow;

use business::domain::product::model::ProductRecord;
use business::domain::product::value_objects::ProductId;
use business::domain::shared::value_objects::UserId;

/// Columns of `products` read before a delete.
#[derive(Debug, FromRow)]
pub struct ProductOwnershipEntity {
    pub seller_id: Option<String>,
    pub image_urls: Option<Vec<String>>,
}

impl ProductOwnershipEntity {
    /// A row without seller keeps an empty owner, which no caller matches.
    pub fn into_domain(self, id: ProductId) -> ProductRecord {
        ProductRecord::from_repository(
            id,
            UserId::new(self.seller_id.unwrap_or_default()),
            self.image_urls.unwrap_or_default(),
        )
    }
}
