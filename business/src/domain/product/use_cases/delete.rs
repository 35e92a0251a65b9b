use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::shared::value_objects::Credential;

pub struct DeleteProductParams {
    /// Raw identifier from the request; `None` or blank is rejected.
    pub product_id: Option<String>,
    pub credential: Option<Credential>,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}
