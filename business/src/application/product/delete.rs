use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::auth::services::IdentityVerifier;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductRecord;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use crate::domain::product::value_objects::ProductId;
use crate::domain::shared::value_objects::{Credential, UserId};
use crate::domain::storage::model::PRODUCT_IMAGES_BUCKET;
use crate::domain::storage::repository::ObjectStorage;

/// Deletes a product row owned by the caller, then removes its images from
/// storage on a best-effort basis.
pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub storage: Arc<dyn ObjectStorage>,
    pub identity: Arc<dyn IdentityVerifier>,
    pub logger: Arc<dyn Logger>,
}

impl DeleteProductUseCaseImpl {
    async fn authenticate(&self, credential: Option<&Credential>) -> Result<UserId, ProductError> {
        let credential = credential.ok_or(ProductError::Unauthenticated)?;
        self.identity.resolve(credential).await.map_err(|e| {
            self.logger
                .warn(&format!("Product deletion rejected, caller not authenticated: {}", e));
            ProductError::Unauthenticated
        })
    }

    /// Runs after the row is gone. Failures are logged and never reach the
    /// caller; the row is not restored.
    async fn remove_images(&self, product: &ProductRecord) {
        let (paths, unmapped) = product.image_storage_paths();

        for url in unmapped {
            self.logger.warn(&format!(
                "Image location of product {} is outside bucket {}, skipping: {}",
                product.id, PRODUCT_IMAGES_BUCKET, url
            ));
        }

        if paths.is_empty() {
            return;
        }

        match self.storage.remove(PRODUCT_IMAGES_BUCKET, &paths).await {
            Ok(removed) => self.logger.info(&format!(
                "Removed {} of {} images for product {}",
                removed.len(),
                paths.len(),
                product.id
            )),
            Err(e) => self.logger.error(&format!(
                "Storage deletion failed for product {}: {}",
                product.id, e
            )),
        }
    }
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        let id = params
            .product_id
            .as_deref()
            .and_then(ProductId::parse)
            .ok_or(ProductError::MissingId)?;

        let user_id = self.authenticate(params.credential.as_ref()).await?;

        self.logger
            .info(&format!("User {} deleting product: {}", user_id, id));

        let product = self.repository.get_by_id(&id).await.map_err(|e| match e {
            RepositoryError::NotFound => ProductError::NotFound,
            other => {
                self.logger
                    .error(&format!("Failed to load product {}: {}", id, other));
                ProductError::Repository(other)
            }
        })?;

        if !product.is_owned_by(&user_id) {
            self.logger.warn(&format!(
                "User {} is not the owner of product {}",
                user_id, id
            ));
            return Err(ProductError::PermissionDenied);
        }

        self.repository.delete(&id).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to delete product {}: {}", id, e));
            ProductError::Repository(e)
        })?;

        self.logger.info(&format!("Product deleted: {}", id));

        self.remove_images(&product).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::errors::AuthError;
    use crate::domain::storage::errors::StorageError;
    use crate::domain::storage::model::{StoragePath, StoredObject};
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_by_id(&self, id: &ProductId) -> Result<ProductRecord, RepositoryError>;
            async fn delete(&self, id: &ProductId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Storage {}

        #[async_trait]
        impl ObjectStorage for Storage {
            async fn remove(
                &self,
                bucket: &str,
                paths: &[StoragePath],
            ) -> Result<Vec<StoredObject>, StorageError>;
        }
    }

    mock! {
        pub Identity {}

        #[async_trait]
        impl IdentityVerifier for Identity {
            async fn resolve(&self, credential: &Credential) -> Result<UserId, AuthError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    const IMAGE_URL: &str =
        "https://x.supabase.co/storage/v1/object/public/product-images/u1/a.png";

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn identity_of(user: &'static str) -> MockIdentity {
        let mut identity = MockIdentity::new();
        identity
            .expect_resolve()
            .returning(move |_| Ok(UserId::new(user)));
        identity
    }

    fn product_owned_by(owner: &'static str, images: Vec<&'static str>) -> ProductRecord {
        ProductRecord::from_repository(
            ProductId::parse("p1").unwrap(),
            UserId::new(owner),
            images.into_iter().map(String::from).collect(),
        )
    }

    fn params() -> DeleteProductParams {
        DeleteProductParams {
            product_id: Some("p1".to_string()),
            credential: Credential::new("token-u1"),
        }
    }

    fn use_case(
        repo: MockProductRepo,
        storage: MockStorage,
        identity: MockIdentity,
    ) -> DeleteProductUseCaseImpl {
        DeleteProductUseCaseImpl {
            repository: Arc::new(repo),
            storage: Arc::new(storage),
            identity: Arc::new(identity),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_delete_product_and_its_images_when_caller_is_owner() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .withf(|id| id.as_str() == "p1")
            .times(1)
            .returning(|_| Ok(product_owned_by("u1", vec![IMAGE_URL])));
        repo.expect_delete()
            .withf(|id| id.as_str() == "p1")
            .times(1)
            .returning(|_| Ok(()));

        let mut storage = MockStorage::new();
        storage
            .expect_remove()
            .withf(|bucket, paths| {
                bucket == "product-images" && paths.to_vec() == vec![StoragePath::new("u1/a.png")]
            })
            .times(1)
            .returning(|_, _| Ok(vec![StoredObject::named("u1/a.png")]));

        let result = use_case(repo, storage, identity_of("u1"))
            .execute(params())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_missing_product_id_before_authenticating() {
        for product_id in [None, Some(String::new()), Some("   ".to_string())] {
            let mut identity = MockIdentity::new();
            identity.expect_resolve().never();

            let result = use_case(MockProductRepo::new(), MockStorage::new(), identity)
                .execute(DeleteProductParams {
                    product_id,
                    credential: None,
                })
                .await;

            assert!(matches!(result.unwrap_err(), ProductError::MissingId));
        }
    }

    #[tokio::test]
    async fn should_reject_request_without_credential() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().never();
        repo.expect_delete().never();

        let result = use_case(repo, MockStorage::new(), MockIdentity::new())
            .execute(DeleteProductParams {
                product_id: Some("p1".to_string()),
                credential: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Unauthenticated));
    }

    #[tokio::test]
    async fn should_reject_request_when_identity_cannot_be_resolved() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().never();
        repo.expect_delete().never();
        let mut identity = MockIdentity::new();
        identity
            .expect_resolve()
            .returning(|_| Err(AuthError::InvalidCredential("expired".to_string())));

        let result = use_case(repo, MockStorage::new(), identity)
            .execute(params())
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Unauthenticated));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_does_not_exist() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        repo.expect_delete().never();

        let result = use_case(repo, MockStorage::new(), identity_of("u1"))
            .execute(params())
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_surface_lookup_failure_as_repository_error() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::database("connection reset")));
        repo.expect_delete().never();

        let result = use_case(repo, MockStorage::new(), identity_of("u1"))
            .execute(params())
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, ProductError::Repository(_)));
        assert_eq!(err.to_string(), "connection reset");
    }

    #[tokio::test]
    async fn should_deny_and_not_delete_when_caller_is_not_owner() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Ok(product_owned_by("u1", vec![IMAGE_URL])));
        repo.expect_delete().never();
        let mut storage = MockStorage::new();
        storage.expect_remove().never();

        let result = use_case(repo, storage, identity_of("u2"))
            .execute(params())
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::PermissionDenied));
    }

    #[tokio::test]
    async fn should_skip_storage_when_product_has_no_images() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Ok(product_owned_by("u1", vec![])));
        repo.expect_delete().times(1).returning(|_| Ok(()));
        let mut storage = MockStorage::new();
        storage.expect_remove().never();

        let result = use_case(repo, storage, identity_of("u1"))
            .execute(params())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_skip_storage_when_no_image_maps_into_the_bucket() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Ok(product_owned_by("u1", vec!["https://elsewhere.example/a.png"])));
        repo.expect_delete().times(1).returning(|_| Ok(()));
        let mut storage = MockStorage::new();
        storage.expect_remove().never();

        let result = use_case(repo, storage, identity_of("u1"))
            .execute(params())
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_not_touch_storage_when_record_delete_fails() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Ok(product_owned_by("u1", vec![IMAGE_URL])));
        repo.expect_delete()
            .returning(|_| Err(RepositoryError::database("permission denied for table products")));
        let mut storage = MockStorage::new();
        storage.expect_remove().never();

        let result = use_case(repo, storage, identity_of("u1"))
            .execute(params())
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }

    #[tokio::test]
    async fn should_succeed_and_log_when_storage_cleanup_fails() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Ok(product_owned_by("u1", vec![IMAGE_URL])));
        repo.expect_delete().times(1).returning(|_| Ok(()));
        let mut storage = MockStorage::new();
        storage.expect_remove().times(1).returning(|_, _| {
            Err(StorageError::Transport("connection refused".to_string()))
        });

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        logger
            .expect_error()
            .withf(|message| message == "Storage deletion failed for product p1: connection refused")
            .times(1)
            .returning(|_| ());

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(repo),
            storage: Arc::new(storage),
            identity: Arc::new(identity_of("u1")),
            logger: Arc::new(logger),
        };

        let result = use_case.execute(params()).await;

        assert!(result.is_ok());
    }
}
