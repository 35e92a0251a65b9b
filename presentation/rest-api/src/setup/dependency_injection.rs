use std::sync::Arc;

use anyhow::Context;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use supabase::client::SupabaseClient;
use supabase::identity_verifier::SupabaseIdentityVerifier;
use supabase::jwt_verifier::JwtIdentityVerifier;
use supabase::object_storage::SupabaseObjectStorage;

use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::storage::delete_files::DeleteStorageFilesUseCaseImpl;
use business::domain::auth::services::IdentityVerifier;

use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::storage::routes::StorageApi;
use crate::config::supabase_config::SupabaseConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub storage_api: StorageApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, supabase: &SupabaseConfig) -> anyhow::Result<Self> {
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let client = SupabaseClient::new(
            supabase.url.clone(),
            supabase.service_role_key.clone(),
            supabase.timeout,
        )
        .context("Failed to build the platform HTTP client")?;

        let identity: Arc<dyn IdentityVerifier> = match &supabase.jwt_secret {
            Some(secret) => {
                tracing::info!("Verifying access tokens locally with the JWT secret");
                Arc::new(JwtIdentityVerifier::new(secret))
            }
            None => {
                tracing::info!("Verifying access tokens through the auth API");
                Arc::new(SupabaseIdentityVerifier::new(client.clone()))
            }
        };
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));
        let object_storage = Arc::new(SupabaseObjectStorage::new(client));

        // Use cases
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            storage: object_storage.clone(),
            identity: identity.clone(),
            logger: Arc::new(TracingLogger::new("delete-product")),
        });
        let delete_files_use_case = Arc::new(DeleteStorageFilesUseCaseImpl {
            storage: object_storage,
            identity,
            logger: Arc::new(TracingLogger::new("delete-storage-file")),
        });

        Ok(Self {
            health_api,
            product_api: ProductApi::new(delete_product_use_case),
            storage_api: StorageApi::new(delete_files_use_case),
        })
    }
}
