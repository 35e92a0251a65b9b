use std::time::Duration;

use reqwest::Client;

/// Shared HTTP client for the hosted platform, authenticated with the
/// service role key.
#[derive(Clone)]
pub struct SupabaseClient {
    pub client: Client,
    pub base_url: String,
    pub service_key: String,
}

impl SupabaseClient {
    /// Fails when the TLS backend cannot be initialised.
    pub fn new(
        base_url: impl Into<String>,
        service_key: impl Into<String>,
        timeout: Duration,
    ) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_key: service_key.into(),
        })
    }

    /// Builds the authorization header value for service-level calls.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.service_key)
    }

    /// Returns the endpoint resolving an access token to its user.
    pub fn user_url(&self) -> String {
        format!("{}/auth/v1/user", self.base_url)
    }

    /// Returns the endpoint for bulk operations on a bucket's objects.
    pub fn bucket_objects_url(&self, bucket: &str) -> String {
        format!("{}/storage/v1/object/{}", self.base_url, bucket)
    }
}
