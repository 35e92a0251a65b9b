use std::env;
use std::time::Duration;

use anyhow::Context;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Access to the hosted platform's auth and storage APIs.
pub struct SupabaseConfig {
    pub url: String,
    pub service_role_key: String,
    /// When set, access tokens are verified locally instead of through the
    /// auth API.
    pub jwt_secret: Option<String>,
    pub timeout: Duration,
}

impl SupabaseConfig {
    /// Environment variables:
    /// - SUPABASE_URL (required)
    /// - SUPABASE_SERVICE_ROLE_KEY (required)
    /// - SUPABASE_JWT_SECRET (optional)
    /// - SUPABASE_TIMEOUT_SECS (default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = non_empty("SUPABASE_URL").context("SUPABASE_URL must be set")?;
        let service_role_key = non_empty("SUPABASE_SERVICE_ROLE_KEY")
            .context("SUPABASE_SERVICE_ROLE_KEY must be set")?;
        let timeout_secs = non_empty("SUPABASE_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            url,
            service_role_key,
            jwt_secret: non_empty("SUPABASE_JWT_SECRET"),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
