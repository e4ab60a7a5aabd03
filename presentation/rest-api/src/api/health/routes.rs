use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Object)]
pub struct HealthCheckResponse {
    /// "healthy" while the process serves requests
    pub status: String,
    /// Current server timestamp (RFC 3339)
    pub timestamp: String,
    pub version: String,
    /// Number of matches in the loaded catalog
    pub catalog_size: u64,
}

pub struct HealthApi {
    catalog_size: usize,
}

impl HealthApi {
    pub fn new(catalog_size: usize) -> Self {
        Self { catalog_size }
    }
}

#[OpenApi]
impl HealthApi {
    /// Health check
    ///
    /// Liveness check. Public, no side effects.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            catalog_size: self.catalog_size as u64,
        })
    }
}
