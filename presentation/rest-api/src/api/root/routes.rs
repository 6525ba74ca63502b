use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Liveness response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct RootResponse {
    /// Always "ok" while the service is up
    pub status: String,
    /// Human readable description
    pub message: String,
}

pub struct RootApi;

impl RootApi {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl RootApi {
    /// Service status
    ///
    /// Public liveness probe used by the frontend and by health checks.
    #[oai(path = "/", method = "get", tag = "ApiTags::Root")]
    async fn root(&self) -> Json<RootResponse> {
        Json(RootResponse {
            status: "ok".to_string(),
            message: "AI Product Recommender backend running".to_string(),
        })
    }
}
