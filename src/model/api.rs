use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by JSON endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
    /// Diagnostic detail, only present in development builds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
