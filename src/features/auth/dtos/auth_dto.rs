use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response DTO carrying a freshly issued session token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponseDto {
    pub access_token: String,
}
