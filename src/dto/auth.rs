use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Claims {
    /// User id, as a string per JWT convention.
    pub sub: String,
    pub exp: usize,
}
