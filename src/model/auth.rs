use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Returned from register and login. The session cookie is set alongside this
/// response; the bearer token covers clients that don't keep cookies.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AuthResponseDto {
    pub user: UserDto,
    pub token: String,
}
