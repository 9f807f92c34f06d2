use crate::enums::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Role,
}

/// DTO учётной записи модератора (управление доступно администратору)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ModeratorDto {
    pub id: Option<String>,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    /// Пароль передаётся только при создании/смене
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
