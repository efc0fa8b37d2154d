use crate::entities::{role_entity, user_entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 已认证的调用方。由鉴权中间件写入请求扩展，
/// handler 显式提取后传入 service。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
    pub username: String,
    pub role: String,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == role_entity::ADMIN
    }

    pub fn require_admin(&self) -> crate::AppResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(crate::AppError::Forbidden)
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct RegisterRequest {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub address: Option<String>,
    pub telephonenumber: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// 用户名或邮箱
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub address: String,
    pub telephonenumber: String,
    pub membership_status: String,
    pub role_id: i32,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub result: String,
    pub id: i32,
    pub email: String,
    pub name: String,
    pub token: String,
    pub expires_in: i64,
}

impl From<user_entity::Model> for UserResponse {
    fn from(user: user_entity::Model) -> Self {
        Self {
            id: user.id,
            firstname: user.firstname,
            lastname: user.lastname,
            username: user.username,
            email: user.email,
            address: user.address,
            telephonenumber: user.telephonenumber,
            membership_status: user.membership_status,
            role_id: user.role_id,
            created_at: user.created_at,
        }
    }
}
