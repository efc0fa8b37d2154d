use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ApiResponse;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Auth error: {0}")]
    AuthError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl AppError {
    /// 返回给调用方的消息；服务端错误不暴露内部细节
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::AuthError(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg) => msg.clone(),
            AppError::Forbidden => "You do not have permission to perform this action".to_string(),
            AppError::JwtError(_) => "Failed to authenticate token".to_string(),
            AppError::DatabaseError(_) => "Database error".to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthError(_) | AppError::JwtError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        match self {
            AppError::ValidationError(msg) => log::warn!("Validation error: {msg}"),
            AppError::AuthError(msg) => log::warn!("Authentication error: {msg}"),
            AppError::JwtError(err) => log::warn!("JWT error: {err}"),
            AppError::Conflict(msg) => log::warn!("Conflict: {msg}"),
            AppError::Forbidden => log::warn!("Forbidden access"),
            AppError::NotFound(_) => {}
            AppError::DatabaseError(err) => log::error!("Database error: {err}"),
            _ => log::error!("Internal error: {self}"),
        }

        HttpResponse::build(status_code).json(ApiResponse::error(
            status_code.as_u16(),
            self.public_message(),
        ))
    }
}
