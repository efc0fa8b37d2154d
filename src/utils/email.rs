use crate::error::{AppError, AppResult};
use regex::Regex;

/// 验证邮箱格式
pub fn validate_email(email: &str) -> AppResult<()> {
    let email_regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .map_err(|e| AppError::InternalError(format!("Invalid email pattern: {e}")))?;

    if !email_regex.is_match(email) {
        return Err(AppError::ValidationError(
            "Invalid email address".to_string(),
        ));
    }

    Ok(())
}
