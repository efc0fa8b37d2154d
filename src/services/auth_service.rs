use crate::entities::{role_entity as roles, user_entity as users};
use crate::error::{AppError, AppResult};
use crate::models::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::repositories::{MembershipRepository, UserRepository};
use crate::services::tier_policy;
use crate::utils::{JwtService, hash_password, validate_email, verify_password};
use chrono::Utc;
use sea_orm::{DatabaseConnection, Set, TransactionTrait};

/// 新用户在没有等级表时使用的等级
const FALLBACK_MEMBERSHIP: &str = "Bronze";

/// 去掉首尾空白后的必填字段
struct NewUser {
    firstname: String,
    lastname: String,
    username: String,
    email: String,
    password: String,
    address: String,
    telephonenumber: String,
}

impl TryFrom<RegisterRequest> for NewUser {
    type Error = AppError;

    fn try_from(req: RegisterRequest) -> Result<Self, Self::Error> {
        fn required(value: Option<String>) -> AppResult<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::ValidationError("All fields are required".into()))
        }

        Ok(Self {
            firstname: required(req.firstname)?,
            lastname: required(req.lastname)?,
            username: required(req.username)?,
            email: required(req.email)?,
            // 密码不做 trim
            password: req
                .password
                .filter(|p| !p.is_empty())
                .ok_or_else(|| AppError::ValidationError("All fields are required".into()))?,
            address: required(req.address)?,
            telephonenumber: required(req.telephonenumber)?,
        })
    }
}

#[derive(Clone)]
pub struct AuthService {
    pool: DatabaseConnection,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(pool: DatabaseConnection, jwt_service: JwtService) -> Self {
        Self { pool, jwt_service }
    }

    /// 注册：角色为 User，等级为 0 件对应的等级
    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserResponse> {
        let new_user = NewUser::try_from(request)?;
        validate_email(&new_user.email)?;

        let txn = self.pool.begin().await?;

        if UserRepository::username_or_email_taken(&txn, &new_user.username, &new_user.email)
            .await?
        {
            return Err(AppError::ValidationError(
                "Username or email already taken".into(),
            ));
        }

        let role = UserRepository::find_role_by_name(&txn, roles::USER)
            .await?
            .ok_or_else(|| AppError::InternalError("Default role is missing".into()))?;

        let tiers = MembershipRepository::all(&txn).await?;
        let membership_status = tier_policy::tier_for(0, &tiers)
            .map(|t| t.status.clone())
            .unwrap_or_else(|| FALLBACK_MEMBERSHIP.to_string());

        let password_hash = hash_password(&new_user.password)?;
        let now = Utc::now();
        let user = UserRepository::insert(
            &txn,
            users::ActiveModel {
                firstname: Set(new_user.firstname),
                lastname: Set(new_user.lastname),
                username: Set(new_user.username),
                email: Set(new_user.email),
                password_hash: Set(password_hash),
                address: Set(new_user.address),
                telephonenumber: Set(new_user.telephonenumber),
                membership_status: Set(membership_status),
                role_id: Set(role.id),
                created_at: Set(Some(now)),
                updated_at: Set(Some(now)),
                ..Default::default()
            },
        )
        .await?;

        txn.commit().await?;
        log::info!("User registered: id={} username={}", user.id, user.username);
        Ok(user.into())
    }

    /// 用户名或邮箱登录
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let invalid = || AppError::AuthError("Invalid credentials".into());

        let user = UserRepository::find_by_identifier(&self.pool, request.identifier.trim())
            .await?
            .ok_or_else(invalid)?;
        if !verify_password(&request.password, &user.password_hash)? {
            return Err(invalid());
        }

        let role = UserRepository::find_role(&self.pool, user.role_id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("Role {} is missing", user.role_id)))?;

        let token = self
            .jwt_service
            .generate_access_token(user.id, &user.username, &role.name)?;

        Ok(LoginResponse {
            result: "Login successful".into(),
            id: user.id,
            email: user.email,
            name: format!("{} {}", user.firstname, user.lastname),
            token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> RegisterRequest {
        RegisterRequest {
            firstname: Some("Ada".into()),
            lastname: Some("Lovelace".into()),
            username: Some(" ada ".into()),
            email: Some("ada@example.com".into()),
            password: Some("secret1".into()),
            address: Some("1 Main St".into()),
            telephonenumber: Some("5551234".into()),
        }
    }

    #[test]
    fn test_new_user_trims_fields() {
        let user = NewUser::try_from(full_request()).unwrap();
        assert_eq!(user.username, "ada");
    }

    #[test]
    fn test_new_user_requires_every_field() {
        let req = RegisterRequest {
            address: Some("   ".into()),
            ..full_request()
        };
        match NewUser::try_from(req) {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "All fields are required"),
            _ => panic!("expected validation error"),
        }
        assert!(NewUser::try_from(RegisterRequest::default()).is_err());
    }
}
