use crate::error::AppError;
use crate::models::AuthUser;
use crate::utils::{Claims, JwtService};
use actix_web::http::Method;
use actix_web::{
    Error, FromRequest, HttpMessage, HttpRequest,
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use futures_util::future::LocalBoxFuture;
use std::future::{Ready, ready};

// 公开路径配置
struct PublicPaths {
    // 任意方法都公开的前缀
    prefix_paths: Vec<&'static str>,
    // 仅 GET 公开的路径（完全匹配或其子路径）
    read_only_paths: Vec<&'static str>,
}

impl PublicPaths {
    fn new() -> Self {
        Self {
            prefix_paths: vec!["/auth/"],
            read_only_paths: vec!["/membership"],
        }
    }

    fn is_public(&self, method: &Method, path: &str) -> bool {
        if self
            .prefix_paths
            .iter()
            .any(|&prefix| path.starts_with(prefix))
        {
            return true;
        }

        *method == Method::GET
            && self.read_only_paths.iter().any(|&base| {
                path == base
                    || path
                        .strip_prefix(base)
                        .is_some_and(|rest| rest.starts_with('/'))
            })
    }
}

fn bearer_token(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

impl TryFrom<Claims> for AuthUser {
    type Error = AppError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let user_id = claims
            .sub
            .parse::<i32>()
            .map_err(|_| AppError::AuthError("Invalid access token".to_string()))?;
        Ok(AuthUser {
            user_id,
            username: claims.username,
            role: claims.role,
        })
    }
}

pub struct AuthMiddleware {
    jwt_service: JwtService,
}

impl AuthMiddleware {
    pub fn new(jwt_service: JwtService) -> Self {
        Self { jwt_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            jwt_service: self.jwt_service.clone(),
            public_paths: PublicPaths::new(),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    jwt_service: JwtService,
    public_paths: PublicPaths,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // 放行所有 CORS 预检请求
        if req.method() == Method::OPTIONS
            || self.public_paths.is_public(req.method(), req.path())
        {
            return Box::pin(self.service.call(req));
        }

        let Some(token) = bearer_token(&req) else {
            let error = AppError::AuthError("Missing access token".to_string());
            return Box::pin(async move { Err(error.into()) });
        };

        // 中间件只负责验证令牌，权限由 service 根据 AuthUser 判断
        match self
            .jwt_service
            .verify_access_token(token)
            .and_then(AuthUser::try_from)
        {
            Ok(user) => {
                req.extensions_mut().insert(user);
                Box::pin(self.service.call(req))
            }
            Err(_) => {
                let error = AppError::AuthError("Invalid access token".to_string());
                Box::pin(async move { Err(error.into()) })
            }
        }
    }
}

/// handler 通过参数显式提取当前用户
impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthUser>()
                .cloned()
                .ok_or_else(|| AppError::AuthError("Missing access token".to_string())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths() {
        let paths = PublicPaths::new();
        assert!(paths.is_public(&Method::POST, "/auth/login"));
        assert!(paths.is_public(&Method::GET, "/membership"));
        assert!(paths.is_public(&Method::GET, "/membership/2"));
        assert!(!paths.is_public(&Method::PUT, "/membership/update/2"));
        assert!(!paths.is_public(&Method::GET, "/memberships"));
        assert!(!paths.is_public(&Method::GET, "/cart"));
        assert!(!paths.is_public(&Method::POST, "/cart/checkout/now"));
    }

    #[test]
    fn test_claims_to_auth_user() {
        let claims = Claims {
            sub: "7".into(),
            username: "ada".into(),
            role: "Admin".into(),
            exp: 0,
            iat: 0,
            token_type: "access".into(),
        };
        let user = AuthUser::try_from(claims).unwrap();
        assert_eq!(user.user_id, 7);
        assert!(user.is_admin());
    }
}
