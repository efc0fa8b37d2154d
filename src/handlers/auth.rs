use crate::models::{ApiResponse, LoginRequest, RegisterRequest};
use crate::services::AuthService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

pub async fn register(
    auth_service: web::Data<AuthService>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    match auth_service.register(request.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Created().json(ApiResponse::success(
            201,
            json!({
                "result": "User registered successfully",
                "user": user
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn login(
    auth_service: web::Data<AuthService>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    match auth_service.login(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(200, response))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn auth_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login)),
    );
}
