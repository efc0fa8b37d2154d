use crate::models::{ApiResponse, AuthUser, MembershipResponse, MembershipUpdateResponse};
use crate::services::MembershipService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

pub async fn list_memberships(
    membership_service: web::Data<MembershipService>,
) -> Result<HttpResponse> {
    match membership_service.list_tiers().await {
        Ok(tiers) => {
            let memberships: Vec<MembershipResponse> = tiers.into_iter().map(Into::into).collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                200,
                json!({
                    "result": "Memberships retrieved",
                    "memberships": memberships
                }),
            )))
        }
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn get_membership(
    membership_service: web::Data<MembershipService>,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match membership_service.get_tier(path.into_inner()).await {
        Ok(tier) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            200,
            json!({
                "result": "Membership retrieved",
                "membership": MembershipResponse::from(tier)
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 按已完成订单重算指定用户的等级
pub async fn update_membership(
    membership_service: web::Data<MembershipService>,
    user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match membership_service
        .recompute_for_user(&user, path.into_inner())
        .await
    {
        Ok(membership_status) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            200,
            MembershipUpdateResponse {
                result: "Membership status updated".into(),
                membership_status,
            },
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn membership_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/membership")
            .route("", web::get().to(list_memberships))
            .route("/update/{user_id}", web::put().to(update_membership))
            .route("/{id}", web::get().to(get_membership)),
    );
}
