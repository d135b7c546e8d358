use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::fallback::api_fallback;
use crate::models::families::requests::{CreateFamilyRequest, LinkStudentRequest};
use crate::models::invites::requests::InviteBatchRequest;
use crate::services::AdminService;

// 懒加载的全局 AdminService 实例
static ADMIN_SERVICE: Lazy<AdminService> = Lazy::new(AdminService::new_lazy);

pub async fn list_pending_users(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.list_pending_users(&req).await
}

pub async fn invite_batch(
    req: HttpRequest,
    body: Option<web::Json<InviteBatchRequest>>,
) -> ActixResult<HttpResponse> {
    let batch_request = body.map(web::Json::into_inner).unwrap_or_default();
    ADMIN_SERVICE.invite_batch(batch_request, &req).await
}

pub async fn create_family(
    req: HttpRequest,
    body: Option<web::Json<CreateFamilyRequest>>,
) -> ActixResult<HttpResponse> {
    let family_request = body.map(web::Json::into_inner).unwrap_or_default();
    ADMIN_SERVICE.create_family(family_request, &req).await
}

pub async fn link_student(
    req: HttpRequest,
    body: Option<web::Json<LinkStudentRequest>>,
) -> ActixResult<HttpResponse> {
    let link_request = body.map(web::Json::into_inner).unwrap_or_default();
    ADMIN_SERVICE.link_student(link_request, &req).await
}

pub async fn approve_user(
    req: HttpRequest,
    user_id: web::Path<String>,
) -> ActixResult<HttpResponse> {
    // ID 段以字符串接收，解析失败由服务层静默忽略
    ADMIN_SERVICE.approve_user(user_id.into_inner(), &req).await
}

// 配置路由（前缀内未命中的路径和方法交给 API 兜底，见 auth.rs）
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin")
            .service(
                web::resource("/pending-users")
                    .route(web::get().to(list_pending_users))
                    .default_service(web::to(api_fallback)),
            )
            .service(
                web::resource("/invite-batch")
                    .route(web::post().to(invite_batch))
                    .default_service(web::to(api_fallback)),
            )
            .service(
                web::resource("/families/students")
                    .route(web::post().to(link_student))
                    .default_service(web::to(api_fallback)),
            )
            .service(
                web::resource("/families")
                    .route(web::post().to(create_family))
                    .default_service(web::to(api_fallback)),
            )
            .service(
                web::resource("/users/{user_id}/approve")
                    .route(web::post().to(approve_user))
                    .default_service(web::to(api_fallback)),
            )
            .default_service(web::to(api_fallback)),
    );
}
