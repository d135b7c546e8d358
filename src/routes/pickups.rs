use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::fallback::api_fallback;
use crate::models::pickups::requests::{CreatePickupCodeRequest, CreatePickupRequest};
use crate::services::PickupService;

// 懒加载的全局 PickupService 实例
static PICKUP_SERVICE: Lazy<PickupService> = Lazy::new(PickupService::new_lazy);

pub async fn list_pending_pickups(req: HttpRequest) -> ActixResult<HttpResponse> {
    PICKUP_SERVICE.list_pending_pickups(&req).await
}

pub async fn create_pickup(
    req: HttpRequest,
    body: Option<web::Json<CreatePickupRequest>>,
) -> ActixResult<HttpResponse> {
    let pickup_request = body.map(web::Json::into_inner).unwrap_or_default();
    PICKUP_SERVICE.create_pickup(pickup_request, &req).await
}

pub async fn create_pickup_code(
    req: HttpRequest,
    body: Option<web::Json<CreatePickupCodeRequest>>,
) -> ActixResult<HttpResponse> {
    let code_request = body.map(web::Json::into_inner).unwrap_or_default();
    PICKUP_SERVICE.create_pickup_code(code_request, &req).await
}

pub async fn get_pickup_code(
    req: HttpRequest,
    code: web::Path<String>,
) -> ActixResult<HttpResponse> {
    PICKUP_SERVICE.get_pickup_code(code.into_inner(), &req).await
}

// 配置路由（方法不匹配时落入 API 兜底，见 students.rs）
pub fn configure_pickup_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/pickups/pending")
            .route(web::get().to(list_pending_pickups))
            .default_service(web::to(api_fallback)),
    );
    cfg.service(
        web::resource("/api/pickups")
            .route(web::post().to(create_pickup))
            .default_service(web::to(api_fallback)),
    );
    cfg.service(
        web::resource("/api/pickup-code/{code}")
            .route(web::get().to(get_pickup_code))
            .default_service(web::to(api_fallback)),
    );
    cfg.service(
        web::resource("/api/pickup-code")
            .route(web::post().to(create_pickup_code))
            .default_service(web::to(api_fallback)),
    );
}
