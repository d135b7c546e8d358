//! API 兜底路由
//!
//! 原接口的派发器没有 404 分支：未匹配的 /api GET 返回空对象，
//! 任意未匹配的 POST 返回默认成功信封。这里原样保留。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::Method, web};

use crate::models::SuccessResponse;

/// 未匹配的 /api 路径
pub async fn api_fallback(req: HttpRequest) -> ActixResult<HttpResponse> {
    if req.method() == Method::POST {
        Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
    } else {
        Ok(HttpResponse::Ok().json(serde_json::json!({})))
    }
}

/// 未匹配的非 API POST 路径
/// （由 frontend.rs 的根通配资源挂到 POST 方法上）
pub async fn post_fallback() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}

// 配置 API 兜底路由（必须在各业务路由之后、静态资源路由之前注册）
pub fn configure_fallback_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/{tail:.*}", web::to(api_fallback));
}
