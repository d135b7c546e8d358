use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::fallback::api_fallback;
use crate::models::auth::{
    CompleteSignupRequest, LoginRequest, SignupRequest, ValidateInviteRequest,
};
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

// 请求体缺失或不是合法 JSON 时视为空对象（沿用原接口的宽松约定），
// 所以这里都用 Option<web::Json<..>> 而不是让提取器直接报 400。

pub async fn login(
    req: HttpRequest,
    body: Option<web::Json<LoginRequest>>,
) -> ActixResult<HttpResponse> {
    let login_request = body.map(web::Json::into_inner).unwrap_or_default();
    AUTH_SERVICE.login(login_request, &req).await
}

pub async fn signup(
    req: HttpRequest,
    body: Option<web::Json<SignupRequest>>,
) -> ActixResult<HttpResponse> {
    let signup_request = body.map(web::Json::into_inner).unwrap_or_default();
    AUTH_SERVICE.signup(signup_request, &req).await
}

pub async fn validate_invite(
    req: HttpRequest,
    body: Option<web::Json<ValidateInviteRequest>>,
) -> ActixResult<HttpResponse> {
    let validate_request = body.map(web::Json::into_inner).unwrap_or_default();
    AUTH_SERVICE.validate_invite(validate_request, &req).await
}

pub async fn complete_signup(
    req: HttpRequest,
    body: Option<web::Json<CompleteSignupRequest>>,
) -> ActixResult<HttpResponse> {
    let complete_request = body.map(web::Json::into_inner).unwrap_or_default();
    AUTH_SERVICE.complete_signup(complete_request, &req).await
}

// 配置路由。
// 前缀内未命中的路径和方法都交给 API 兜底（无 404/405 约定）。
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(
                web::resource("/login")
                    .route(web::post().to(login))
                    .default_service(web::to(api_fallback)),
            )
            .service(
                web::resource("/signup")
                    .route(web::post().to(signup))
                    .default_service(web::to(api_fallback)),
            )
            .service(
                web::resource("/validate-invite")
                    .route(web::post().to(validate_invite))
                    .default_service(web::to(api_fallback)),
            )
            .service(
                web::resource("/complete-signup")
                    .route(web::post().to(complete_signup))
                    .default_service(web::to(api_fallback)),
            )
            .default_service(web::to(api_fallback)),
    );
}
