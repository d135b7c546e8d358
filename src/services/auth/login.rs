use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ErrorResponse;
use crate::models::auth::{LoginRequest, LoginResponse};

use super::AuthService;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let email = login_request.email.unwrap_or_default();
    let password = login_request.password.unwrap_or_default();

    // 1. 通过邮箱获取用户
    match storage.get_user_by_email(&email).await {
        Ok(Some(user)) => {
            // 2. 明文比较密码（测试服务器，不做哈希）
            if user.password == password {
                tracing::info!("User {} logged in successfully", user.email);
                Ok(HttpResponse::Ok().json(LoginResponse::new(user)))
            } else {
                Ok(HttpResponse::Unauthorized().json(ErrorResponse::new("Invalid credentials")))
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ErrorResponse::new("Invalid credentials"))),
        Err(e) => {
            tracing::error!("Login lookup failed: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Login failed: {e}"))))
        }
    }
}
