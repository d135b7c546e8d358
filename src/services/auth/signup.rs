use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::SignupRequest;
use crate::models::users::{entities::UserRole, requests::CreateUserRequest};
use crate::models::{ErrorResponse, MessageResponse};

use super::AuthService;

pub async fn handle_signup(
    service: &AuthService,
    signup_request: SignupRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let family_code = signup_request.family_code.unwrap_or_default();

    // 1. 通过家庭注册码定位家庭
    let family = match storage.get_family_by_code(&family_code).await {
        Ok(family) => family,
        Err(e) => {
            tracing::error!("Family lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Signup failed: {e}"))));
        }
    };

    let Some(family) = family else {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Invalid Family Code")));
    };

    // 2. 创建未审批的家长账号并绑定家庭
    let create_request = CreateUserRequest {
        email: signup_request.email.unwrap_or_default(),
        password: signup_request.password.unwrap_or_default(),
        role: UserRole::Parent,
        is_approved: false,
        family_id: Some(family.id),
        name: None,
    };

    match storage.create_user(create_request).await {
        Ok(user) => {
            tracing::info!(
                "Parent account {} created for family {} (pending approval)",
                user.email,
                family.name
            );
            Ok(HttpResponse::Ok().json(MessageResponse::new("Account created.")))
        }
        Err(e) => {
            tracing::error!("Failed to create parent account: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Signup failed: {e}"))))
        }
    }
}
