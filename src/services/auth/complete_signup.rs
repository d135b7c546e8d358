use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::CompleteSignupRequest;
use crate::models::users::{entities::UserRole, requests::CreateUserRequest};
use crate::models::{ErrorResponse, MessageResponse};

use super::AuthService;

pub async fn handle_complete_signup(
    service: &AuthService,
    complete_request: CompleteSignupRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let code = complete_request.code.unwrap_or_default();

    // 1. 原子消费邀请，二次使用在这里被拒绝
    let invite = match storage.consume_invite(&code).await {
        Ok(invite) => invite,
        Err(e) => {
            tracing::error!("Invite consume failed: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Signup failed: {e}"))));
        }
    };

    let Some(invite) = invite else {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Invalid or used invite")));
    };

    // 2. 创建已审批的家长账号，邮箱/姓名/家庭来自邀请，密码来自请求
    let create_request = CreateUserRequest {
        email: invite.email,
        password: complete_request.password.unwrap_or_default(),
        role: UserRole::Parent,
        is_approved: true, // 受邀用户自动审批
        family_id: invite.family_id,
        name: Some(invite.name),
    };

    match storage.create_user(create_request).await {
        Ok(user) => {
            tracing::info!("Invited parent account {} activated", user.email);
            Ok(HttpResponse::Ok().json(MessageResponse::new("Account setup complete")))
        }
        Err(e) => {
            tracing::error!("Failed to create invited account: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Signup failed: {e}"))))
        }
    }
}
