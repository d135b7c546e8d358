use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ErrorResponse;
use crate::models::auth::{ValidateInviteRequest, ValidateInviteResponse};

use super::AuthService;

pub async fn handle_validate_invite(
    service: &AuthService,
    validate_request: ValidateInviteRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let code = validate_request.code.unwrap_or_default();

    let invite = match storage.get_invite_by_code(&code).await {
        Ok(invite) => invite,
        Err(e) => {
            tracing::error!("Invite lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Invite validation failed: {e}"))));
        }
    };

    let Some(invite) = invite else {
        return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Invalid invite code")));
    };

    if invite.is_used {
        return Ok(HttpResponse::BadRequest().json(ErrorResponse::new("Invite already used")));
    }

    // 解析邀请可见的学生明细
    match storage.list_students_by_ids(&invite.student_ids).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ValidateInviteResponse {
            success: true,
            email: invite.email,
            name: invite.name,
            role: invite.role,
            students,
        })),
        Err(e) => {
            tracing::error!("Failed to resolve invite students: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Invite validation failed: {e}"))))
        }
    }
}
