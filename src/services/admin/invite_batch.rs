use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::models::ErrorResponse;
use crate::models::families::entities::INTERNAL_FAMILY_CODE;
use crate::models::invites::{
    requests::InviteBatchRequest,
    responses::{InviteBatchResponse, InviteSummary},
};

pub async fn handle_invite_batch(
    service: &AdminService,
    batch_request: InviteBatchRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 指定了家庭名称时创建 INTERNAL 家庭并重新关联学生（同一次写锁内完成）
    let family_id = match batch_request.family_name {
        Some(family_name) => {
            match storage
                .create_family_with_students(
                    family_name,
                    INTERNAL_FAMILY_CODE.to_string(),
                    &batch_request.student_ids,
                )
                .await
            {
                Ok(family) => {
                    tracing::info!(
                        "Invite-only family {} ({}) created, {} student(s) linked",
                        family.name,
                        family.id,
                        batch_request.student_ids.len()
                    );
                    Some(family.id)
                }
                Err(e) => {
                    tracing::error!("Failed to create invite family: {}", e);
                    return Ok(HttpResponse::InternalServerError()
                        .json(ErrorResponse::new(format!("Invite batch failed: {e}"))));
                }
            }
        }
        // 未建家庭时邀请不绑定家庭
        None => None,
    };

    // 2. 为每个姓名和角色齐全的家长条目签发邀请
    let mut invites = Vec::new();
    for parent in batch_request.parents {
        let (Some(name), Some(role)) = (parent.name, parent.role) else {
            continue;
        };
        let email = parent.email.unwrap_or_default();

        match storage
            .create_parent_invite(
                email,
                name,
                role,
                batch_request.student_ids.clone(),
                family_id,
            )
            .await
        {
            Ok(invite) => {
                // 模拟邮件投递
                tracing::info!(
                    "[EMAIL MOCK] To: {} | Subject: Welcome {} ({}) | Code: {}",
                    invite.email,
                    invite.name,
                    invite.role,
                    invite.code
                );
                invites.push(InviteSummary {
                    role: invite.role,
                    name: invite.name,
                    email: invite.email,
                    code: invite.code,
                });
            }
            Err(e) => {
                tracing::error!("Failed to create invite: {}", e);
                return Ok(HttpResponse::InternalServerError()
                    .json(ErrorResponse::new(format!("Invite batch failed: {e}"))));
            }
        }
    }

    Ok(HttpResponse::Ok().json(InviteBatchResponse::new(invites)))
}
