use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PickupService;
use crate::models::ErrorResponse;
use crate::models::pickups::requests::CreatePickupCodeRequest;
use crate::models::pickups::responses::{PickupCodeCreated, PickupCodeDetails};
use crate::services::DEFAULT_FAMILY_ID;

pub async fn handle_create_pickup_code(
    service: &PickupService,
    code_request: CreatePickupCodeRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 无会话机制，接送码一律挂在默认家庭下
    match storage
        .create_daily_code(DEFAULT_FAMILY_ID, code_request.student_ids)
        .await
    {
        Ok(daily_code) => {
            tracing::info!(
                "Daily pickup code {} issued for family {}",
                daily_code.code,
                daily_code.family_id
            );
            Ok(HttpResponse::Ok().json(PickupCodeCreated {
                code: daily_code.code,
                expires_at: daily_code.expires_at,
            }))
        }
        Err(e) => {
            tracing::error!("Failed to issue pickup code: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Failed to issue code: {e}"))))
        }
    }
}

pub async fn handle_get_pickup_code(
    service: &PickupService,
    code: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let daily_code = match storage.get_daily_code(&code).await {
        Ok(daily_code) => daily_code,
        Err(e) => {
            tracing::error!("Pickup code lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Code lookup failed: {e}"))));
        }
    };

    let Some(daily_code) = daily_code else {
        return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Code not found")));
    };

    // 解析家庭名称与该码覆盖的学生集合
    let family = match storage.get_family_by_id(daily_code.family_id).await {
        Ok(Some(family)) => family,
        Ok(None) => {
            // 悬空的 family_id：数据不变式仅为约定，不在写入时强制
            tracing::error!(
                "Daily code {} references missing family {}",
                daily_code.code,
                daily_code.family_id
            );
            return Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(format!(
                "Family {} not found for code",
                daily_code.family_id
            ))));
        }
        Err(e) => {
            tracing::error!("Family lookup failed: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Code lookup failed: {e}"))));
        }
    };

    match storage.list_students_by_ids(&daily_code.student_ids).await {
        Ok(students) => Ok(HttpResponse::Ok().json(PickupCodeDetails {
            family: family.name,
            students,
        })),
        Err(e) => {
            tracing::error!("Failed to resolve code students: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Code lookup failed: {e}"))))
        }
    }
}
