use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::ErrorResponse;
use crate::models::students::entities::Student;
use crate::services::DEFAULT_FAMILY_ID;

pub async fn handle_list_students(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students().await {
        Ok(students) => Ok(HttpResponse::Ok().json(students)),
        Err(e) => {
            tracing::error!("Failed to list students: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Failed to list students: {e}"))))
        }
    }
}

pub async fn handle_list_students_by_year(
    service: &StudentService,
    year_segment: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 只看最后一个 / 分段；不是整数时吞掉错误，返回空列表（沿用原接口行为）
    let last_segment = year_segment.rsplit('/').next().unwrap_or_default();
    let Ok(year) = last_segment.parse::<i32>() else {
        return Ok(HttpResponse::Ok().json(Vec::<Student>::new()));
    };

    match storage.list_students_by_year(year).await {
        Ok(students) => Ok(HttpResponse::Ok().json(students)),
        Err(e) => {
            tracing::error!("Failed to list students by year: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Failed to list students: {e}"))))
        }
    }
}

pub async fn handle_list_parent_children(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 无会话机制，固定解析到默认家庭
    match storage.list_students_by_family(DEFAULT_FAMILY_ID).await {
        Ok(students) => Ok(HttpResponse::Ok().json(students)),
        Err(e) => {
            tracing::error!("Failed to list children: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Failed to list children: {e}"))))
        }
    }
}
