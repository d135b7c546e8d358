use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::models::ErrorResponse;
use crate::models::families::{
    requests::{CreateFamilyRequest, LinkStudentRequest},
    responses::LinkStudentResponse,
};

pub async fn handle_create_family(
    service: &AdminService,
    family_request: CreateFamilyRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 注册码由存储层生成（6位数字，写锁内查重）
    match storage
        .create_family(family_request.name.unwrap_or_default(), None)
        .await
    {
        Ok(family) => {
            tracing::info!("Family {} ({}) created", family.name, family.id);
            Ok(HttpResponse::Ok().json(family))
        }
        Err(e) => {
            tracing::error!("Failed to create family: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Failed to create family: {e}"))))
        }
    }
}

pub async fn handle_link_student(
    service: &AdminService,
    link_request: LinkStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let family_code = link_request.family_code.clone().unwrap_or_default();
    // studentId 无法解析成整数时落入未找到分支
    let Some(student_id) = link_request.student_id_as_i64() else {
        return Ok(HttpResponse::NotFound().json(ErrorResponse::new("Family/Student not found")));
    };

    match storage
        .link_student_to_family_by_code(&family_code, student_id)
        .await
    {
        Ok(Some(family)) => {
            tracing::info!("Student {} linked to family {}", student_id, family.name);
            Ok(HttpResponse::Ok().json(LinkStudentResponse::new(family.name)))
        }
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ErrorResponse::new("Family/Student not found")))
        }
        Err(e) => {
            tracing::error!("Failed to link student: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Failed to link student: {e}"))))
        }
    }
}
