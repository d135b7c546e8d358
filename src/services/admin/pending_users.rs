use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::models::ErrorResponse;

pub async fn handle_list_pending_users(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_pending_users().await {
        Ok(users) => Ok(HttpResponse::Ok().json(users)),
        Err(e) => {
            tracing::error!("Failed to list pending users: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Failed to list users: {e}"))))
        }
    }
}
