use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PickupService;
use crate::models::pickups::requests::CreatePickupRequest;
use crate::models::{ErrorResponse, SuccessResponse};

pub async fn handle_create_pickup(
    service: &PickupService,
    pickup_request: CreatePickupRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 新记录不回显，响应保持默认成功信封
    match storage.create_pickup(pickup_request).await {
        Ok(pickup) => {
            tracing::info!("Pickup {} recorded (pending)", pickup.id);
            Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
        }
        Err(e) => {
            tracing::error!("Failed to record pickup: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Failed to record pickup: {e}"))))
        }
    }
}
