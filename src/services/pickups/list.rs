use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PickupService;
use crate::models::ErrorResponse;

pub async fn handle_list_pending_pickups(
    service: &PickupService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 注意：路径叫 pending，但这里返回全部记录、不按状态过滤（沿用原接口行为）
    match storage.list_pickups().await {
        Ok(pickups) => Ok(HttpResponse::Ok().json(pickups)),
        Err(e) => {
            tracing::error!("Failed to list pickups: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new(format!("Failed to list pickups: {e}"))))
        }
    }
}
