use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::models::SuccessResponse;

pub async fn handle_approve_user(
    service: &AdminService,
    user_id_segment: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 解析失败、用户不存在、存储错误都静默忽略：
    // 无论结果如何响应都是默认成功信封（沿用原接口行为）
    if let Ok(user_id) = user_id_segment.parse::<i64>() {
        match storage.approve_user(user_id).await {
            Ok(true) => tracing::info!("User {} approved", user_id),
            Ok(false) => tracing::debug!("Approve ignored: user {} not found", user_id),
            Err(e) => tracing::error!("Approve failed for user {}: {}", user_id, e),
        }
    } else {
        tracing::debug!("Approve ignored: unparseable user id '{}'", user_id_segment);
    }

    Ok(HttpResponse::Ok().json(SuccessResponse::ok()))
}
