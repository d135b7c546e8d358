pub mod code;
pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::pickups::requests::{CreatePickupCodeRequest, CreatePickupRequest};
use crate::storage::Storage;

pub struct PickupService {
    storage: Option<Arc<dyn Storage>>,
}

impl PickupService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建接送记录
    pub async fn create_pickup(
        &self,
        pickup_request: CreatePickupRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_pickup(self, pickup_request, request).await
    }

    // 列出接送记录（路径叫 pending，但返回全部，见 list.rs）
    pub async fn list_pending_pickups(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_pending_pickups(self, request).await
    }

    // 生成当日接送码
    pub async fn create_pickup_code(
        &self,
        code_request: CreatePickupCodeRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        code::handle_create_pickup_code(self, code_request, request).await
    }

    // 通过接送码查询家庭与学生明细
    pub async fn get_pickup_code(
        &self,
        code: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        code::handle_get_pickup_code(self, code, request).await
    }
}
