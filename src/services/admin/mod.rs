pub mod approve;
pub mod families;
pub mod invite_batch;
pub mod pending_users;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::families::requests::{CreateFamilyRequest, LinkStudentRequest};
use crate::models::invites::requests::InviteBatchRequest;
use crate::storage::Storage;

pub struct AdminService {
    storage: Option<Arc<dyn Storage>>,
}

impl AdminService {
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

    // 列出待审批用户
    pub async fn list_pending_users(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        pending_users::handle_list_pending_users(self, request).await
    }

    // 审批用户（解析/查找失败静默忽略）
    pub async fn approve_user(
        &self,
        user_id_segment: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        approve::handle_approve_user(self, user_id_segment, request).await
    }

    // 批量签发家长邀请
    pub async fn invite_batch(
        &self,
        batch_request: InviteBatchRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        invite_batch::handle_invite_batch(self, batch_request, request).await
    }

    // 创建家庭
    pub async fn create_family(
        &self,
        family_request: CreateFamilyRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        families::handle_create_family(self, family_request, request).await
    }

    // 通过注册码把学生关联到家庭
    pub async fn link_student(
        &self,
        link_request: LinkStudentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        families::handle_link_student(self, link_request, request).await
    }
}
