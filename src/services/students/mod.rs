pub mod list;
pub mod years;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    // 列出所有学生
    pub async fn list_students(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_students(self, request).await
    }

    // 按学年列出学生；学年段无法解析时返回空列表
    pub async fn list_students_by_year(
        &self,
        year_segment: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_students_by_year(self, year_segment, request).await
    }

    // 列出默认家庭的孩子
    pub async fn list_parent_children(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_parent_children(self, request).await
    }

    // 学年范围列表
    pub async fn list_years(&self) -> ActixResult<HttpResponse> {
        years::handle_list_years().await
    }
}
