pub mod complete_signup;
pub mod login;
pub mod signup;
pub mod validate_invite;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::auth::{
    CompleteSignupRequest, LoginRequest, SignupRequest, ValidateInviteRequest,
};
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
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

    // 登录验证
    pub async fn login(
        &self,
        login_request: LoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request, request).await
    }

    // 家长自助注册
    pub async fn signup(
        &self,
        signup_request: SignupRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        signup::handle_signup(self, signup_request, request).await
    }

    // 校验邀请码
    pub async fn validate_invite(
        &self,
        validate_request: ValidateInviteRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        validate_invite::handle_validate_invite(self, validate_request, request).await
    }

    // 通过邀请码完成注册
    pub async fn complete_signup(
        &self,
        complete_request: CompleteSignupRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        complete_signup::handle_complete_signup(self, complete_request, request).await
    }
}
