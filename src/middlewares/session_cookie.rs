/*!
 * 会话 Cookie 中间件
 *
 * 给每个 POST 响应追加 `Set-Cookie: session_id=12345; Path=/`。
 * 这是装饰性的：服务器没有会话校验逻辑，Cookie 值固定，
 * 与认证结果无关。原接口如此，前端页面依赖这个头存在。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
    http::Method,
    http::header::{HeaderValue, SET_COOKIE},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;

const SESSION_COOKIE: &str = "session_id=12345; Path=/";

#[derive(Clone)]
pub struct SessionCookie;

impl<S, B> Transform<S, ServiceRequest> for SessionCookie
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionCookieMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionCookieMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct SessionCookieMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionCookieMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let is_post = req.method() == Method::POST;
        Box::pin(async move {
            let mut res = srv.call(req).await?;
            if is_post {
                res.headers_mut()
                    .append(SET_COOKIE, HeaderValue::from_static(SESSION_COOKIE));
            }
            Ok(res)
        })
    }
}
