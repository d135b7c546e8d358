use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::fallback::api_fallback;
use crate::services::StudentService;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

pub async fn list_years() -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_years().await
}

pub async fn list_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req).await
}

pub async fn list_students_by_year(
    req: HttpRequest,
    year: web::Path<String>,
) -> ActixResult<HttpResponse> {
    // 尾段原样传给服务层：取最后一个 / 分段解析，非整数被吞成空列表
    STUDENT_SERVICE
        .list_students_by_year(year.into_inner(), &req)
        .await
}

pub async fn list_parent_children(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_parent_children(&req).await
}

// 配置路由。
// 派发按（方法 + 路径）精确命中，方法不匹配时落入 API 兜底
// 而不是 405（原接口的派发器没有 405/404 分支）。
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/years")
            .route(web::get().to(list_years))
            .default_service(web::to(api_fallback)),
    );
    cfg.service(
        web::resource("/api/students")
            .route(web::get().to(list_students))
            .default_service(web::to(api_fallback)),
    );
    // 学年路由吃掉整个尾部（含多余的 / 分段），与按学年查询的
    // 旧派发习惯一致：/api/students/year/7/extra 也落在这里而不是兜底
    cfg.service(
        web::resource("/api/students/year/{year:.*}")
            .route(web::get().to(list_students_by_year))
            .default_service(web::to(api_fallback)),
    );
    cfg.service(
        web::resource("/api/parent/children")
            .route(web::get().to(list_parent_children))
            .default_service(web::to(api_fallback)),
    );
}
