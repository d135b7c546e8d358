pub mod admin;

pub mod auth;

pub mod fallback;

pub mod frontend;

pub mod pickups;

pub mod students;

pub use admin::configure_admin_routes;
pub use auth::configure_auth_routes;
pub use fallback::configure_fallback_routes;
pub use frontend::configure_frontend_routes;
pub use pickups::configure_pickup_routes;
pub use students::configure_student_routes;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middlewares::SessionCookie;
    use crate::runtime::lifetime::startup::seed_mock_data;
    use crate::storage::{Storage, create_storage};
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};
    use std::sync::Arc;

    // 按生产环境的顺序装配完整应用：业务路由 → API 兜底 → 静态资源
    macro_rules! init_test_app {
        ($storage:expr) => {
            test::init_service(
                App::new()
                    .wrap(SessionCookie)
                    .app_data(web::Data::new($storage.clone()))
                    .configure(configure_auth_routes)
                    .configure(configure_student_routes)
                    .configure(configure_pickup_routes)
                    .configure(configure_admin_routes)
                    .configure(configure_fallback_routes)
                    .configure(configure_frontend_routes),
            )
            .await
        };
    }

    async fn seeded_storage() -> Arc<dyn Storage> {
        let storage = create_storage().await.unwrap();
        seed_mock_data(&storage).await;
        storage
    }

    #[actix_web::test]
    async fn test_students_by_year_and_invalid_year() {
        let storage = seeded_storage().await;
        let app = init_test_app!(storage);

        let req = test::TestRequest::get()
            .uri("/api/students/year/7")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["John Doe"]);

        // 非整数年级不报错，返回空列表
        let req = test::TestRequest::get()
            .uri("/api/students/year/abc")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));

        // 多余的尾部分段也落在学年路由上，按最后一段解析失败 → 空列表
        let req = test::TestRequest::get()
            .uri("/api/students/year/7/extra")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_repeated_students_listing_is_stable() {
        let storage = seeded_storage().await;
        let app = init_test_app!(storage);

        let req = test::TestRequest::get().uri("/api/students").to_request();
        let first: Value = test::call_and_read_body_json(&app, req).await;
        let req = test::TestRequest::get().uri("/api/students").to_request();
        let second: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(first.as_array().unwrap().len(), 3);
        // 无写操作时重复读取返回完全一致的有序内容
        assert_eq!(first, second);
    }

    #[actix_web::test]
    async fn test_login_checks_password() {
        let storage = seeded_storage().await;
        let app = init_test_app!(storage);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "admin@school.com", "password": "wrong"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "admin@school.com", "password": "admin"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["user"]["email"], json!("admin@school.com"));
    }

    #[actix_web::test]
    async fn test_post_responses_carry_session_cookie() {
        let storage = seeded_storage().await;
        let app = init_test_app!(storage);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": "nobody@school.com", "password": "x"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let cookie = resp
            .headers()
            .get(actix_web::http::header::SET_COOKIE)
            .expect("POST response must set session cookie");
        assert_eq!(cookie.to_str().unwrap(), "session_id=12345; Path=/");

        // GET 响应不带会话 Cookie
        let req = test::TestRequest::get().uri("/api/students").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(
            resp.headers()
                .get(actix_web::http::header::SET_COOKIE)
                .is_none()
        );
    }

    #[actix_web::test]
    async fn test_signup_rejects_unknown_family_code() {
        let storage = seeded_storage().await;
        let app = init_test_app!(storage);

        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(json!({
                "familyCode": "NOPE99",
                "email": "parent@example.com",
                "password": "pw"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], json!("Invalid Family Code"));

        // 失败的注册不留下账号
        let user = storage.get_user_by_email("parent@example.com").await.unwrap();
        assert!(user.is_none());
    }

    #[actix_web::test]
    async fn test_signup_with_seeded_family_code() {
        let storage = seeded_storage().await;
        let app = init_test_app!(storage);

        let req = test::TestRequest::post()
            .uri("/api/auth/signup")
            .set_json(json!({
                "familyCode": "CODE123",
                "email": "doe.parent@example.com",
                "password": "pw"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let user = storage
            .get_user_by_email("doe.parent@example.com")
            .await
            .unwrap()
            .expect("signup must create the user");
        assert!(!user.is_approved);
        assert_eq!(user.family_id, Some(1));
    }

    #[actix_web::test]
    async fn test_pickup_code_roundtrip() {
        let storage = seeded_storage().await;
        let app = init_test_app!(storage);

        let req = test::TestRequest::post()
            .uri("/api/pickup-code")
            .set_json(json!({"studentIds": [1, 2]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let code = body["code"].as_str().unwrap().to_string();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
        assert!(body["expiresAt"].is_string());

        let req = test::TestRequest::get()
            .uri(&format!("/api/pickup-code/{code}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["family"], json!("The Doe Family"));
        let students = body["students"].as_array().unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0]["name"], json!("John Doe"));
        assert_eq!(students[1]["name"], json!("Jane Smith"));
    }

    #[actix_web::test]
    async fn test_pickup_code_not_found() {
        let storage = seeded_storage().await;
        let app = init_test_app!(storage);

        let req = test::TestRequest::get()
            .uri("/api/pickup-code/000000")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_invite_batch_creates_family_and_invites() {
        let storage = seeded_storage().await;
        let app = init_test_app!(storage);

        let req = test::TestRequest::post()
            .uri("/api/admin/invite-batch")
            .set_json(json!({
                "parents": [
                    {"name": "Amy Doe", "role": "mother", "email": "amy@example.com"}
                ],
                "studentIds": [1],
                "familyName": "The Second Family"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(true));
        let invites = body["invites"].as_array().unwrap();
        assert_eq!(invites.len(), 1);
        assert_eq!(invites[0]["email"], json!("amy@example.com"));
        assert_eq!(invites[0]["code"].as_str().unwrap().len(), 6);

        // 学生 1 被改挂到新建家庭（种子家庭是 1 号，新家庭拿到 2 号）
        let students = storage.list_students().await.unwrap();
        let john = students.iter().find(|s| s.id == 1).unwrap();
        assert_eq!(john.family_id, Some(2));
    }

    #[actix_web::test]
    async fn test_validate_invite_statuses() {
        let storage = seeded_storage().await;
        let app = init_test_app!(storage);

        // 未知邀请码 → 404（区别于已使用的 400）
        let req = test::TestRequest::post()
            .uri("/api/auth/validate-invite")
            .set_json(json!({"code": "ZZZZZZ"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], json!("Invalid invite code"));

        let invite = storage
            .create_parent_invite(
                "amy@example.com".to_string(),
                "Amy Doe".to_string(),
                "mother".to_string(),
                vec![1, 2],
                Some(1),
            )
            .await
            .unwrap();

        // 有效邀请 → 200，回显邀请内容并解析学生明细
        let req = test::TestRequest::post()
            .uri("/api/auth/validate-invite")
            .set_json(json!({"code": invite.code}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["email"], json!("amy@example.com"));
        assert_eq!(body["name"], json!("Amy Doe"));
        assert_eq!(body["role"], json!("mother"));
        let students = body["students"].as_array().unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0]["name"], json!("John Doe"));

        // 已使用的邀请 → 400
        storage.consume_invite(&invite.code).await.unwrap();
        let req = test::TestRequest::post()
            .uri("/api/auth/validate-invite")
            .set_json(json!({"code": invite.code}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], json!("Invite already used"));
    }

    #[actix_web::test]
    async fn test_invite_batch_without_family_name() {
        let storage = seeded_storage().await;
        let app = init_test_app!(storage);

        // 不带 familyName：不建家庭、不改学生关联，邀请不绑定家庭
        let req = test::TestRequest::post()
            .uri("/api/admin/invite-batch")
            .set_json(json!({
                "parents": [
                    {"name": "Ben Smith", "role": "father", "email": "ben@example.com"}
                ],
                "studentIds": [2]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        let invites = body["invites"].as_array().unwrap();
        assert_eq!(invites.len(), 1);
        let code = invites[0]["code"].as_str().unwrap().to_string();

        let invite = storage.get_invite_by_code(&code).await.unwrap().unwrap();
        assert_eq!(invite.family_id, None);

        // 学生 2 的家庭关联保持不变
        let students = storage.list_students().await.unwrap();
        let jane = students.iter().find(|s| s.id == 2).unwrap();
        assert_eq!(jane.family_id, None);

        // 凭该邀请完成注册的账号同样不绑定家庭
        let req = test::TestRequest::post()
            .uri("/api/auth/complete-signup")
            .set_json(json!({"code": code, "password": "pw"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let user = storage
            .get_user_by_email("ben@example.com")
            .await
            .unwrap()
            .expect("completed signup must create the user");
        assert_eq!(user.family_id, None);
    }

    #[actix_web::test]
    async fn test_complete_signup_is_single_use() {
        let storage = seeded_storage().await;
        let app = init_test_app!(storage);

        let invite = storage
            .create_parent_invite(
                "amy@example.com".to_string(),
                "Amy Doe".to_string(),
                "mother".to_string(),
                vec![1],
                Some(1),
            )
            .await
            .unwrap();

        let payload = json!({"code": invite.code, "password": "secret"});
        let req = test::TestRequest::post()
            .uri("/api/auth/complete-signup")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let user = storage
            .get_user_by_email("amy@example.com")
            .await
            .unwrap()
            .expect("completed signup must create the user");
        assert!(user.is_approved);
        assert_eq!(user.family_id, Some(1));

        // 同一邀请码第二次使用被拒
        let req = test::TestRequest::post()
            .uri("/api/auth/complete-signup")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], json!("Invalid or used invite"));
    }

    #[actix_web::test]
    async fn test_approve_ignores_unknown_user() {
        let storage = seeded_storage().await;
        let app = init_test_app!(storage);

        let req = test::TestRequest::post()
            .uri("/api/admin/users/999/approve")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"success": true}));
    }

    #[actix_web::test]
    async fn test_api_fallback_shapes() {
        let storage = seeded_storage().await;
        let app = init_test_app!(storage);

        let req = test::TestRequest::get()
            .uri("/api/no-such-endpoint")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({}));

        let req = test::TestRequest::post()
            .uri("/api/no-such-endpoint")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"success": true}));

        // 方法不匹配也走兜底：GET 到 POST 端点 → {}，POST 到 GET 端点 → 成功信封
        let req = test::TestRequest::get().uri("/api/auth/login").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({}));

        let req = test::TestRequest::post().uri("/api/years").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"success": true}));

        // 非 API 路径的 POST 返回默认成功信封
        let req = test::TestRequest::post().uri("/checkin-kiosk").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"success": true}));
    }

    #[actix_web::test]
    async fn test_root_serves_landing_page() {
        let storage = seeded_storage().await;
        let app = init_test_app!(storage);

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get(actix_web::http::header::CONTENT_TYPE)
                .unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[actix_web::test]
    async fn test_post_body_is_optional() {
        let storage = seeded_storage().await;
        let app = init_test_app!(storage);

        // 缺失请求体按空对象处理：pickup-code 生成仍然成功
        let req = test::TestRequest::post().uri("/api/pickup-code").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["code"].is_string());
    }
}
