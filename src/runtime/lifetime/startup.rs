use crate::models::students::requests::CreateStudentRequest;
use crate::models::users::{entities::UserRole, requests::CreateUserRequest};
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 初始化模拟数据
/// 集合已有数据时跳过（存储是进程级的，重复初始化只会出现在测试里）
pub async fn seed_mock_data(storage: &Arc<dyn Storage>) {
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!("Store already has {} user(s), skipping mock seed", count);
            return;
        }
        Ok(_) => {
            info!("Empty store, seeding mock roster...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping mock seed", e);
            return;
        }
    }

    // 种子家庭（ID 1，默认家庭）
    if let Err(e) = storage
        .create_family("The Doe Family".to_string(), Some("CODE123".to_string()))
        .await
    {
        warn!("Failed to seed family: {}", e);
    }

    // 种子学生
    let students = [
        ("John Doe", 7, "blue", Some(1)),
        ("Jane Smith", 8, "red", None),
        ("Test Child", 9, "green", None),
    ];
    for (name, year, class_label, family_id) in students {
        if let Err(e) = storage
            .create_student(CreateStudentRequest {
                name: name.to_string(),
                year,
                class_label: class_label.to_string(),
                family_id,
            })
            .await
        {
            warn!("Failed to seed student {}: {}", name, e);
        }
    }

    // 种子管理员账号（明文密码，测试服务器的既定表面）
    let admin_request = CreateUserRequest {
        email: "admin@school.com".to_string(),
        password: "admin".to_string(),
        role: UserRole::Admin,
        is_approved: true,
        family_id: None,
        name: None,
    };
    match storage.create_user(admin_request).await {
        Ok(user) => {
            info!("Mock admin account seeded (ID: {}, email: {})", user.id, user.email);
        }
        Err(e) => {
            warn!("Failed to seed admin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储创建与模拟数据初始化
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("In-memory storage backend initialized");

    // 初始化模拟数据
    seed_mock_data(&storage).await;

    StartupContext { storage }
}
