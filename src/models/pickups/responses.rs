use serde::{Deserialize, Serialize};

use crate::models::students::entities::Student;

// 接送码创建成功响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupCodeCreated {
    pub code: String,
    #[serde(rename = "expiresAt")]
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

// 接送码查询响应：家庭名称 + 该码覆盖的学生
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupCodeDetails {
    pub family: String,
    pub students: Vec<Student>,
}
