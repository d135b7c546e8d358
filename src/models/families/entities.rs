use serde::{Deserialize, Serialize};

/// 家庭自助注册码的固定哨兵值。
/// 通过邀请流程创建的家庭不开放自助注册，使用该值占位。
pub const INTERNAL_FAMILY_CODE: &str = "INTERNAL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Family {
    // 家庭ID
    pub id: i64,
    // 家庭名称
    pub name: String,
    // 家长自助注册码（6位数字，或 INTERNAL 哨兵值）
    pub code: String,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}
