use serde::Deserialize;

use super::entities::UserRole;

// 创建用户请求（注册、邀请完成、种子数据共用）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub is_approved: bool,
    #[serde(default)]
    pub family_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}
