use serde::{Deserialize, Serialize};

use crate::models::students::entities::Student;
use crate::models::users::entities::User;

// 登录成功响应，包含完整用户对象（含明文密码，测试服务器不脱敏）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: User,
}

impl LoginResponse {
    pub fn new(user: User) -> Self {
        Self {
            success: true,
            user,
        }
    }
}

// 邀请码校验成功响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateInviteResponse {
    pub success: bool,
    pub email: String,
    pub name: String,
    pub role: String,
    pub students: Vec<Student>,
}
