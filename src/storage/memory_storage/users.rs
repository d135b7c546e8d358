use super::MemoryStorage;
use crate::errors::Result;
use crate::models::users::{entities::User, requests::CreateUserRequest};

impl MemoryStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let mut db = self.inner.write().await;
        let user = User {
            id: db.users.len() as i64 + 1,
            email: req.email,
            password: req.password,
            role: req.role,
            is_approved: req.is_approved,
            family_id: req.family_id,
            name: req.name,
            created_at: chrono::Utc::now(),
        };
        db.users.push(user.clone());
        Ok(user)
    }

    /// 通过邮箱获取用户（精确匹配）
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let db = self.inner.read().await;
        Ok(db.users.iter().find(|u| u.email == email).cloned())
    }

    /// 用户总数
    pub async fn count_users_impl(&self) -> Result<usize> {
        let db = self.inner.read().await;
        Ok(db.users.len())
    }

    /// 列出待审批用户
    pub async fn list_pending_users_impl(&self) -> Result<Vec<User>> {
        let db = self.inner.read().await;
        Ok(db
            .users
            .iter()
            .filter(|u| !u.is_approved)
            .cloned()
            .collect())
    }

    /// 审批用户；不存在返回 false
    pub async fn approve_user_impl(&self, user_id: i64) -> Result<bool> {
        let mut db = self.inner.write().await;
        match db.users.iter_mut().find(|u| u.id == user_id) {
            Some(user) => {
                user.is_approved = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
