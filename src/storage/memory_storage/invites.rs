use super::MemoryStorage;
use crate::errors::Result;
use crate::models::invites::entities::ParentInvite;
use crate::utils::generate_invite_code;

impl MemoryStorage {
    /// 创建家长邀请，邀请码在写锁内生成并查重
    pub async fn create_parent_invite_impl(
        &self,
        email: String,
        name: String,
        role: String,
        student_ids: Vec<i64>,
        family_id: Option<i64>,
    ) -> Result<ParentInvite> {
        let mut db = self.inner.write().await;
        let code = loop {
            let candidate = generate_invite_code();
            if !db.parent_invites.iter().any(|i| i.code == candidate) {
                break candidate;
            }
        };
        let invite = ParentInvite {
            code,
            email,
            name,
            role,
            student_ids,
            family_id,
            is_used: false,
            expires_at: chrono::Utc::now() + chrono::Duration::days(7),
        };
        db.parent_invites.push(invite.clone());
        Ok(invite)
    }

    /// 通过邀请码查询
    pub async fn get_invite_by_code_impl(&self, code: &str) -> Result<Option<ParentInvite>> {
        let db = self.inner.read().await;
        Ok(db.parent_invites.iter().find(|i| i.code == code).cloned())
    }

    /// 原子消费邀请：存在且未使用时置位 is_used 并返回邀请内容
    pub async fn consume_invite_impl(&self, code: &str) -> Result<Option<ParentInvite>> {
        let mut db = self.inner.write().await;
        match db
            .parent_invites
            .iter_mut()
            .find(|i| i.code == code && !i.is_used)
        {
            Some(invite) => {
                invite.is_used = true;
                Ok(Some(invite.clone()))
            }
            None => Ok(None),
        }
    }
}
