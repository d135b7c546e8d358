use serde::{Deserialize, Serialize};

// 家长邀请
//
// 管理员批量签发的一次性邀请码，家长凭码完成注册并预绑定家庭。
// expires_at 仅作展示，不做过期强制。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentInvite {
    // 6位邀请码（去除易混淆字符的字母数字表）
    pub code: String,
    pub email: String,
    pub name: String,
    // 邀请角色为自由文本（parent / guardian ...），不限于 UserRole
    pub role: String,
    // 邀请可见的学生集合
    pub student_ids: Vec<i64>,
    // 批量创建时未指定家庭名称则不绑定家庭
    pub family_id: Option<i64>,
    pub is_used: bool,
    // 过期时间（创建后 7 天）
    pub expires_at: chrono::DateTime<chrono::Utc>,
}
