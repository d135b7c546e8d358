use serde::Deserialize;

// 批量邀请中的单个家长条目
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParentInviteEntry {
    pub name: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
}

// 批量邀请请求（POST /api/admin/invite-batch）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InviteBatchRequest {
    pub parents: Vec<ParentInviteEntry>,
    #[serde(rename = "studentIds")]
    pub student_ids: Vec<i64>,
    #[serde(rename = "familyName")]
    pub family_name: Option<String>,
}
