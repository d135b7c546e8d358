use serde::{Deserialize, Serialize};

// 批量邀请结果中的单条摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteSummary {
    pub role: String,
    pub name: String,
    pub email: String,
    pub code: String,
}

// 批量邀请响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteBatchResponse {
    pub success: bool,
    pub invites: Vec<InviteSummary>,
}

impl InviteBatchResponse {
    pub fn new(invites: Vec<InviteSummary>) -> Self {
        Self {
            success: true,
            invites,
        }
    }
}
