use serde::{Deserialize, Serialize};

// 接送状态
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PickupStatus {
    // 接送请求创建后始终停留在 pending，本服务不做状态流转
    Pending,
}

impl std::fmt::Display for PickupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PickupStatus::Pending => write!(f, "pending"),
        }
    }
}

// 接送请求记录
//
// 字段来自未校验的请求体，缺失时保持 null（沿用原接口行为）。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    // 4位数字ID
    pub id: String,
    pub student_name: Option<String>,
    pub year: Option<i32>,
    #[serde(rename = "class")]
    pub class_label: Option<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub status: PickupStatus,
}

// 当日接送码
//
// expires_at 仅作展示，服务端不做过期清理或校验。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCode {
    // 6位数字接送码
    pub code: String,
    // 所属家庭
    pub family_id: i64,
    // 该码可查看的学生ID集合
    pub student_ids: Vec<i64>,
    // 过期时间（创建后 24 小时）
    pub expires_at: chrono::DateTime<chrono::Utc>,
}
