use serde::{Deserialize, Serialize};

// 学年列表条目，GET /api/years 返回 [{"year": 7}, ...]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearEntry {
    pub year: i32,
}
