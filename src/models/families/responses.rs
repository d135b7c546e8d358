use serde::{Deserialize, Serialize};

// 关联学生成功后的响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkStudentResponse {
    pub success: bool,
    #[serde(rename = "familyName")]
    pub family_name: String,
}

impl LinkStudentResponse {
    pub fn new(family_name: impl Into<String>) -> Self {
        Self {
            success: true,
            family_name: family_name.into(),
        }
    }
}
