use serde::Deserialize;

// 创建学生请求（目前仅用于启动时的种子数据）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub year: i32,
    #[serde(rename = "class")]
    pub class_label: String,
    #[serde(default)]
    pub family_id: Option<i64>,
}
