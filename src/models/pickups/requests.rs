use serde::Deserialize;

// 创建接送请求（POST /api/pickups）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatePickupRequest {
    pub student_name: Option<String>,
    pub year: Option<i32>,
    #[serde(rename = "class")]
    pub class_label: Option<String>,
}

// 生成当日接送码请求（POST /api/pickup-code）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreatePickupCodeRequest {
    #[serde(rename = "studentIds")]
    pub student_ids: Vec<i64>,
}
