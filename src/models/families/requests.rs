use serde::Deserialize;

// 创建家庭请求（POST /api/admin/families）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateFamilyRequest {
    pub name: Option<String>,
}

// 关联学生到家庭请求（POST /api/admin/families/students）
// studentId 兼容整数和数字字符串两种形式（沿用原接口的宽松约定）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LinkStudentRequest {
    #[serde(rename = "familyCode")]
    pub family_code: Option<String>,
    #[serde(rename = "studentId")]
    pub student_id: Option<serde_json::Value>,
}

impl LinkStudentRequest {
    /// 解析 studentId 字段，整数或数字字符串均可
    pub fn student_id_as_i64(&self) -> Option<i64> {
        match &self.student_id {
            Some(value) => value
                .as_i64()
                .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok())),
            None => None,
        }
    }
}
