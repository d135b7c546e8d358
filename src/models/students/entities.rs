use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    // 学生ID
    pub id: i64,
    // 姓名
    pub name: String,
    // 学年（7 到 13）
    pub year: i32,
    // 班级标签（blue / red / green ...）
    #[serde(rename = "class")]
    pub class_label: String,
    // 所属家庭ID，入学时可能尚未关联
    pub family_id: Option<i64>,
}
