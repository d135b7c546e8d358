use super::{Collections, MemoryStorage};
use crate::errors::Result;
use crate::models::families::entities::Family;
use crate::utils::generate_daily_code;

/// 在写锁内生成未被占用的 6 位数字注册码
fn unique_family_code(db: &Collections) -> String {
    loop {
        let code = generate_daily_code();
        if !db.families.iter().any(|f| f.code == code) {
            return code;
        }
    }
}

impl MemoryStorage {
    /// 创建家庭；code 为 None 时生成查重后的随机注册码
    pub async fn create_family_impl(&self, name: String, code: Option<String>) -> Result<Family> {
        let mut db = self.inner.write().await;
        let code = code.unwrap_or_else(|| unique_family_code(&db));
        let family = Family {
            id: db.families.len() as i64 + 1,
            name,
            code,
            created_at: chrono::Utc::now(),
        };
        db.families.push(family.clone());
        Ok(family)
    }

    /// 创建家庭并在同一次写锁内重新关联学生
    pub async fn create_family_with_students_impl(
        &self,
        name: String,
        code: String,
        student_ids: &[i64],
    ) -> Result<Family> {
        let mut db = self.inner.write().await;
        let family = Family {
            id: db.families.len() as i64 + 1,
            name,
            code,
            created_at: chrono::Utc::now(),
        };
        db.families.push(family.clone());

        for student in db.students.iter_mut() {
            if student_ids.contains(&student.id) {
                student.family_id = Some(family.id);
            }
        }
        Ok(family)
    }

    /// 通过ID获取家庭
    pub async fn get_family_by_id_impl(&self, family_id: i64) -> Result<Option<Family>> {
        let db = self.inner.read().await;
        Ok(db.families.iter().find(|f| f.id == family_id).cloned())
    }

    /// 通过注册码获取家庭（首个匹配；INTERNAL 哨兵值可能重复）
    pub async fn get_family_by_code_impl(&self, code: &str) -> Result<Option<Family>> {
        let db = self.inner.read().await;
        Ok(db.families.iter().find(|f| f.code == code).cloned())
    }

    /// 通过注册码将学生关联到家庭，家庭或学生缺失返回 None
    pub async fn link_student_to_family_by_code_impl(
        &self,
        family_code: &str,
        student_id: i64,
    ) -> Result<Option<Family>> {
        let mut db = self.inner.write().await;
        let family = match db.families.iter().find(|f| f.code == family_code) {
            Some(family) => family.clone(),
            None => return Ok(None),
        };
        match db.students.iter_mut().find(|s| s.id == student_id) {
            Some(student) => {
                student.family_id = Some(family.id);
                Ok(Some(family))
            }
            None => Ok(None),
        }
    }
}
