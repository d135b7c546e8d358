use super::MemoryStorage;
use crate::errors::Result;
use crate::models::students::{entities::Student, requests::CreateStudentRequest};

impl MemoryStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let mut db = self.inner.write().await;
        let student = Student {
            id: db.students.len() as i64 + 1,
            name: req.name,
            year: req.year,
            class_label: req.class_label,
            family_id: req.family_id,
        };
        db.students.push(student.clone());
        Ok(student)
    }

    /// 列出所有学生（插入顺序）
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let db = self.inner.read().await;
        Ok(db.students.clone())
    }

    /// 按学年列出学生
    pub async fn list_students_by_year_impl(&self, year: i32) -> Result<Vec<Student>> {
        let db = self.inner.read().await;
        Ok(db
            .students
            .iter()
            .filter(|s| s.year == year)
            .cloned()
            .collect())
    }

    /// 按家庭列出学生
    pub async fn list_students_by_family_impl(&self, family_id: i64) -> Result<Vec<Student>> {
        let db = self.inner.read().await;
        Ok(db
            .students
            .iter()
            .filter(|s| s.family_id == Some(family_id))
            .cloned()
            .collect())
    }

    /// 按ID集合列出学生
    pub async fn list_students_by_ids_impl(&self, ids: &[i64]) -> Result<Vec<Student>> {
        let db = self.inner.read().await;
        Ok(db
            .students
            .iter()
            .filter(|s| ids.contains(&s.id))
            .cloned()
            .collect())
    }
}
