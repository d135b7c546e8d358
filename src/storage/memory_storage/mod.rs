//! 内存存储后端
//!
//! 所有集合保存在单个 RwLock 之后：写操作串行化，复合变更
//! （建家庭 + 重新关联学生、消费邀请）在一次写锁内完成，
//! 读操作拿到一致快照。进程退出即丢失，无持久化。

use tokio::sync::RwLock;

use crate::errors::Result;
use crate::models::{
    families::entities::Family,
    invites::entities::ParentInvite,
    pickups::{
        entities::{DailyCode, Pickup},
        requests::CreatePickupRequest,
    },
    students::{entities::Student, requests::CreateStudentRequest},
    users::{entities::User, requests::CreateUserRequest},
};

use super::Storage;

mod families;
mod invites;
mod pickups;
mod students;
mod users;

/// 全部内存集合，整体加锁
#[derive(Debug, Default)]
pub(crate) struct Collections {
    pub students: Vec<Student>,
    pub families: Vec<Family>,
    pub users: Vec<User>,
    pub daily_codes: Vec<DailyCode>,
    pub pickups: Vec<Pickup>,
    pub parent_invites: Vec<ParentInvite>,
}

pub struct MemoryStorage {
    pub(crate) inner: RwLock<Collections>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Collections::default()),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    async fn list_students_by_year(&self, year: i32) -> Result<Vec<Student>> {
        self.list_students_by_year_impl(year).await
    }

    async fn list_students_by_family(&self, family_id: i64) -> Result<Vec<Student>> {
        self.list_students_by_family_impl(family_id).await
    }

    async fn list_students_by_ids(&self, ids: &[i64]) -> Result<Vec<Student>> {
        self.list_students_by_ids_impl(ids).await
    }

    async fn create_family(&self, name: String, code: Option<String>) -> Result<Family> {
        self.create_family_impl(name, code).await
    }

    async fn create_family_with_students(
        &self,
        name: String,
        code: String,
        student_ids: &[i64],
    ) -> Result<Family> {
        self.create_family_with_students_impl(name, code, student_ids)
            .await
    }

    async fn get_family_by_id(&self, family_id: i64) -> Result<Option<Family>> {
        self.get_family_by_id_impl(family_id).await
    }

    async fn get_family_by_code(&self, code: &str) -> Result<Option<Family>> {
        self.get_family_by_code_impl(code).await
    }

    async fn link_student_to_family_by_code(
        &self,
        family_code: &str,
        student_id: i64,
    ) -> Result<Option<Family>> {
        self.link_student_to_family_by_code_impl(family_code, student_id)
            .await
    }

    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn count_users(&self) -> Result<usize> {
        self.count_users_impl().await
    }

    async fn list_pending_users(&self) -> Result<Vec<User>> {
        self.list_pending_users_impl().await
    }

    async fn approve_user(&self, user_id: i64) -> Result<bool> {
        self.approve_user_impl(user_id).await
    }

    async fn create_daily_code(
        &self,
        family_id: i64,
        student_ids: Vec<i64>,
    ) -> Result<DailyCode> {
        self.create_daily_code_impl(family_id, student_ids).await
    }

    async fn get_daily_code(&self, code: &str) -> Result<Option<DailyCode>> {
        self.get_daily_code_impl(code).await
    }

    async fn create_pickup(&self, pickup: CreatePickupRequest) -> Result<Pickup> {
        self.create_pickup_impl(pickup).await
    }

    async fn list_pickups(&self) -> Result<Vec<Pickup>> {
        self.list_pickups_impl().await
    }

    async fn create_parent_invite(
        &self,
        email: String,
        name: String,
        role: String,
        student_ids: Vec<i64>,
        family_id: Option<i64>,
    ) -> Result<ParentInvite> {
        self.create_parent_invite_impl(email, name, role, student_ids, family_id)
            .await
    }

    async fn get_invite_by_code(&self, code: &str) -> Result<Option<ParentInvite>> {
        self.get_invite_by_code_impl(code).await
    }

    async fn consume_invite(&self, code: &str) -> Result<Option<ParentInvite>> {
        self.consume_invite_impl(code).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;

    fn seed_student(name: &str, year: i32, class_label: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            name: name.to_string(),
            year,
            class_label: class_label.to_string(),
            family_id: None,
        }
    }

    #[tokio::test]
    async fn test_student_ids_are_sequential() {
        let storage = MemoryStorage::new();
        let a = storage
            .create_student(seed_student("John Doe", 7, "blue"))
            .await
            .unwrap();
        let b = storage
            .create_student(seed_student("Jane Smith", 8, "red"))
            .await
            .unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn test_list_students_by_year() {
        let storage = MemoryStorage::new();
        storage
            .create_student(seed_student("John Doe", 7, "blue"))
            .await
            .unwrap();
        storage
            .create_student(seed_student("Jane Smith", 8, "red"))
            .await
            .unwrap();

        let year7 = storage.list_students_by_year(7).await.unwrap();
        assert_eq!(year7.len(), 1);
        assert_eq!(year7[0].name, "John Doe");
        assert!(storage.list_students_by_year(12).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_family_code_lookup_and_link() {
        let storage = MemoryStorage::new();
        let student = storage
            .create_student(seed_student("Test Child", 9, "green"))
            .await
            .unwrap();
        let family = storage
            .create_family("The Doe Family".to_string(), Some("CODE123".to_string()))
            .await
            .unwrap();

        let found = storage.get_family_by_code("CODE123").await.unwrap();
        assert_eq!(found.map(|f| f.id), Some(family.id));

        let linked = storage
            .link_student_to_family_by_code("CODE123", student.id)
            .await
            .unwrap();
        assert_eq!(linked.map(|f| f.name), Some("The Doe Family".to_string()));

        let members = storage.list_students_by_family(family.id).await.unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].id, student.id);
    }

    #[tokio::test]
    async fn test_link_unknown_family_or_student_is_none() {
        let storage = MemoryStorage::new();
        storage
            .create_family("The Doe Family".to_string(), Some("CODE123".to_string()))
            .await
            .unwrap();

        assert!(
            storage
                .link_student_to_family_by_code("NOPE", 1)
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            storage
                .link_student_to_family_by_code("CODE123", 42)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_generated_family_code_is_numeric() {
        let storage = MemoryStorage::new();
        let family = storage
            .create_family("The Smith Family".to_string(), None)
            .await
            .unwrap();
        assert_eq!(family.code.len(), 6);
        assert!(family.code.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_pending_users_and_approve() {
        let storage = MemoryStorage::new();
        let user = storage
            .create_user(CreateUserRequest {
                email: "parent@example.com".to_string(),
                password: "secret".to_string(),
                role: UserRole::Parent,
                is_approved: false,
                family_id: Some(1),
                name: None,
            })
            .await
            .unwrap();

        assert_eq!(storage.list_pending_users().await.unwrap().len(), 1);
        assert!(storage.approve_user(user.id).await.unwrap());
        assert!(storage.list_pending_users().await.unwrap().is_empty());
        // 不存在的用户返回 false，不报错
        assert!(!storage.approve_user(999).await.unwrap());
    }

    #[tokio::test]
    async fn test_daily_code_roundtrip() {
        let storage = MemoryStorage::new();
        let created = storage.create_daily_code(1, vec![1, 3]).await.unwrap();
        assert_eq!(created.code.len(), 6);

        let found = storage.get_daily_code(&created.code).await.unwrap();
        let found = found.expect("code should be stored");
        assert_eq!(found.family_id, 1);
        assert_eq!(found.student_ids, vec![1, 3]);
        assert!(found.expires_at > chrono::Utc::now());

        assert!(storage.get_daily_code("000000").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_consume_invite_is_single_use() {
        let storage = MemoryStorage::new();
        let invite = storage
            .create_parent_invite(
                "mum@example.com".to_string(),
                "Mum".to_string(),
                "parent".to_string(),
                vec![1],
                Some(1),
            )
            .await
            .unwrap();

        let first = storage.consume_invite(&invite.code).await.unwrap();
        assert!(first.is_some());
        let second = storage.consume_invite(&invite.code).await.unwrap();
        assert!(second.is_none());

        // 消费后 is_used 已置位
        let stored = storage
            .get_invite_by_code(&invite.code)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.is_used);
    }

    #[tokio::test]
    async fn test_create_family_with_students_relinks() {
        let storage = MemoryStorage::new();
        let student = storage
            .create_student(seed_student("John Doe", 7, "blue"))
            .await
            .unwrap();
        let family = storage
            .create_family_with_students(
                "The New Family".to_string(),
                "INTERNAL".to_string(),
                &[student.id],
            )
            .await
            .unwrap();

        let students = storage.list_students().await.unwrap();
        assert_eq!(students[0].family_id, Some(family.id));
    }
}
