use std::sync::Arc;

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

use crate::errors::Result;

pub mod memory_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 学生管理方法
    // 创建学生（种子数据）
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 列出所有学生（插入顺序）
    async fn list_students(&self) -> Result<Vec<Student>>;
    // 按学年列出学生
    async fn list_students_by_year(&self, year: i32) -> Result<Vec<Student>>;
    // 按家庭列出学生
    async fn list_students_by_family(&self, family_id: i64) -> Result<Vec<Student>>;
    // 按ID集合列出学生
    async fn list_students_by_ids(&self, ids: &[i64]) -> Result<Vec<Student>>;

    /// 家庭管理方法
    // 创建家庭；code 为 None 时生成查重后的 6 位数字注册码
    async fn create_family(&self, name: String, code: Option<String>) -> Result<Family>;
    // 创建家庭并在同一次写锁内重新关联指定学生（邀请批量流程）
    async fn create_family_with_students(
        &self,
        name: String,
        code: String,
        student_ids: &[i64],
    ) -> Result<Family>;
    // 通过ID获取家庭
    async fn get_family_by_id(&self, family_id: i64) -> Result<Option<Family>>;
    // 通过注册码获取家庭
    async fn get_family_by_code(&self, code: &str) -> Result<Option<Family>>;
    // 通过注册码将学生关联到家庭；任一不存在返回 None
    async fn link_student_to_family_by_code(
        &self,
        family_code: &str,
        student_id: i64,
    ) -> Result<Option<Family>>;

    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过邮箱获取用户
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 用户总数
    async fn count_users(&self) -> Result<usize>;
    // 列出待审批用户
    async fn list_pending_users(&self) -> Result<Vec<User>>;
    // 审批用户；不存在返回 false
    async fn approve_user(&self, user_id: i64) -> Result<bool>;

    /// 接送码管理方法
    // 为家庭创建当日接送码（码在写锁内生成并查重）
    async fn create_daily_code(&self, family_id: i64, student_ids: Vec<i64>)
    -> Result<DailyCode>;
    // 通过码值精确查询
    async fn get_daily_code(&self, code: &str) -> Result<Option<DailyCode>>;

    /// 接送记录管理方法
    // 创建接送记录（4位ID在写锁内生成并查重）
    async fn create_pickup(&self, pickup: CreatePickupRequest) -> Result<Pickup>;
    // 列出所有接送记录
    async fn list_pickups(&self) -> Result<Vec<Pickup>>;

    /// 家长邀请管理方法
    // 创建邀请（邀请码在写锁内生成并查重）
    async fn create_parent_invite(
        &self,
        email: String,
        name: String,
        role: String,
        student_ids: Vec<i64>,
        family_id: Option<i64>,
    ) -> Result<ParentInvite>;
    // 通过邀请码查询
    async fn get_invite_by_code(&self, code: &str) -> Result<Option<ParentInvite>>;
    // 原子消费邀请：仅当邀请存在且未使用时标记 is_used 并返回邀请内容
    async fn consume_invite(&self, code: &str) -> Result<Option<ParentInvite>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = memory_storage::MemoryStorage::new();
    Ok(Arc::new(storage))
}
