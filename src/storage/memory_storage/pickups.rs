use super::MemoryStorage;
use crate::errors::Result;
use crate::models::pickups::{
    entities::{DailyCode, Pickup, PickupStatus},
    requests::CreatePickupRequest,
};
use crate::utils::{generate_daily_code, generate_pickup_id};

impl MemoryStorage {
    /// 创建当日接送码，码在写锁内生成并查重
    pub async fn create_daily_code_impl(
        &self,
        family_id: i64,
        student_ids: Vec<i64>,
    ) -> Result<DailyCode> {
        let mut db = self.inner.write().await;
        let code = loop {
            let candidate = generate_daily_code();
            if !db.daily_codes.iter().any(|c| c.code == candidate) {
                break candidate;
            }
        };
        let daily_code = DailyCode {
            code,
            family_id,
            student_ids,
            expires_at: chrono::Utc::now() + chrono::Duration::hours(24),
        };
        db.daily_codes.push(daily_code.clone());
        Ok(daily_code)
    }

    /// 通过码值精确查询（不校验过期时间）
    pub async fn get_daily_code_impl(&self, code: &str) -> Result<Option<DailyCode>> {
        let db = self.inner.read().await;
        Ok(db.daily_codes.iter().find(|c| c.code == code).cloned())
    }

    /// 创建接送记录，4位ID在写锁内生成并查重
    pub async fn create_pickup_impl(&self, req: CreatePickupRequest) -> Result<Pickup> {
        let mut db = self.inner.write().await;
        let id = loop {
            let candidate = generate_pickup_id();
            if !db.pickups.iter().any(|p| p.id == candidate) {
                break candidate;
            }
        };
        let pickup = Pickup {
            id,
            student_name: req.student_name,
            year: req.year,
            class_label: req.class_label,
            timestamp: chrono::Utc::now(),
            status: PickupStatus::Pending,
        };
        db.pickups.push(pickup.clone());
        Ok(pickup)
    }

    /// 列出所有接送记录
    pub async fn list_pickups_impl(&self) -> Result<Vec<Pickup>> {
        let db = self.inner.read().await;
        Ok(db.pickups.clone())
    }
}
