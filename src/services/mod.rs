pub mod admin;
pub mod auth;
pub mod pickups;
pub mod students;

pub use admin::AdminService;
pub use auth::AuthService;
pub use pickups::PickupService;
pub use students::StudentService;

/// 默认家庭ID。
/// 本服务没有会话机制，家长相关端点一律解析到这个家庭（沿用原接口行为）。
pub(crate) const DEFAULT_FAMILY_ID: i64 = 1;
