pub mod random_code;

pub use random_code::{
    generate_daily_code, generate_invite_code, generate_numeric_code, generate_pickup_id,
};
