pub mod requests;
pub mod responses;

pub use requests::{CompleteSignupRequest, LoginRequest, SignupRequest, ValidateInviteRequest};
pub use responses::{LoginResponse, ValidateInviteResponse};
