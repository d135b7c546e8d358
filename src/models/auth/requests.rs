use serde::Deserialize;

// 所有 POST 请求体字段均可缺省：空请求体视为空对象，
// 处理逻辑自行面对 None（沿用原接口的宽松约定）。

// 用户登录请求
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    /// 邮箱
    pub email: Option<String>,
    /// 密码（明文比较）
    pub password: Option<String>,
}

// 家长自助注册请求（通过家庭注册码）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    #[serde(rename = "familyCode")]
    pub family_code: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

// 校验邀请码请求
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ValidateInviteRequest {
    pub code: Option<String>,
}

// 通过邀请码完成注册请求
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompleteSignupRequest {
    pub code: Option<String>,
    pub password: Option<String>,
}
