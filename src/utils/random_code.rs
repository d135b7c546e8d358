//! 随机码生成
//!
//! 唯一性不在这里保证，由存储层在写锁内查重并重试。

use rand::Rng;

/// 邀请码字母表：去除 0/O、1/I 等易混淆字符
const INVITE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// 邀请码长度
pub const INVITE_CODE_LEN: usize = 6;

/// 生成指定位数的数字码（首位可为 0 以外的任意数字）
pub fn generate_numeric_code(digits: u32) -> String {
    let low = 10_u64.pow(digits - 1);
    let high = 10_u64.pow(digits);
    let mut rng = rand::rng();
    rng.random_range(low..high).to_string()
}

/// 生成 6 位数字接送码 / 家庭注册码
pub fn generate_daily_code() -> String {
    generate_numeric_code(6)
}

/// 生成 4 位数字接送记录ID
pub fn generate_pickup_id() -> String {
    generate_numeric_code(4)
}

/// 生成 6 位邀请码
pub fn generate_invite_code() -> String {
    let mut rng = rand::rng();
    (0..INVITE_CODE_LEN)
        .map(|_| {
            let idx = rng.random_range(0..INVITE_ALPHABET.len());
            INVITE_ALPHABET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_code_length() {
        for _ in 0..100 {
            assert_eq!(generate_daily_code().len(), 6);
            assert_eq!(generate_pickup_id().len(), 4);
        }
    }

    #[test]
    fn test_numeric_code_digits_only() {
        let code = generate_daily_code();
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_invite_code_charset() {
        for _ in 0..100 {
            let code = generate_invite_code();
            assert_eq!(code.len(), INVITE_CODE_LEN);
            assert!(
                code.bytes().all(|b| INVITE_ALPHABET.contains(&b)),
                "unexpected character in invite code {code}"
            );
        }
    }
}
