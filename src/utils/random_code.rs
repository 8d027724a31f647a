use rand::Rng;

// 邀请码字符集：去掉了易混淆的 0/O/1/I/l
const INVITE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// 生成班级邀请码
pub fn generate_invite_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..INVITE_CHARSET.len());
            INVITE_CHARSET[idx] as char
        })
        .collect()
}

/// 生成随机密码（用于初始管理员账号）
pub fn generate_random_password(length: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_code_length_and_charset() {
        let code = generate_invite_code(8);
        assert_eq!(code.len(), 8);
        assert!(code.bytes().all(|b| INVITE_CHARSET.contains(&b)));
    }

    #[test]
    fn test_invite_codes_differ() {
        // 32^16 种组合，两次生成撞车基本不可能
        assert_ne!(generate_invite_code(16), generate_invite_code(16));
    }
}
