use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("Invalid username regex"));

/// 日期统一格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：3 <= x <= 32
    if username.len() < 3 || username.len() > 32 {
        return Err("Username length must be between 3 and 32 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线、点或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, dots, underscores or hyphens");
    }
    Ok(())
}

/// 验证密码是否符合安全策略
///
/// - 长度 8 到 128 个字符
/// - 不能是常见弱密码
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    let length = password.chars().count();
    if length < 8 {
        return Err("Password must be at least 8 characters long");
    }
    if length > 128 {
        return Err("Password must be at most 128 characters long");
    }

    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "school123",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        return Err("Password is too common, please choose a stronger password");
    }

    Ok(())
}

/// 解析 YYYY-MM-DD 日期，返回规范化后的字符串
pub fn parse_date(input: &str) -> Option<String> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .ok()
        .map(|d| d.format(DATE_FORMAT).to_string())
}

/// 今天（本地时区）
pub fn today() -> String {
    chrono::Local::now().date_naive().format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        assert!(validate_username("admin").is_ok());
        assert!(validate_username("t.sharma").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("bad name").is_err());
    }

    #[test]
    fn test_short_password() {
        assert_eq!(
            validate_password("Ab1"),
            Err("Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_common_password() {
        assert_eq!(
            validate_password("Admin123"),
            Err("Password is too common, please choose a stronger password")
        );
        assert!(validate_password("correct horse battery").is_ok());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-03-07"), Some("2025-03-07".to_string()));
        assert_eq!(parse_date(" 2025-03-07 "), Some("2025-03-07".to_string()));
        assert_eq!(parse_date("2025-02-30"), None);
        assert_eq!(parse_date("07/03/2025"), None);
    }

    #[test]
    fn test_today_is_parseable() {
        assert!(parse_date(&today()).is_some());
    }
}
