/// API 响应中的业务错误码，0 表示成功
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1009,
    RateLimitExceeded = 1029,

    // 认证与用户
    AuthFailed = 2000,
    UserNotFound = 2001,
    UserNameInvalid = 2002,
    UserPasswordInvalid = 2003,
    UserNameAlreadyExists = 2004,
    UserCreationFailed = 2005,
    CanNotDeleteCurrentUser = 2006,
    CanNotDeleteDefaultAdmin = 2007,

    // 班级与学生
    ClassNotFound = 3000,
    ClassAlreadyExists = 3001,
    ClassPromotionInvalid = 3002,
    SubjectNotFound = 3100,
    StudentNotFound = 3200,
    RollNumberAlreadyExists = 3201,
    SearchQueryEmpty = 3202,

    // 考试与成绩
    ExamNotFound = 3300,
    NoExamsDefined = 3301,
    MarksOutOfRange = 3400,

    // 考勤
    AttendanceDateInvalid = 3500,

    // 收费
    FeeNotFound = 3600,
    FeeItemInvalid = 3601,
    PaymentInvalid = 3602,

    // 服务器错误
    InternalServerError = 5000,
    ExportFailed = 5001,
    PdfUnavailable = 5002,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_zero() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::NotFound as i32, 1004);
        assert_eq!(ErrorCode::PdfUnavailable as i32, 5002);
    }
}
