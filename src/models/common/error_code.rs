// 业务错误码
//
// 0 成功；1xxx 认证与通用请求错误；2xxx 用户；3xxx 班级；
// 4xxx 题目/作业/外部提交；5xxx 限时测试；6xxx 评测服务；9xxx 服务器内部。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    Unauthorized = 1001,
    AuthFailed = 1002,
    TokenExpired = 1003,
    Forbidden = 1004,
    RateLimitExceeded = 1005,

    UserNotFound = 2001,
    UserAlreadyExists = 2002,
    UserPermissionDenied = 2003,

    ClassNotFound = 3001,
    ClassAlreadyExists = 3002,
    ClassPermissionDenied = 3003,
    AlreadyClassMember = 3004,
    NotClassMember = 3005,
    InviteCodeInvalid = 3006,

    ProblemNotFound = 4001,
    ProblemAlreadyExists = 4002,
    AssignmentNotFound = 4003,
    SubmissionNotFound = 4004,
    SyncDisabled = 4005,

    TestNotFound = 5001,
    TestWindowClosed = 5002,
    SessionNotFound = 5003,
    SessionAlreadyStarted = 5004,
    SessionExpired = 5005,
    SessionFinished = 5006,
    TestProblemNotFound = 5007,

    JudgeNotFound = 6001,
    JudgeUnavailable = 6002,

    InternalServerError = 9000,
    NotFound = 9001,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values_are_stable() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 1001);
        assert_eq!(ErrorCode::ClassPermissionDenied as i32, 3003);
        assert_eq!(ErrorCode::SessionExpired as i32, 5005);
        assert_eq!(ErrorCode::JudgeUnavailable as i32, 6002);
    }
}
