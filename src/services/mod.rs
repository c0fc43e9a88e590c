pub mod attendance;
pub mod auth;
pub mod classes;
pub mod dashboard;
pub mod exams;
pub mod fees;
pub mod marks;
pub mod results;
pub mod students;
pub mod subjects;
pub mod users;

use actix_web::{HttpRequest, HttpResponse};
use std::sync::Arc;
use tracing::error;

use crate::errors::SchoolSystemError;
use crate::models::{
    ApiResponse, ErrorCode, classes::entities::Class, exams::entities::Exam,
    students::entities::Student,
};
use crate::storage::Storage;

pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use dashboard::DashboardService;
pub use exams::ExamService;
pub use fees::FeeService;
pub use marks::MarkService;
pub use results::ResultService;
pub use students::StudentService;
pub use subjects::SubjectService;
pub use users::UserService;

/// 从 app data 中取存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}

/// 存储层错误转为 HTTP 响应
///
/// `not_found` 为资源不存在时使用的业务码。
pub(crate) fn storage_error_response(
    err: &SchoolSystemError,
    not_found: ErrorCode,
) -> HttpResponse {
    match err {
        SchoolSystemError::NotFound(msg) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(not_found, msg.as_str()))
        }
        SchoolSystemError::Conflict(msg) => HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::Conflict, msg.as_str())),
        SchoolSystemError::Validation(msg) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg.as_str())),
        other => {
            error!("{}", other.format_simple());
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Internal server error",
            ))
        }
    }
}

pub(crate) fn bad_request(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

pub(crate) async fn require_class(
    storage: &Arc<dyn Storage>,
    class_id: i64,
) -> Result<Class, HttpResponse> {
    match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => Ok(class),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found.",
        ))),
        Err(e) => Err(storage_error_response(&e, ErrorCode::ClassNotFound)),
    }
}

pub(crate) async fn require_student(
    storage: &Arc<dyn Storage>,
    student_id: i64,
) -> Result<Student, HttpResponse> {
    match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => Ok(student),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found.",
        ))),
        Err(e) => Err(storage_error_response(&e, ErrorCode::StudentNotFound)),
    }
}

pub(crate) async fn require_exam(
    storage: &Arc<dyn Storage>,
    exam_id: i64,
) -> Result<Exam, HttpResponse> {
    match storage.get_exam_by_id(exam_id).await {
        Ok(Some(exam)) => Ok(exam),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "Exam not found.",
        ))),
        Err(e) => Err(storage_error_response(&e, ErrorCode::ExamNotFound)),
    }
}

/// 考试必须属于该班级
pub(crate) async fn require_class_exam(
    storage: &Arc<dyn Storage>,
    class_id: i64,
    exam_id: i64,
) -> Result<Exam, HttpResponse> {
    let exam = require_exam(storage, exam_id).await?;
    if exam.class_id != class_id {
        return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "Exam not found for this class.",
        )));
    }
    Ok(exam)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_storage_error_status_mapping() {
        let cases = [
            (SchoolSystemError::not_found("x"), StatusCode::NOT_FOUND),
            (SchoolSystemError::conflict("x"), StatusCode::CONFLICT),
            (SchoolSystemError::validation("x"), StatusCode::BAD_REQUEST),
            (
                SchoolSystemError::database_operation("x"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(
                storage_error_response(&err, ErrorCode::NotFound).status(),
                status
            );
        }
    }
}
