use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ROLL_NO_EXISTS, StudentService};
use crate::errors::SchoolSystemError;
use crate::models::students::requests::StudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, require_class, storage_error_response};

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    class_id: i64,
    student_data: StudentRequest,
) -> ActixResult<HttpResponse> {
    let Some((name, roll_no)) = student_data.normalized() else {
        return Ok(bad_request(
            ErrorCode::BadRequest,
            "Student name and roll number are required.",
        ));
    };

    let storage = service.get_storage(request);
    let class = match require_class(&storage, class_id).await {
        Ok(class) => class,
        Err(resp) => return Ok(resp),
    };

    match storage.create_student(class_id, &name, &roll_no).await {
        Ok(student) => {
            info!("Student {} ({}) added to {}", student.name, student.roll_no, class.label());
            Ok(HttpResponse::Created().json(ApiResponse::success(student, "Student added.")))
        }
        Err(SchoolSystemError::Conflict(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::RollNumberAlreadyExists, ROLL_NO_EXISTS),
        )),
        Err(e) => Ok(storage_error_response(&e, ErrorCode::ClassNotFound)),
    }
}
