use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ROLL_NO_EXISTS, StudentService};
use crate::errors::SchoolSystemError;
use crate::models::students::requests::StudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, storage_error_response};

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    student_data: StudentRequest,
) -> ActixResult<HttpResponse> {
    let Some((name, roll_no)) = student_data.normalized() else {
        return Ok(bad_request(
            ErrorCode::BadRequest,
            "Student name and roll number are required.",
        ));
    };

    let storage = service.get_storage(request);
    match storage.update_student(student_id, &name, &roll_no).await {
        Ok(Some(student)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(student, "Student updated.")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found.",
        ))),
        Err(SchoolSystemError::Conflict(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::RollNumberAlreadyExists, ROLL_NO_EXISTS),
        )),
        Err(e) => Ok(storage_error_response(&e, ErrorCode::StudentNotFound)),
    }
}
