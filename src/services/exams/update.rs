use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ExamService, INVALID_WEIGHT};
use crate::models::exams::requests::{UpdateExamRequest, is_valid_weight};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, storage_error_response};

pub async fn update_exam(
    service: &ExamService,
    request: &HttpRequest,
    exam_id: i64,
    exam_data: UpdateExamRequest,
) -> ActixResult<HttpResponse> {
    if exam_data
        .name
        .as_deref()
        .is_some_and(|name| name.trim().is_empty())
    {
        return Ok(bad_request(ErrorCode::BadRequest, "Exam name is required."));
    }
    if exam_data.weight.is_some_and(|w| !is_valid_weight(w)) {
        return Ok(bad_request(ErrorCode::BadRequest, INVALID_WEIGHT));
    }

    let storage = service.get_storage(request);
    match storage.update_exam(exam_id, exam_data).await {
        Ok(Some(exam)) => Ok(HttpResponse::Ok().json(ApiResponse::success(exam, "Exam updated."))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "Exam not found.",
        ))),
        Err(e) => Ok(storage_error_response(&e, ErrorCode::ExamNotFound)),
    }
}
