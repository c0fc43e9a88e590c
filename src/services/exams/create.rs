use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ExamService, INVALID_WEIGHT};
use crate::models::exams::requests::{
    CreateExamRequest, DEFAULT_EXAM_WEIGHT, is_valid_weight, normalize_exam_type,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, require_class, storage_error_response};

pub async fn create_exam(
    service: &ExamService,
    request: &HttpRequest,
    class_id: i64,
    exam_data: CreateExamRequest,
) -> ActixResult<HttpResponse> {
    let name = exam_data.name.trim();
    if name.is_empty() {
        return Ok(bad_request(ErrorCode::BadRequest, "Exam name is required."));
    }

    let weight = exam_data.weight.unwrap_or(DEFAULT_EXAM_WEIGHT);
    if !is_valid_weight(weight) {
        return Ok(bad_request(ErrorCode::BadRequest, INVALID_WEIGHT));
    }

    let storage = service.get_storage(request);
    let class = match require_class(&storage, class_id).await {
        Ok(class) => class,
        Err(resp) => return Ok(resp),
    };

    let exam_type = normalize_exam_type(exam_data.exam_type.as_deref());
    match storage.create_exam(class_id, name, exam_type, weight).await {
        Ok(exam) => {
            info!("Exam {} (weight {}) created for {}", exam.name, exam.weight, class.label());
            Ok(HttpResponse::Created().json(ApiResponse::success(exam, "Exam created.")))
        }
        Err(e) => Ok(storage_error_response(&e, ErrorCode::ClassNotFound)),
    }
}
