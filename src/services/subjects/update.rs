use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::subjects::requests::SubjectRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, storage_error_response};

pub async fn update_subject(
    service: &SubjectService,
    request: &HttpRequest,
    subject_id: i64,
    subject_data: SubjectRequest,
) -> ActixResult<HttpResponse> {
    let Some(subject_name) = subject_data.normalized() else {
        return Ok(bad_request(ErrorCode::BadRequest, "Subject name is required."));
    };

    let storage = service.get_storage(request);
    match storage.update_subject(subject_id, &subject_name).await {
        Ok(Some(subject)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(subject, "Subject updated.")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubjectNotFound,
            "Subject not found.",
        ))),
        Err(e) => Ok(storage_error_response(&e, ErrorCode::SubjectNotFound)),
    }
}
