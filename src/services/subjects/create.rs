use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubjectService;
use crate::models::subjects::requests::SubjectRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, require_class, storage_error_response};

pub async fn create_subject(
    service: &SubjectService,
    request: &HttpRequest,
    class_id: i64,
    subject_data: SubjectRequest,
) -> ActixResult<HttpResponse> {
    let Some(subject_name) = subject_data.normalized() else {
        return Ok(bad_request(ErrorCode::BadRequest, "Subject name is required."));
    };

    let storage = service.get_storage(request);
    let class = match require_class(&storage, class_id).await {
        Ok(class) => class,
        Err(resp) => return Ok(resp),
    };

    match storage.create_subject(class_id, &subject_name).await {
        Ok(subject) => {
            info!("Subject {} added to {}", subject.subject_name, class.label());
            Ok(HttpResponse::Created().json(ApiResponse::success(subject, "Subject added.")))
        }
        Err(e) => Ok(storage_error_response(&e, ErrorCode::ClassNotFound)),
    }
}
