use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::students::responses::StudentListResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{require_class, storage_error_response};

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = require_class(&storage, class_id).await {
        return Ok(resp);
    }

    match storage.list_students_by_class(class_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentListResponse { items },
            "Student list retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(&e, ErrorCode::StudentNotFound)),
    }
}
