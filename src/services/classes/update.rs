use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::errors::SchoolSystemError;
use crate::models::classes::requests::UpdateClassRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, storage_error_response};

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    update_data: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    let Some((class_name, section)) = update_data.normalized() else {
        return Ok(bad_request(
            ErrorCode::BadRequest,
            "Class name and section are required.",
        ));
    };

    let storage = service.get_storage(request);
    match storage.update_class(class_id, &class_name, &section).await {
        Ok(Some(class)) => {
            info!("Class {} updated to {}", class_id, class.label());
            Ok(HttpResponse::Ok().json(ApiResponse::success(class, "Class updated.")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found.",
        ))),
        Err(SchoolSystemError::Conflict(_)) => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ClassAlreadyExists,
                "Class with this name and section already exists.",
            )))
        }
        Err(e) => Ok(storage_error_response(&e, ErrorCode::ClassNotFound)),
    }
}
