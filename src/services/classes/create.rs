use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::errors::SchoolSystemError;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, storage_error_response};

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    let Some((class_name, section)) = class_data.normalized() else {
        return Ok(bad_request(
            ErrorCode::BadRequest,
            "Class name and section are required.",
        ));
    };

    let storage = service.get_storage(request);
    match storage.create_class(&class_name, &section).await {
        Ok(class) => {
            info!("Class {} created", class.label());
            Ok(HttpResponse::Created().json(ApiResponse::success(class, "Class added.")))
        }
        Err(SchoolSystemError::Conflict(_)) => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ClassAlreadyExists,
                "Class with this name and section already exists.",
            )))
        }
        Err(e) => {
            error!("Class creation failed: {}", e);
            Ok(storage_error_response(&e, ErrorCode::ClassNotFound))
        }
    }
}
