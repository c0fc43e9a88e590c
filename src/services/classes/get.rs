use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::models::classes::responses::ClassDetailResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{require_class, storage_error_response};

pub async fn get_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let class = match require_class(&storage, class_id).await {
        Ok(class) => class,
        Err(resp) => return Ok(resp),
    };

    let detail = async {
        let subjects = storage.list_subjects_by_class(class_id).await?;
        let exams = storage.list_exams_by_class(class_id).await?;
        let students = storage.list_students_by_class(class_id).await?;
        Ok::<_, crate::errors::SchoolSystemError>((subjects, exams, students))
    }
    .await;

    match detail {
        Ok((subjects, exams, students)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ClassDetailResponse {
                class,
                subjects,
                exams,
                students,
            },
            "Class retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(&e, ErrorCode::ClassNotFound)),
    }
}
