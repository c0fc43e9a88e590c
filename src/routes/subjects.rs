use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::admin_only;
use crate::middlewares;
use crate::models::subjects::requests::SubjectRequest;
use crate::services::SubjectService;
use crate::utils::{SafeClassIdI64, SafeIDI64};

static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

pub async fn list_subjects(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.list_subjects(&req, class_id.0).await
}

pub async fn create_subject(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    subject_data: web::Json<SubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .create_subject(&req, class_id.0, subject_data.into_inner())
        .await
}

pub async fn update_subject(
    req: HttpRequest,
    subject_id: SafeIDI64,
    subject_data: web::Json<SubjectRequest>,
) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE
        .update_subject(&req, subject_id.0, subject_data.into_inner())
        .await
}

pub async fn delete_subject(req: HttpRequest, subject_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.delete_subject(&req, subject_id.0).await
}

/// /api/v1/classes/{class_id}/subjects
pub fn configure_class_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{class_id}/subjects")
            .route(web::get().to(list_subjects))
            .route(web::post().to(create_subject).wrap(admin_only())),
    );
}

pub fn configure_subject_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/subjects")
            .wrap(admin_only())
            .wrap(middlewares::RequireJWT)
            .route("/{id}", web::put().to(update_subject))
            .route("/{id}", web::delete().to(delete_subject)),
    );
}
