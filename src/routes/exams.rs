use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::admin_only;
use crate::middlewares;
use crate::models::exams::requests::{CreateExamRequest, UpdateExamRequest};
use crate::services::ExamService;
use crate::utils::{SafeClassIdI64, SafeIDI64};

static EXAM_SERVICE: Lazy<ExamService> = Lazy::new(ExamService::new_lazy);

pub async fn list_exams(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_exams(&req, class_id.0).await
}

pub async fn create_exam(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    exam_data: web::Json<CreateExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .create_exam(&req, class_id.0, exam_data.into_inner())
        .await
}

pub async fn update_exam(
    req: HttpRequest,
    exam_id: SafeIDI64,
    exam_data: web::Json<UpdateExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .update_exam(&req, exam_id.0, exam_data.into_inner())
        .await
}

pub async fn delete_exam(req: HttpRequest, exam_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.delete_exam(&req, exam_id.0).await
}

/// /api/v1/classes/{class_id}/exams
pub fn configure_class_exam_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{class_id}/exams")
            .route(web::get().to(list_exams))
            .route(web::post().to(create_exam)),
    );
}

pub fn configure_exam_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/exams")
            .wrap(admin_only())
            .wrap(middlewares::RequireJWT)
            .route("/{id}", web::put().to(update_exam))
            .route("/{id}", web::delete().to(delete_exam)),
    );
}
