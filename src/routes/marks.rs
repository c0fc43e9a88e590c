use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::marks::requests::SaveMarksRequest;
use crate::services::MarkService;
use crate::utils::{SafeClassIdI64, SafeExamIdI64, SafeStudentIdI64};

static MARK_SERVICE: Lazy<MarkService> = Lazy::new(MarkService::new_lazy);

pub async fn get_marks_sheet(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    exam_id: SafeExamIdI64,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE.get_sheet(&req, class_id.0, exam_id.0).await
}

pub async fn save_marks(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    exam_id: SafeExamIdI64,
    student_id: SafeStudentIdI64,
    marks_data: web::Json<SaveMarksRequest>,
) -> ActixResult<HttpResponse> {
    MARK_SERVICE
        .save_marks(&req, class_id.0, exam_id.0, student_id.0, marks_data.into_inner())
        .await
}

/// /api/v1/classes/{class_id}/exams/{exam_id}/marks
pub fn configure_class_marks_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/{class_id}/exams/{exam_id}/marks",
        web::get().to(get_marks_sheet),
    )
    .route(
        "/{class_id}/exams/{exam_id}/marks/{student_id}",
        web::put().to(save_marks),
    );
}
