use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use super::report::student_report;
use crate::models::ApiResponse;
use crate::models::results::{requests::ResultQuery, responses::StudentResultResponse};

pub async fn get_student_result(
    service: &ResultService,
    request: &HttpRequest,
    student_id: i64,
    query: ResultQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let scale = service.get_scale();

    let report = match student_report(&storage, &scale, student_id, query.exam_id).await {
        Ok(report) => report,
        Err(resp) => return Ok(resp),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        StudentResultResponse {
            student: report.student,
            exam: report.exam,
            exams: report.exams,
            subjects: report.subjects,
            summary: report.summary,
        },
        "Result retrieved successfully",
    )))
}
