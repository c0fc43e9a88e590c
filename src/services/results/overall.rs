use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use super::grading::weighted_percentage;
use super::report::{subject_marks, total_of};
use crate::errors::SchoolSystemError;
use crate::models::results::responses::{ExamBreakdown, OverallResultResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn get_overall_result(
    service: &ResultService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let scale = service.get_scale();

    let student = match storage.get_student_with_class(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found.",
            )));
        }
        Err(e) => return Ok(storage_error_response(&e, ErrorCode::StudentNotFound)),
    };
    let class_id = student.student.class_id;

    let loaded = async {
        let exams = storage.list_exams_by_class(class_id).await?;
        let subjects = storage.list_subjects_by_class(class_id).await?;
        let marks = storage.list_marks_by_student(student_id).await?;
        Ok::<_, SchoolSystemError>((exams, subjects, marks))
    }
    .await;
    let (exams, subjects, marks) = match loaded {
        Ok(data) => data,
        Err(e) => return Ok(storage_error_response(&e, ErrorCode::ExamNotFound)),
    };

    let breakdown: Vec<ExamBreakdown> = exams
        .into_iter()
        .map(|exam| {
            let total = total_of(&subject_marks(&subjects, &marks, student_id, exam.id));
            let summary = scale.summarize(total, subjects.len());
            ExamBreakdown { exam, summary }
        })
        .collect();

    let parts: Vec<(f64, f64)> = breakdown
        .iter()
        .map(|b| (b.exam.weight, b.summary.percentage))
        .collect();
    let (total_weight, weighted) = weighted_percentage(&parts);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        OverallResultResponse {
            student,
            exams: breakdown,
            total_weight,
            weighted_percentage: weighted,
            grade: scale.grade(weighted),
            status: scale.status(weighted),
        },
        "Overall result retrieved successfully",
    )))
}
