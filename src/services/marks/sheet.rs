use std::collections::{BTreeMap, HashMap};

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MarkService;
use crate::models::marks::responses::{MarksSheetResponse, MarksSheetRow};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{require_class, require_class_exam, storage_error_response};

pub async fn get_marks_sheet(
    service: &MarkService,
    request: &HttpRequest,
    class_id: i64,
    exam_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let class = match require_class(&storage, class_id).await {
        Ok(class) => class,
        Err(resp) => return Ok(resp),
    };
    let exam = match require_class_exam(&storage, class_id, exam_id).await {
        Ok(exam) => exam,
        Err(resp) => return Ok(resp),
    };

    let data = async {
        let students = storage.list_students_by_class(class_id).await?;
        let subjects = storage.list_subjects_by_class(class_id).await?;
        let marks = storage.list_marks_by_exam(exam_id).await?;
        Ok::<_, crate::errors::SchoolSystemError>((students, subjects, marks))
    }
    .await;

    let (students, subjects, marks) = match data {
        Ok(data) => data,
        Err(e) => return Ok(storage_error_response(&e, ErrorCode::ExamNotFound)),
    };

    let recorded: HashMap<(i64, i64), f64> = marks
        .into_iter()
        .map(|m| ((m.student_id, m.subject_id), m.marks_obtained))
        .collect();

    let rows = students
        .into_iter()
        .map(|student| {
            let marks: BTreeMap<i64, f64> = subjects
                .iter()
                .map(|subject| {
                    let value = recorded
                        .get(&(student.id, subject.id))
                        .copied()
                        .unwrap_or(0.0);
                    (subject.id, value)
                })
                .collect();
            MarksSheetRow { student, marks }
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MarksSheetResponse {
            class,
            exam,
            subjects,
            rows,
        },
        "Marks sheet retrieved successfully",
    )))
}
