use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::MarkService;
use crate::config::AppConfig;
use crate::models::marks::{requests::SaveMarksRequest, responses::SaveMarksResponse};
use crate::models::subjects::entities::Subject;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{
    bad_request, require_class, require_class_exam, require_student, storage_error_response,
};

/// 按科目展开待保存的成绩，未提交的科目记 0
///
/// 分数越界或科目不属于该班级时返回错误提示。
pub(crate) fn expand_marks(
    subjects: &[Subject],
    submitted: &SaveMarksRequest,
    max_marks: f64,
) -> Result<Vec<(i64, f64)>, String> {
    if let Some(unknown) = submitted
        .marks
        .keys()
        .find(|id| !subjects.iter().any(|s| s.id == **id))
    {
        return Err(format!("Subject {unknown} does not belong to this class."));
    }

    subjects
        .iter()
        .map(|subject| {
            let value = submitted.marks.get(&subject.id).copied().unwrap_or(0.0);
            if value.is_finite() && (0.0..=max_marks).contains(&value) {
                Ok((subject.id, value))
            } else {
                Err(format!(
                    "Marks for {} must be between 0 and {}.",
                    subject.subject_name, max_marks
                ))
            }
        })
        .collect()
}

pub async fn save_marks(
    service: &MarkService,
    request: &HttpRequest,
    class_id: i64,
    exam_id: i64,
    student_id: i64,
    marks_data: SaveMarksRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = require_class(&storage, class_id).await {
        return Ok(resp);
    }
    if let Err(resp) = require_class_exam(&storage, class_id, exam_id).await {
        return Ok(resp);
    }
    let student = match require_student(&storage, student_id).await {
        Ok(student) if student.class_id == class_id => student,
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found in this class.",
            )));
        }
        Err(resp) => return Ok(resp),
    };

    let subjects = match storage.list_subjects_by_class(class_id).await {
        Ok(subjects) => subjects,
        Err(e) => return Ok(storage_error_response(&e, ErrorCode::SubjectNotFound)),
    };

    let max_marks = AppConfig::get().grading.max_marks_per_subject;
    let marks = match expand_marks(&subjects, &marks_data, max_marks) {
        Ok(marks) => marks,
        Err(msg) => return Ok(bad_request(ErrorCode::MarksOutOfRange, &msg)),
    };

    match storage.save_marks(student.id, exam_id, marks).await {
        Ok(saved) => {
            info!("Saved {} marks for student {} in exam {}", saved, student.id, exam_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SaveMarksResponse {
                    student_id: student.id,
                    exam_id,
                    saved,
                },
                "Marks saved.",
            )))
        }
        Err(e) => Ok(storage_error_response(&e, ErrorCode::ExamNotFound)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn subject(id: i64, name: &str) -> Subject {
        Subject {
            id,
            class_id: 1,
            subject_name: name.to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_missing_subject_defaults_to_zero() {
        let subjects = vec![subject(1, "Math"), subject(2, "Science")];
        let req = SaveMarksRequest {
            marks: HashMap::from([(1, 88.0)]),
        };
        let expanded = expand_marks(&subjects, &req, 100.0).unwrap();
        assert_eq!(expanded, vec![(1, 88.0), (2, 0.0)]);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let subjects = vec![subject(1, "Math")];
        let req = SaveMarksRequest {
            marks: HashMap::from([(1, 100.5)]),
        };
        assert!(expand_marks(&subjects, &req, 100.0).is_err());

        let req = SaveMarksRequest {
            marks: HashMap::from([(1, -1.0)]),
        };
        assert!(expand_marks(&subjects, &req, 100.0).is_err());
    }

    #[test]
    fn test_foreign_subject_rejected() {
        let subjects = vec![subject(1, "Math")];
        let req = SaveMarksRequest {
            marks: HashMap::from([(9, 50.0)]),
        };
        let err = expand_marks(&subjects, &req, 100.0).unwrap_err();
        assert!(err.contains("Subject 9"));
    }
}
