//! 成绩单数据组装，JSON、CSV 与 PDF 共用

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use actix_web::HttpResponse;

use super::grading::GradingScale;
use crate::errors::SchoolSystemError;
use crate::models::exams::entities::Exam;
use crate::models::marks::entities::Mark;
use crate::models::results::entities::{ResultSummary, SubjectMark};
use crate::models::results::responses::{ClassResultRow, ClassResultsResponse};
use crate::models::students::entities::{Student, StudentWithClass};
use crate::models::subjects::entities::Subject;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, require_class, storage_error_response};
use crate::storage::Storage;

pub(crate) struct StudentReport {
    pub student: StudentWithClass,
    pub exam: Exam,
    pub exams: Vec<Exam>,
    pub subjects: Vec<SubjectMark>,
    pub summary: ResultSummary,
}

/// 指定考试必须属于该班级；未指定时取最近一次
fn pick_exam(exams: &[Exam], exam_id: Option<i64>, no_exams: &str) -> Result<Exam, HttpResponse> {
    match exam_id {
        Some(id) => exams.iter().find(|e| e.id == id).cloned().ok_or_else(|| {
            HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ExamNotFound,
                "Exam not found for this class.",
            ))
        }),
        None => exams
            .first()
            .cloned()
            .ok_or_else(|| bad_request(ErrorCode::NoExamsDefined, no_exams)),
    }
}

/// 学生在某次考试中的各科成绩，按科目顺序，未录入记 0
pub(crate) fn subject_marks(
    subjects: &[Subject],
    marks: &[Mark],
    student_id: i64,
    exam_id: i64,
) -> Vec<SubjectMark> {
    let recorded: HashMap<i64, f64> = marks
        .iter()
        .filter(|m| m.student_id == student_id && m.exam_id == exam_id)
        .map(|m| (m.subject_id, m.marks_obtained))
        .collect();

    subjects
        .iter()
        .map(|subject| SubjectMark {
            subject_id: subject.id,
            subject_name: subject.subject_name.clone(),
            marks: recorded.get(&subject.id).copied().unwrap_or(0.0),
        })
        .collect()
}

pub(crate) fn total_of(subjects: &[SubjectMark]) -> f64 {
    subjects.iter().map(|s| s.marks).sum()
}

pub(crate) async fn student_report(
    storage: &Arc<dyn Storage>,
    scale: &GradingScale,
    student_id: i64,
    exam_id: Option<i64>,
) -> Result<StudentReport, HttpResponse> {
    let student = match storage.get_student_with_class(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found.",
            )));
        }
        Err(e) => return Err(storage_error_response(&e, ErrorCode::StudentNotFound)),
    };
    let class_id = student.student.class_id;

    let exams = storage
        .list_exams_by_class(class_id)
        .await
        .map_err(|e| storage_error_response(&e, ErrorCode::ExamNotFound))?;
    let exam = pick_exam(&exams, exam_id, "No exams for this class.")?;

    let loaded = async {
        let subjects = storage.list_subjects_by_class(class_id).await?;
        let marks = storage.list_marks_by_student(student_id).await?;
        Ok::<_, SchoolSystemError>((subjects, marks))
    }
    .await;
    let (subjects, marks) =
        loaded.map_err(|e| storage_error_response(&e, ErrorCode::SubjectNotFound))?;

    let subject_marks = subject_marks(&subjects, &marks, student_id, exam.id);
    let summary = scale.summarize(total_of(&subject_marks), subjects.len());

    Ok(StudentReport {
        student,
        exam,
        exams,
        subjects: subject_marks,
        summary,
    })
}

/// 总分降序，同分按学号
pub(crate) fn rank_rows(rows: &mut [ClassResultRow]) {
    rows.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.roll_no.cmp(&b.roll_no))
    });
}

pub(crate) fn class_rows(
    scale: &GradingScale,
    students: &[Student],
    subjects: &[Subject],
    marks: &[Mark],
    exam_id: i64,
) -> Vec<ClassResultRow> {
    let mut rows: Vec<ClassResultRow> = students
        .iter()
        .map(|student| {
            let total = total_of(&subject_marks(subjects, marks, student.id, exam_id));
            let summary = scale.summarize(total, subjects.len());
            ClassResultRow {
                student_id: student.id,
                roll_no: student.roll_no.clone(),
                name: student.name.clone(),
                total,
                percentage: summary.percentage,
                grade: summary.grade,
                status: summary.status,
            }
        })
        .collect();
    rank_rows(&mut rows);
    rows
}

pub(crate) async fn class_results(
    storage: &Arc<dyn Storage>,
    scale: &GradingScale,
    class_id: i64,
    exam_id: Option<i64>,
) -> Result<ClassResultsResponse, HttpResponse> {
    let class = require_class(storage, class_id).await?;

    let exams = storage
        .list_exams_by_class(class_id)
        .await
        .map_err(|e| storage_error_response(&e, ErrorCode::ExamNotFound))?;
    let exam = pick_exam(&exams, exam_id, "No exams defined for this class.")?;

    let loaded = async {
        let students = storage.list_students_by_class(class_id).await?;
        let subjects = storage.list_subjects_by_class(class_id).await?;
        let marks = storage.list_marks_by_exam(exam.id).await?;
        Ok::<_, SchoolSystemError>((students, subjects, marks))
    }
    .await;
    let (students, subjects, marks) =
        loaded.map_err(|e| storage_error_response(&e, ErrorCode::ExamNotFound))?;

    let rows = class_rows(scale, &students, &subjects, &marks, exam.id);

    Ok(ClassResultsResponse {
        class,
        exam,
        exams,
        subject_count: subjects.len(),
        max_total: scale.max_total(subjects.len()),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::results::entities::{Grade, ResultStatus};

    fn subject(id: i64, name: &str) -> Subject {
        Subject {
            id,
            class_id: 1,
            subject_name: name.to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    fn student(id: i64, roll_no: &str) -> Student {
        Student {
            id,
            name: format!("Student {id}"),
            roll_no: roll_no.to_string(),
            class_id: 1,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn mark(student_id: i64, subject_id: i64, exam_id: i64, value: f64) -> Mark {
        Mark {
            student_id,
            subject_id,
            exam_id,
            marks_obtained: value,
        }
    }

    #[test]
    fn test_subject_marks_ignore_other_exams() {
        let subjects = vec![subject(1, "English"), subject(2, "Math")];
        let marks = vec![mark(5, 1, 10, 70.0), mark(5, 2, 11, 99.0)];
        let rows = subject_marks(&subjects, &marks, 5, 10);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].marks, 70.0);
        assert_eq!(rows[1].marks, 0.0);
        assert_eq!(total_of(&rows), 70.0);
    }

    #[test]
    fn test_class_rows_ranked_by_total_then_roll() {
        let scale = GradingScale::default();
        let subjects = vec![subject(1, "English"), subject(2, "Math")];
        let students = vec![student(1, "03"), student(2, "01"), student(3, "02")];
        let marks = vec![
            mark(1, 1, 7, 40.0),
            mark(1, 2, 7, 40.0),
            mark(2, 1, 7, 95.0),
            mark(2, 2, 7, 90.0),
            mark(3, 1, 7, 80.0),
        ];

        let rows = class_rows(&scale, &students, &subjects, &marks, 7);
        let order: Vec<i64> = rows.iter().map(|r| r.student_id).collect();
        // 学生 1 与 3 同为 80 分，按学号 02 < 03
        assert_eq!(order, vec![2, 3, 1]);
        assert_eq!(rows[0].grade, Grade::APlus);
        assert_eq!(rows[0].percentage, 92.5);
        assert_eq!(rows[2].status, ResultStatus::Pass);
    }
}
