//! 班级成绩 CSV 导出

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ResultService;
use super::report::class_results;
use crate::models::results::{requests::ResultQuery, responses::ClassResultsResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::bad_request;
use crate::utils::export::{attachment_response, write_csv};

/// 生成成绩表 CSV
pub(crate) fn class_results_csv(results: &ClassResultsResponse) -> crate::errors::Result<Vec<u8>> {
    let header = [
        "Roll No".to_string(),
        "Name".to_string(),
        "Total".to_string(),
        format!("Max ({})", results.max_total),
        "Percentage".to_string(),
        "Grade".to_string(),
        "Status".to_string(),
    ];
    let rows = results.rows.iter().map(|row| {
        vec![
            row.roll_no.clone(),
            row.name.clone(),
            row.total.to_string(),
            results.max_total.to_string(),
            format!("{:.2}", row.percentage),
            row.grade.to_string(),
            row.status.to_string(),
        ]
    });
    write_csv(&header, rows)
}

pub async fn export_class_results_csv(
    service: &ResultService,
    request: &HttpRequest,
    class_id: i64,
    query: ResultQuery,
) -> ActixResult<HttpResponse> {
    let Some(exam_id) = query.exam_id else {
        return Ok(bad_request(ErrorCode::BadRequest, "Exam required for CSV export."));
    };

    let storage = service.get_storage(request);
    let scale = service.get_scale();

    let results = match class_results(&storage, &scale, class_id, Some(exam_id)).await {
        Ok(results) => results,
        Err(resp) => return Ok(resp),
    };

    match class_results_csv(&results) {
        Ok(body) => Ok(attachment_response(
            "text/csv; charset=utf-8",
            &format!("class_{class_id}_exam_{exam_id}_results.csv"),
            body,
        )),
        Err(e) => {
            error!("CSV export failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ExportFailed,
                    "CSV export failed",
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::classes::entities::Class;
    use crate::models::exams::entities::Exam;
    use crate::models::results::entities::{Grade, ResultStatus};
    use crate::models::results::responses::ClassResultRow;

    #[test]
    fn test_csv_layout() {
        let now = chrono::Utc::now();
        let results = ClassResultsResponse {
            class: Class {
                id: 1,
                class_name: "Grade 5".into(),
                section: "A".into(),
                created_at: now,
                updated_at: now,
            },
            exam: Exam {
                id: 2,
                class_id: 1,
                name: "Midterm".into(),
                exam_type: None,
                weight: 1.0,
                created_at: now,
            },
            exams: vec![],
            subject_count: 3,
            max_total: 300.0,
            rows: vec![ClassResultRow {
                student_id: 9,
                roll_no: "07".into(),
                name: "Asha".into(),
                total: 200.5,
                percentage: 200.5 / 3.0,
                grade: Grade::B,
                status: ResultStatus::Pass,
            }],
        };

        let text = String::from_utf8(class_results_csv(&results).unwrap()).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Roll No,Name,Total,Max (300),Percentage,Grade,Status")
        );
        assert_eq!(lines.next(), Some("07,Asha,200.5,300,66.83,B,PASS"));
    }
}
