use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::attendance::entities::{AttendanceRecord, AttendanceStatus};
use crate::models::attendance::responses::{AttendanceSummaryResponse, AttendanceSummaryRow};
use crate::models::students::entities::Student;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{require_class, storage_error_response};

pub(crate) fn summary_rows(
    students: Vec<Student>,
    records: &[AttendanceRecord],
    total_sessions: u64,
) -> Vec<AttendanceSummaryRow> {
    let mut present_days: HashMap<i64, u64> = HashMap::new();
    for record in records {
        if record.status == AttendanceStatus::Present {
            *present_days.entry(record.student_id).or_default() += 1;
        }
    }

    students
        .into_iter()
        .map(|student| {
            let present = present_days.get(&student.id).copied().unwrap_or(0);
            let percentage = if total_sessions > 0 {
                present as f64 / total_sessions as f64 * 100.0
            } else {
                0.0
            };
            AttendanceSummaryRow {
                student_id: student.id,
                roll_no: student.roll_no,
                name: student.name,
                present_days: present,
                total_sessions,
                percentage,
            }
        })
        .collect()
}

pub async fn get_attendance_summary(
    service: &AttendanceService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let class = match require_class(&storage, class_id).await {
        Ok(class) => class,
        Err(resp) => return Ok(resp),
    };

    let loaded = async {
        let students = storage.list_students_by_class(class_id).await?;
        let sessions = storage.list_attendance_sessions_by_class(class_id).await?;
        let records = storage.list_attendance_records_by_class(class_id).await?;
        Ok::<_, crate::errors::SchoolSystemError>((students, sessions, records))
    }
    .await;

    let (students, sessions, records) = match loaded {
        Ok(data) => data,
        Err(e) => return Ok(storage_error_response(&e, ErrorCode::ClassNotFound)),
    };

    let total_sessions = sessions.len() as u64;
    let rows = summary_rows(students, &records, total_sessions);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AttendanceSummaryResponse {
            class,
            total_sessions,
            rows,
        },
        "Attendance summary retrieved successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_over_class_sessions() {
        let now = chrono::Utc::now();
        let students = vec![Student {
            id: 4,
            name: "Ravi".into(),
            roll_no: "12".into(),
            class_id: 1,
            created_at: now,
            updated_at: now,
        }];
        let records = vec![
            AttendanceRecord {
                session_id: 1,
                student_id: 4,
                status: AttendanceStatus::Present,
            },
            AttendanceRecord {
                session_id: 2,
                student_id: 4,
                status: AttendanceStatus::Absent,
            },
            AttendanceRecord {
                session_id: 3,
                student_id: 4,
                status: AttendanceStatus::Present,
            },
        ];
        let rows = summary_rows(students.clone(), &records, 4);
        assert_eq!(rows[0].present_days, 2);
        assert_eq!(rows[0].percentage, 50.0);

        let rows = summary_rows(students, &[], 0);
        assert_eq!(rows[0].percentage, 0.0);
    }
}
