use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{AttendanceService, resolve_date};
use crate::models::attendance::entities::AttendanceStatus;
use crate::models::attendance::requests::SaveAttendanceRequest;
use crate::models::attendance::responses::AttendanceSaveResponse;
use crate::models::students::entities::Student;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{require_class, storage_error_response};

/// 名单内的学生出勤，其余缺勤
pub(crate) fn mark_statuses(students: &[Student], present: &[i64]) -> Vec<(i64, AttendanceStatus)> {
    let present: HashSet<i64> = present.iter().copied().collect();
    students
        .iter()
        .map(|s| {
            let status = if present.contains(&s.id) {
                AttendanceStatus::Present
            } else {
                AttendanceStatus::Absent
            };
            (s.id, status)
        })
        .collect()
}

pub async fn save_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    class_id: i64,
    attendance_data: SaveAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let date = match resolve_date(attendance_data.date.as_deref()) {
        Ok(date) => date,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);
    let class = match require_class(&storage, class_id).await {
        Ok(class) => class,
        Err(resp) => return Ok(resp),
    };

    let students = match storage.list_students_by_class(class_id).await {
        Ok(students) => students,
        Err(e) => return Ok(storage_error_response(&e, ErrorCode::StudentNotFound)),
    };

    let statuses = mark_statuses(&students, &attendance_data.present);
    let present = statuses
        .iter()
        .filter(|(_, s)| *s == AttendanceStatus::Present)
        .count();
    let absent = statuses.len() - present;

    match storage.save_attendance(class_id, &date, statuses).await {
        Ok(session) => {
            info!(
                "Attendance for {} on {} saved: {} present, {} absent",
                class.label(),
                session.date,
                present,
                absent
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AttendanceSaveResponse {
                    date: session.date,
                    present,
                    absent,
                },
                "Attendance saved.",
            )))
        }
        Err(e) => Ok(storage_error_response(&e, ErrorCode::ClassNotFound)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlisted_students_are_absent() {
        let now = chrono::Utc::now();
        let students: Vec<Student> = (1..=3)
            .map(|id| Student {
                id,
                name: format!("S{id}"),
                roll_no: id.to_string(),
                class_id: 1,
                created_at: now,
                updated_at: now,
            })
            .collect();
        // 99 不在班级中，忽略
        let statuses = mark_statuses(&students, &[2, 99]);
        assert_eq!(
            statuses,
            vec![
                (1, AttendanceStatus::Absent),
                (2, AttendanceStatus::Present),
                (3, AttendanceStatus::Absent),
            ]
        );
    }
}
