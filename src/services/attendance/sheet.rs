use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{AttendanceService, resolve_date};
use crate::models::attendance::entities::AttendanceStatus;
use crate::models::attendance::requests::AttendanceQuery;
use crate::models::attendance::responses::{AttendanceSheetResponse, AttendanceSheetRow};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{require_class, storage_error_response};

pub async fn get_attendance_sheet(
    service: &AttendanceService,
    request: &HttpRequest,
    class_id: i64,
    query: AttendanceQuery,
) -> ActixResult<HttpResponse> {
    let date = match resolve_date(query.date.as_deref()) {
        Ok(date) => date,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);
    let class = match require_class(&storage, class_id).await {
        Ok(class) => class,
        Err(resp) => return Ok(resp),
    };

    let loaded = async {
        let students = storage.list_students_by_class(class_id).await?;
        let session = storage.get_attendance_session(class_id, &date).await?;
        let records = match &session {
            Some(session) => storage.list_attendance_records(session.id).await?,
            None => Vec::new(),
        };
        Ok::<_, crate::errors::SchoolSystemError>((students, session.is_some(), records))
    }
    .await;

    let (students, recorded, records) = match loaded {
        Ok(data) => data,
        Err(e) => return Ok(storage_error_response(&e, ErrorCode::ClassNotFound)),
    };

    let statuses: HashMap<i64, AttendanceStatus> = records
        .into_iter()
        .map(|r| (r.student_id, r.status))
        .collect();

    // 没有记录的学生默认出勤
    let rows = students
        .into_iter()
        .map(|student| {
            let status = statuses
                .get(&student.id)
                .copied()
                .unwrap_or(AttendanceStatus::Present);
            AttendanceSheetRow { student, status }
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AttendanceSheetResponse {
            class,
            date,
            recorded,
            rows,
        },
        "Attendance sheet retrieved successfully",
    )))
}
