use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::attendance::requests::{AttendanceQuery, SaveAttendanceRequest};
use crate::services::AttendanceService;
use crate::utils::SafeClassIdI64;

static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn get_attendance_sheet(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    query: web::Query<AttendanceQuery>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .get_sheet(&req, class_id.0, query.into_inner())
        .await
}

pub async fn save_attendance(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    attendance_data: web::Json<SaveAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .save_attendance(&req, class_id.0, attendance_data.into_inner())
        .await
}

pub async fn get_attendance_summary(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.get_summary(&req, class_id.0).await
}

/// /api/v1/classes/{class_id}/attendance
pub fn configure_class_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{class_id}/attendance")
            .route(web::get().to(get_attendance_sheet))
            .route(web::post().to(save_attendance)),
    )
    .route(
        "/{class_id}/attendance/summary",
        web::get().to(get_attendance_summary),
    );
}
