pub mod save;
pub mod sheet;
pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ErrorCode;
use crate::models::attendance::requests::{AttendanceQuery, SaveAttendanceRequest};
use crate::services::bad_request;
use crate::storage::Storage;
use crate::utils::validate::{parse_date, today};

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

/// 解析请求中的日期，未填写时为今天
pub(crate) fn resolve_date(date: Option<&str>) -> Result<String, HttpResponse> {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        None => Ok(today()),
        Some(raw) => parse_date(raw).ok_or_else(|| {
            bad_request(
                ErrorCode::AttendanceDateInvalid,
                "Invalid date. Use YYYY-MM-DD.",
            )
        }),
    }
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => crate::services::storage_from_request(request),
        }
    }

    // 某天的点名表
    pub async fn get_sheet(
        &self,
        req: &HttpRequest,
        class_id: i64,
        query: AttendanceQuery,
    ) -> ActixResult<HttpResponse> {
        sheet::get_attendance_sheet(self, req, class_id, query).await
    }

    pub async fn save_attendance(
        &self,
        req: &HttpRequest,
        class_id: i64,
        attendance_data: SaveAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        save::save_attendance(self, req, class_id, attendance_data).await
    }

    // 出勤率统计
    pub async fn get_summary(&self, req: &HttpRequest, class_id: i64) -> ActixResult<HttpResponse> {
        summary::get_attendance_summary(self, req, class_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_date() {
        assert_eq!(resolve_date(Some("2025-06-01")).ok(), Some("2025-06-01".into()));
        assert_eq!(resolve_date(Some("  ")).ok(), Some(today()));
        assert_eq!(resolve_date(None).ok(), Some(today()));
        assert!(resolve_date(Some("01-06-2025")).is_err());
    }
}
