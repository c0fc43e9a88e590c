use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DashboardService;
use crate::config::AppConfig;
use crate::models::{ApiResponse, ErrorCode, dashboard::DashboardResponse};
use crate::services::storage_error_response;

pub async fn get_summary(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let counts = async {
        let classes = storage.count_classes().await?;
        let students = storage.count_students().await?;
        let exams = storage.count_exams().await?;
        Ok::<_, crate::errors::SchoolSystemError>((classes, students, exams))
    }
    .await;

    match counts {
        Ok((classes, students, exams)) => {
            let response = DashboardResponse {
                system_name: AppConfig::get().app.system_name.clone(),
                classes,
                students,
                exams,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Dashboard loaded")))
        }
        Err(e) => Ok(storage_error_response(&e, ErrorCode::NotFound)),
    }
}
