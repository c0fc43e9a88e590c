use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::results::requests::ResultQuery;
use crate::services::ResultService;
use crate::utils::SafeClassIdI64;

static RESULT_SERVICE: Lazy<ResultService> = Lazy::new(ResultService::new_lazy);

pub async fn get_class_results(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    query: web::Query<ResultQuery>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE
        .class_results(&req, class_id.0, query.into_inner())
        .await
}

pub async fn export_class_results(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    query: web::Query<ResultQuery>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE
        .class_results_csv(&req, class_id.0, query.into_inner())
        .await
}

/// /api/v1/classes/{class_id}/results
pub fn configure_class_result_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{class_id}/results", web::get().to(get_class_results))
        .route(
            "/{class_id}/results/csv",
            web::get().to(export_class_results),
        );
}
