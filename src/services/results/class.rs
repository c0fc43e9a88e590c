use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ResultService;
use super::report::class_results;
use crate::models::ApiResponse;
use crate::models::results::requests::ResultQuery;

pub async fn get_class_results(
    service: &ResultService,
    request: &HttpRequest,
    class_id: i64,
    query: ResultQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let scale = service.get_scale();

    match class_results(&storage, &scale, class_id, query.exam_id).await {
        Ok(results) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            results,
            "Class results retrieved successfully",
        ))),
        Err(resp) => Ok(resp),
    }
}
