use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::models::classes::{requests::PromoteClassRequest, responses::PromotionResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, require_class, storage_error_response};

pub async fn promote_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    promote_data: PromoteClassRequest,
) -> ActixResult<HttpResponse> {
    let target_class_id = match promote_data.target_class_id {
        Some(id) if id != class_id => id,
        _ => {
            return Ok(bad_request(
                ErrorCode::ClassPromotionInvalid,
                "Select a different target class.",
            ));
        }
    };

    let storage = service.get_storage(request);

    let source = match require_class(&storage, class_id).await {
        Ok(class) => class,
        Err(resp) => return Ok(resp),
    };
    let target = match require_class(&storage, target_class_id).await {
        Ok(class) => class,
        Err(resp) => return Ok(resp),
    };

    match storage
        .promote_students(class_id, target_class_id, promote_data.move_students)
        .await
    {
        Ok(outcome) => {
            info!(
                "Promoted {} -> {}: copied {}, skipped {}, removed {}",
                source.label(),
                target.label(),
                outcome.copied,
                outcome.skipped,
                outcome.removed
            );
            let message = format!(
                "Promotion complete: {} copied, {} skipped.",
                outcome.copied, outcome.skipped
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                PromotionResponse {
                    source,
                    target,
                    outcome,
                },
                message,
            )))
        }
        Err(e) => Ok(storage_error_response(&e, ErrorCode::ClassNotFound)),
    }
}
