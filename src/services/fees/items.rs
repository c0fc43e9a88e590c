use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FeeService;
use crate::models::fees::requests::{CreateFeeItemRequest, positive_amount};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, require_class, storage_error_response};
use crate::utils::validate::parse_date;

pub async fn add_fee_item(
    service: &FeeService,
    request: &HttpRequest,
    class_id: i64,
    item_data: CreateFeeItemRequest,
) -> ActixResult<HttpResponse> {
    let name = item_data.name.trim();
    let amount = positive_amount(item_data.amount);
    let Some(amount) = amount.filter(|_| !name.is_empty()) else {
        return Ok(bad_request(
            ErrorCode::FeeItemInvalid,
            "Valid fee name and amount required.",
        ));
    };

    let due_date = match item_data.due_date.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match parse_date(raw) {
            Some(date) => Some(date),
            None => {
                return Ok(bad_request(
                    ErrorCode::FeeItemInvalid,
                    "Invalid due date. Use YYYY-MM-DD.",
                ));
            }
        },
    };

    let storage = service.get_storage(request);
    let class = match require_class(&storage, class_id).await {
        Ok(class) => class,
        Err(resp) => return Ok(resp),
    };

    match storage.create_fee_item(class_id, name, amount, due_date).await {
        Ok(item) => {
            info!("Fee item {} ({}) added to {}", item.name, item.amount, class.label());
            Ok(HttpResponse::Created().json(ApiResponse::success(item, "Fee item added.")))
        }
        Err(e) => Ok(storage_error_response(&e, ErrorCode::ClassNotFound)),
    }
}
