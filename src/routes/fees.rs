use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::admin_only;
use crate::models::fees::requests::CreateFeeItemRequest;
use crate::services::FeeService;
use crate::utils::SafeClassIdI64;

static FEE_SERVICE: Lazy<FeeService> = Lazy::new(FeeService::new_lazy);

pub async fn get_class_fees(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.class_fees(&req, class_id.0).await
}

pub async fn add_fee_item(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    item_data: web::Json<CreateFeeItemRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE
        .add_fee_item(&req, class_id.0, item_data.into_inner())
        .await
}

pub async fn export_class_fees(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.class_fees_csv(&req, class_id.0).await
}

/// /api/v1/classes/{class_id}/fees
pub fn configure_class_fee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{class_id}/fees")
            .route(web::get().to(get_class_fees))
            .route(web::post().to(add_fee_item).wrap(admin_only())),
    )
    .route("/{class_id}/fees/csv", web::get().to(export_class_fees));
}
