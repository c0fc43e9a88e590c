use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::errors::SchoolSystemError;
use crate::models::fees::{entities::ClassFeeOverview, responses::FeeDashboardResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn get_fee_dashboard(
    service: &FeeService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let overview = async {
        let classes = storage.list_classes().await?;
        let mut items = Vec::with_capacity(classes.len());
        for class in classes {
            let student_count = storage.count_students_by_class(class.id).await?;
            let fee_item_count = storage.count_fee_items_by_class(class.id).await?;
            items.push(ClassFeeOverview {
                class_id: class.id,
                class_name: class.class_name,
                section: class.section,
                student_count,
                fee_item_count,
            });
        }
        Ok::<_, SchoolSystemError>(items)
    }
    .await;

    match overview {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            FeeDashboardResponse { items },
            "Fee overview retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(&e, ErrorCode::ClassNotFound)),
    }
}
