pub mod class_fees;
pub mod dashboard;
pub mod export;
pub mod items;
pub mod payment;
pub mod student;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::fees::requests::{CreateFeeItemRequest, RecordPaymentRequest};
use crate::storage::Storage;

pub struct FeeService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => crate::services::storage_from_request(request),
        }
    }

    // 收费总览
    pub async fn dashboard(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::get_fee_dashboard(self, req).await
    }

    pub async fn class_fees(&self, req: &HttpRequest, class_id: i64) -> ActixResult<HttpResponse> {
        class_fees::get_class_fees(self, req, class_id).await
    }

    pub async fn add_fee_item(
        &self,
        req: &HttpRequest,
        class_id: i64,
        item_data: CreateFeeItemRequest,
    ) -> ActixResult<HttpResponse> {
        items::add_fee_item(self, req, class_id, item_data).await
    }

    pub async fn class_fees_csv(
        &self,
        req: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        export::export_class_fees_csv(self, req, class_id).await
    }

    // 学生缴费详情
    pub async fn student_fees(
        &self,
        req: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        student::get_student_fees(self, req, student_id).await
    }

    pub async fn record_payment(
        &self,
        req: &HttpRequest,
        student_id: i64,
        payment_data: RecordPaymentRequest,
    ) -> ActixResult<HttpResponse> {
        payment::record_payment(self, req, student_id, payment_data).await
    }
}
