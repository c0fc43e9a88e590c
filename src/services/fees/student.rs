use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::errors::SchoolSystemError;
use crate::models::fees::entities::PaymentWithFee;
use crate::models::fees::responses::StudentFeesResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::storage_error_response;

pub async fn get_student_fees(
    service: &FeeService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match storage.get_student_with_class(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found.",
            )));
        }
        Err(e) => return Ok(storage_error_response(&e, ErrorCode::StudentNotFound)),
    };

    let loaded = async {
        let fee_items = storage
            .list_fee_items_by_class(student.student.class_id)
            .await?;
        let payments = storage.list_payments_by_student(student_id).await?;
        Ok::<_, SchoolSystemError>((fee_items, payments))
    }
    .await;
    let (fee_items, payments) = match loaded {
        Ok(data) => data,
        Err(e) => return Ok(storage_error_response(&e, ErrorCode::FeeNotFound)),
    };

    let fee_names: HashMap<i64, &str> = fee_items
        .iter()
        .map(|f| (f.id, f.name.as_str()))
        .collect();

    let total_due: f64 = fee_items.iter().map(|f| f.amount).sum();
    let paid: f64 = payments
        .iter()
        .filter(|p| fee_names.contains_key(&p.fee_id))
        .map(|p| p.paid_amount)
        .sum();

    let payments: Vec<PaymentWithFee> = payments
        .into_iter()
        .map(|payment| PaymentWithFee {
            fee_name: fee_names
                .get(&payment.fee_id)
                .map(|n| n.to_string())
                .unwrap_or_default(),
            payment,
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        StudentFeesResponse {
            student,
            total_due,
            paid,
            balance: total_due - paid,
            payments,
            fee_items,
        },
        "Student fees retrieved successfully",
    )))
}
