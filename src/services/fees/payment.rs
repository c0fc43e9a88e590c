use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FeeService;
use crate::models::fees::requests::{RecordPaymentRequest, positive_amount};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{bad_request, require_student, storage_error_response};
use crate::utils::validate::today;

pub async fn record_payment(
    service: &FeeService,
    request: &HttpRequest,
    student_id: i64,
    payment_data: RecordPaymentRequest,
) -> ActixResult<HttpResponse> {
    // 学生不存在时先返回 404
    let storage = service.get_storage(request);
    let student = match require_student(&storage, student_id).await {
        Ok(student) => student,
        Err(resp) => return Ok(resp),
    };

    let Some(amount) = positive_amount(payment_data.amount) else {
        return Ok(bad_request(
            ErrorCode::PaymentInvalid,
            "Payment amount must be positive.",
        ));
    };
    let Some(fee_id) = payment_data.fee_id else {
        return Ok(bad_request(ErrorCode::PaymentInvalid, "Fee item is required."));
    };

    // 收费项目必须属于学生所在班级
    match storage.get_fee_item_by_id(fee_id).await {
        Ok(Some(item)) if item.class_id == student.class_id => {}
        Ok(_) => {
            return Ok(bad_request(
                ErrorCode::PaymentInvalid,
                "Fee item does not belong to this student's class.",
            ));
        }
        Err(e) => return Ok(storage_error_response(&e, ErrorCode::FeeNotFound)),
    }

    let mode = payment_data
        .mode
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());

    match storage
        .record_payment(student.id, fee_id, amount, &today(), mode)
        .await
    {
        Ok(payment) => {
            info!("Payment of {} recorded for student {}", payment.paid_amount, student.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(payment, "Payment recorded.")))
        }
        Err(e) => Ok(storage_error_response(&e, ErrorCode::FeeNotFound)),
    }
}
