use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeeService;
use crate::errors::SchoolSystemError;
use crate::models::fees::entities::{FeeItem, FeePayment};
use crate::models::fees::responses::{ClassFeesResponse, StudentFeeRow};
use crate::models::students::entities::Student;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{require_class, storage_error_response};
use crate::storage::Storage;

/// 每个学生的应缴、已缴与欠费
///
/// 只统计该班级收费项目下的缴费。
pub(crate) fn fee_rows(
    students: Vec<Student>,
    fee_items: &[FeeItem],
    payments: &[FeePayment],
) -> Vec<StudentFeeRow> {
    let total_due: f64 = fee_items.iter().map(|f| f.amount).sum();
    let fee_ids: HashSet<i64> = fee_items.iter().map(|f| f.id).collect();

    let mut paid: HashMap<i64, f64> = HashMap::new();
    for payment in payments.iter().filter(|p| fee_ids.contains(&p.fee_id)) {
        *paid.entry(payment.student_id).or_default() += payment.paid_amount;
    }

    students
        .into_iter()
        .map(|student| {
            let paid = paid.get(&student.id).copied().unwrap_or(0.0);
            StudentFeeRow {
                student_id: student.id,
                roll_no: student.roll_no,
                name: student.name,
                total_due,
                paid,
                balance: total_due - paid,
            }
        })
        .collect()
}

pub(crate) async fn build_class_fees(
    storage: &Arc<dyn Storage>,
    class_id: i64,
) -> Result<ClassFeesResponse, HttpResponse> {
    let class = require_class(storage, class_id).await?;

    let loaded = async {
        let fee_items = storage.list_fee_items_by_class(class_id).await?;
        let students = storage.list_students_by_class(class_id).await?;
        let payments = storage.list_payments_by_class(class_id).await?;
        Ok::<_, SchoolSystemError>((fee_items, students, payments))
    }
    .await;
    let (fee_items, students, payments) =
        loaded.map_err(|e| storage_error_response(&e, ErrorCode::FeeNotFound))?;

    let rows = fee_rows(students, &fee_items, &payments);
    let total_due_per_student = fee_items.iter().map(|f| f.amount).sum();

    Ok(ClassFeesResponse {
        class,
        fee_items,
        total_due_per_student,
        rows,
    })
}

pub async fn get_class_fees(
    service: &FeeService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match build_class_fees(&storage, class_id).await {
        Ok(fees) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            fees,
            "Class fees retrieved successfully",
        ))),
        Err(resp) => Ok(resp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_rows_balance() {
        let now = chrono::Utc::now();
        let students = vec![
            Student {
                id: 1,
                name: "Asha".into(),
                roll_no: "01".into(),
                class_id: 1,
                created_at: now,
                updated_at: now,
            },
            Student {
                id: 2,
                name: "Ravi".into(),
                roll_no: "02".into(),
                class_id: 1,
                created_at: now,
                updated_at: now,
            },
        ];
        let fee_items = vec![
            FeeItem {
                id: 10,
                class_id: 1,
                name: "Tuition".into(),
                amount: 500.0,
                due_date: None,
            },
            FeeItem {
                id: 11,
                class_id: 1,
                name: "Library".into(),
                amount: 50.0,
                due_date: None,
            },
        ];
        let payment = |id, student_id, fee_id, amount| FeePayment {
            id,
            student_id,
            fee_id,
            paid_amount: amount,
            paid_on: "2025-04-01".into(),
            mode: None,
            created_at: now,
        };
        // fee 99 不属于该班级，不计入
        let payments = vec![
            payment(1, 1, 10, 300.0),
            payment(2, 1, 11, 50.0),
            payment(3, 2, 99, 40.0),
        ];

        let rows = fee_rows(students, &fee_items, &payments);
        assert_eq!(rows[0].total_due, 550.0);
        assert_eq!(rows[0].paid, 350.0);
        assert_eq!(rows[0].balance, 200.0);
        assert_eq!(rows[1].paid, 0.0);
        assert_eq!(rows[1].balance, 550.0);
    }
}
