//! 班级收费 CSV 导出

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::FeeService;
use super::class_fees::build_class_fees;
use crate::models::fees::responses::StudentFeeRow;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::export::{attachment_response, write_csv};

pub(crate) fn class_fees_csv(rows: &[StudentFeeRow]) -> crate::errors::Result<Vec<u8>> {
    let header = ["Roll No", "Name", "Total Due", "Paid", "Balance"].map(String::from);
    let rows = rows.iter().map(|row| {
        vec![
            row.roll_no.clone(),
            row.name.clone(),
            format!("{:.2}", row.total_due),
            format!("{:.2}", row.paid),
            format!("{:.2}", row.balance),
        ]
    });
    write_csv(&header, rows)
}

pub async fn export_class_fees_csv(
    service: &FeeService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let fees = match build_class_fees(&storage, class_id).await {
        Ok(fees) => fees,
        Err(resp) => return Ok(resp),
    };

    match class_fees_csv(&fees.rows) {
        Ok(body) => Ok(attachment_response(
            "text/csv; charset=utf-8",
            &format!("class_{class_id}_fees.csv"),
            body,
        )),
        Err(e) => {
            error!("CSV export failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ExportFailed,
                    "CSV export failed",
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_csv_two_decimals() {
        let rows = vec![StudentFeeRow {
            student_id: 1,
            roll_no: "01".into(),
            name: "Asha".into(),
            total_due: 550.0,
            paid: 350.5,
            balance: 199.5,
        }];
        let text = String::from_utf8(class_fees_csv(&rows).unwrap()).unwrap();
        assert_eq!(
            text,
            "Roll No,Name,Total Due,Paid,Balance\n01,Asha,550.00,350.50,199.50\n"
        );
    }
}
