use serde::{Deserialize, Serialize};

// 收费项目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeItem {
    pub id: i64,
    pub class_id: i64,
    pub name: String,
    pub amount: f64,
    pub due_date: Option<String>,
}

// 缴费记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeePayment {
    pub id: i64,
    pub student_id: i64,
    pub fee_id: i64,
    pub paid_amount: f64,
    pub paid_on: String,
    pub mode: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 缴费记录 + 收费项目名称
#[derive(Debug, Clone, Serialize)]
pub struct PaymentWithFee {
    #[serde(flatten)]
    pub payment: FeePayment,
    pub fee_name: String,
}

// 收费总览中的班级
#[derive(Debug, Clone, Serialize)]
pub struct ClassFeeOverview {
    pub class_id: i64,
    pub class_name: String,
    pub section: String,
    pub student_count: u64,
    pub fee_item_count: u64,
}
