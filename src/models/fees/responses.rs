use super::entities::{ClassFeeOverview, FeeItem, PaymentWithFee};
use crate::models::{classes::entities::Class, students::entities::StudentWithClass};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FeeDashboardResponse {
    pub items: Vec<ClassFeeOverview>,
}

// 班级收费表中每个学生的应缴 / 已缴 / 欠费
#[derive(Debug, Clone, Serialize)]
pub struct StudentFeeRow {
    pub student_id: i64,
    pub roll_no: String,
    pub name: String,
    pub total_due: f64,
    pub paid: f64,
    pub balance: f64,
}

#[derive(Debug, Serialize)]
pub struct ClassFeesResponse {
    pub class: Class,
    pub fee_items: Vec<FeeItem>,
    pub total_due_per_student: f64,
    pub rows: Vec<StudentFeeRow>,
}

#[derive(Debug, Serialize)]
pub struct StudentFeesResponse {
    pub student: StudentWithClass,
    pub fee_items: Vec<FeeItem>,
    pub total_due: f64,
    pub paid: f64,
    pub balance: f64,
    pub payments: Vec<PaymentWithFee>,
}
