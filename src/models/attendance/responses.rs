use super::entities::AttendanceStatus;
use crate::models::{classes::entities::Class, students::entities::Student};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AttendanceSheetRow {
    pub student: Student,
    pub status: AttendanceStatus,
}

#[derive(Debug, Serialize)]
pub struct AttendanceSheetResponse {
    pub class: Class,
    pub date: String,
    /// 当天是否已经点过名
    pub recorded: bool,
    pub rows: Vec<AttendanceSheetRow>,
}

#[derive(Debug, Serialize)]
pub struct AttendanceSaveResponse {
    pub date: String,
    pub present: usize,
    pub absent: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceSummaryRow {
    pub student_id: i64,
    pub roll_no: String,
    pub name: String,
    pub present_days: u64,
    pub total_sessions: u64,
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct AttendanceSummaryResponse {
    pub class: Class,
    pub total_sessions: u64,
    pub rows: Vec<AttendanceSummaryRow>,
}
