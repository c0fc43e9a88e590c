use serde::Serialize;

// 首页统计
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub system_name: String,
    pub classes: u64,
    pub students: u64,
    pub exams: u64,
}
