pub mod attendance;
pub mod auth;
pub mod classes;
pub mod common;
pub mod dashboard;
pub mod exams;
pub mod fees;
pub mod marks;
pub mod results;
pub mod students;
pub mod subjects;
pub mod users;

pub use common::*;

/// 程序启动时间，用于启动耗时统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
