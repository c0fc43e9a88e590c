use super::entities::Exam;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExamListResponse {
    pub items: Vec<Exam>,
}
