use super::entities::{Student, StudentWithClass};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub items: Vec<Student>,
}

// 搜索结果
#[derive(Debug, Serialize)]
pub struct StudentSearchResponse {
    pub query: String,
    pub items: Vec<StudentWithClass>,
}
