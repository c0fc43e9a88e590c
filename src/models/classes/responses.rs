use super::entities::{Class, PromotionOutcome};
use crate::models::{
    exams::entities::Exam, students::entities::Student, subjects::entities::Subject,
};
use serde::Serialize;

// 班级列表响应
#[derive(Debug, Serialize)]
pub struct ClassListResponse {
    pub items: Vec<Class>,
}

// 班级详情：科目、考试与学生名单
#[derive(Debug, Serialize)]
pub struct ClassDetailResponse {
    pub class: Class,
    pub subjects: Vec<Subject>,
    pub exams: Vec<Exam>,
    pub students: Vec<Student>,
}

#[derive(Debug, Serialize)]
pub struct PromotionResponse {
    pub source: Class,
    pub target: Class,
    #[serde(flatten)]
    pub outcome: PromotionOutcome,
}
