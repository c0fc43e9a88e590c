use super::entities::{Grade, ResultStatus, ResultSummary, SubjectMark};
use crate::models::{
    classes::entities::Class, exams::entities::Exam, students::entities::StudentWithClass,
};
use serde::Serialize;

// 学生单次考试成绩单
#[derive(Debug, Serialize)]
pub struct StudentResultResponse {
    pub student: StudentWithClass,
    pub exam: Exam,
    /// 该班级全部考试，供切换
    pub exams: Vec<Exam>,
    pub subjects: Vec<SubjectMark>,
    pub summary: ResultSummary,
}

// 综合成绩中的单次考试
#[derive(Debug, Serialize)]
pub struct ExamBreakdown {
    pub exam: Exam,
    pub summary: ResultSummary,
}

// 按权重汇总的综合成绩
#[derive(Debug, Serialize)]
pub struct OverallResultResponse {
    pub student: StudentWithClass,
    pub exams: Vec<ExamBreakdown>,
    pub total_weight: f64,
    pub weighted_percentage: f64,
    pub grade: Grade,
    pub status: ResultStatus,
}

// 班级成绩表的一行
#[derive(Debug, Clone, Serialize)]
pub struct ClassResultRow {
    pub student_id: i64,
    pub roll_no: String,
    pub name: String,
    pub total: f64,
    pub percentage: f64,
    pub grade: Grade,
    pub status: ResultStatus,
}

#[derive(Debug, Serialize)]
pub struct ClassResultsResponse {
    pub class: Class,
    pub exam: Exam,
    pub exams: Vec<Exam>,
    pub subject_count: usize,
    pub max_total: f64,
    pub rows: Vec<ClassResultRow>,
}
