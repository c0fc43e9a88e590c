use std::collections::BTreeMap;

use crate::models::{
    classes::entities::Class, exams::entities::Exam, students::entities::Student,
    subjects::entities::Subject,
};
use serde::Serialize;

// 成绩录入表中的一行，未录入的科目为 0
#[derive(Debug, Serialize)]
pub struct MarksSheetRow {
    pub student: Student,
    pub marks: BTreeMap<i64, f64>,
}

#[derive(Debug, Serialize)]
pub struct MarksSheetResponse {
    pub class: Class,
    pub exam: Exam,
    pub subjects: Vec<Subject>,
    pub rows: Vec<MarksSheetRow>,
}

#[derive(Debug, Serialize)]
pub struct SaveMarksResponse {
    pub student_id: i64,
    pub exam_id: i64,
    pub saved: usize,
}
