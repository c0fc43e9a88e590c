use serde::{Deserialize, Serialize};

// 成绩记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub student_id: i64,
    pub subject_id: i64,
    pub exam_id: i64,
    pub marks_obtained: f64,
}
