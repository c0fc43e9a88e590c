use serde::{Deserialize, Serialize};

// 考试实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    pub id: i64,
    pub class_id: i64,
    pub name: String,
    pub exam_type: Option<String>,
    /// 综合成绩中的权重
    pub weight: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
