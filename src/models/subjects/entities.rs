use serde::{Deserialize, Serialize};

// 科目实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub class_id: i64,
    pub subject_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
