use serde::{Deserialize, Serialize};

// 班级实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    pub id: i64,
    pub class_name: String,
    pub section: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Class {
    /// 形如 `Grade 5 - A` 的展示名
    pub fn label(&self) -> String {
        format!("{} - {}", self.class_name, self.section)
    }
}

/// 升班结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromotionOutcome {
    pub copied: u64,
    pub skipped: u64,
    pub removed: u64,
}
