use serde::Deserialize;

// 成绩查询参数，未指定考试时使用最近一次
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultQuery {
    pub exam_id: Option<i64>,
}
