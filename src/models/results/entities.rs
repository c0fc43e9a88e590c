use serde::Serialize;

// 等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    F,
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::F => "F",
        };
        write!(f, "{s}")
    }
}

// 及格状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResultStatus {
    Pass,
    Fail,
}

impl std::fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResultStatus::Pass => write!(f, "PASS"),
            ResultStatus::Fail => write!(f, "FAIL"),
        }
    }
}

// 一次考试的汇总
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSummary {
    pub total: f64,
    pub max_total: f64,
    pub percentage: f64,
    pub grade: Grade,
    pub status: ResultStatus,
}

// 单科成绩
#[derive(Debug, Clone, Serialize)]
pub struct SubjectMark {
    pub subject_id: i64,
    pub subject_name: String,
    pub marks: f64,
}
