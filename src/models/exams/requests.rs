use serde::Deserialize;

pub const DEFAULT_EXAM_WEIGHT: f64 = 1.0;

// 考试创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExamRequest {
    #[serde(default)]
    pub name: String,
    pub exam_type: Option<String>,
    pub weight: Option<f64>,
}

// 考试更新请求，未给出的字段保持不变
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExamRequest {
    pub name: Option<String>,
    pub exam_type: Option<String>,
    pub weight: Option<f64>,
}

/// 权重必须是大于 0 的有限数
pub fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}

/// 空白的考试类型视为未填写
pub fn normalize_exam_type(exam_type: Option<&str>) -> Option<String> {
    exam_type
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_validation() {
        assert!(is_valid_weight(DEFAULT_EXAM_WEIGHT));
        assert!(is_valid_weight(0.25));
        assert!(!is_valid_weight(0.0));
        assert!(!is_valid_weight(-1.0));
        assert!(!is_valid_weight(f64::NAN));
        assert!(!is_valid_weight(f64::INFINITY));
    }

    #[test]
    fn test_exam_type_normalization() {
        assert_eq!(normalize_exam_type(Some("  ")), None);
        assert_eq!(normalize_exam_type(Some(" Term ")), Some("Term".into()));
        assert_eq!(normalize_exam_type(None), None);
    }
}
