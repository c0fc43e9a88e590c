use serde::Deserialize;

// 新增收费项目
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFeeItemRequest {
    #[serde(default)]
    pub name: String,
    pub amount: Option<f64>,
    pub due_date: Option<String>,
}

// 登记缴费
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPaymentRequest {
    pub fee_id: Option<i64>,
    pub amount: Option<f64>,
    pub mode: Option<String>,
}

/// 金额必须是大于 0 的有限数
pub fn positive_amount(amount: Option<f64>) -> Option<f64> {
    amount.filter(|a| a.is_finite() && *a > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_amount() {
        assert_eq!(positive_amount(Some(150.0)), Some(150.0));
        assert_eq!(positive_amount(Some(0.0)), None);
        assert_eq!(positive_amount(Some(-3.0)), None);
        assert_eq!(positive_amount(Some(f64::NAN)), None);
        assert_eq!(positive_amount(None), None);
    }
}
