//! 成绩评定规则
//!
//! 百分比 = 总分 / (科目数 × 单科满分) × 100，科目数为 0 时记 0。
//! 等级：A+ ≥ 90，A ≥ 80，B ≥ 60，C ≥ 及格线，其余为 F。

use crate::config::AppConfig;
use crate::models::results::entities::{Grade, ResultStatus, ResultSummary};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradingScale {
    pub max_marks_per_subject: f64,
    pub pass_percentage: f64,
}

impl Default for GradingScale {
    fn default() -> Self {
        Self {
            max_marks_per_subject: 100.0,
            pass_percentage: 33.0,
        }
    }
}

impl GradingScale {
    pub fn from_config() -> Self {
        let grading = &AppConfig::get().grading;
        Self {
            max_marks_per_subject: grading.max_marks_per_subject,
            pass_percentage: grading.pass_percentage,
        }
    }

    pub fn max_total(&self, subject_count: usize) -> f64 {
        subject_count as f64 * self.max_marks_per_subject
    }

    pub fn grade(&self, percentage: f64) -> Grade {
        if percentage >= 90.0 {
            Grade::APlus
        } else if percentage >= 80.0 {
            Grade::A
        } else if percentage >= 60.0 {
            Grade::B
        } else if percentage >= self.pass_percentage {
            Grade::C
        } else {
            Grade::F
        }
    }

    pub fn status(&self, percentage: f64) -> ResultStatus {
        if percentage >= self.pass_percentage {
            ResultStatus::Pass
        } else {
            ResultStatus::Fail
        }
    }

    pub fn summarize(&self, total: f64, subject_count: usize) -> ResultSummary {
        let max_total = self.max_total(subject_count);
        let percentage = if max_total > 0.0 {
            total / max_total * 100.0
        } else {
            0.0
        };
        ResultSummary {
            total,
            max_total,
            percentage,
            grade: self.grade(percentage),
            status: self.status(percentage),
        }
    }
}

/// 加权平均百分比，返回 (总权重, 加权百分比)
pub fn weighted_percentage(parts: &[(f64, f64)]) -> (f64, f64) {
    let total_weight: f64 = parts.iter().map(|(weight, _)| weight).sum();
    if total_weight <= 0.0 {
        return (0.0, 0.0);
    }
    let weighted: f64 = parts.iter().map(|(weight, pct)| weight * pct).sum();
    (total_weight, weighted / total_weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        let scale = GradingScale::default();
        assert_eq!(scale.grade(90.0), Grade::APlus);
        assert_eq!(scale.grade(89.99), Grade::A);
        assert_eq!(scale.grade(80.0), Grade::A);
        assert_eq!(scale.grade(60.0), Grade::B);
        assert_eq!(scale.grade(33.0), Grade::C);
        assert_eq!(scale.grade(32.9), Grade::F);
    }

    #[test]
    fn test_pass_threshold() {
        let scale = GradingScale::default();
        assert_eq!(scale.status(33.0), ResultStatus::Pass);
        assert_eq!(scale.status(32.99), ResultStatus::Fail);
    }

    #[test]
    fn test_summary_for_three_subjects() {
        let scale = GradingScale::default();
        let summary = scale.summarize(255.0, 3);
        assert_eq!(summary.max_total, 300.0);
        assert_eq!(summary.percentage, 85.0);
        assert_eq!(summary.grade, Grade::A);
        assert_eq!(summary.status, ResultStatus::Pass);
    }

    #[test]
    fn test_summary_without_subjects() {
        let summary = GradingScale::default().summarize(0.0, 0);
        assert_eq!(summary.max_total, 0.0);
        assert_eq!(summary.percentage, 0.0);
        assert_eq!(summary.grade, Grade::F);
        assert_eq!(summary.status, ResultStatus::Fail);
    }

    #[test]
    fn test_custom_pass_mark_moves_c_band() {
        let scale = GradingScale {
            max_marks_per_subject: 50.0,
            pass_percentage: 40.0,
        };
        assert_eq!(scale.grade(35.0), Grade::F);
        assert_eq!(scale.grade(45.0), Grade::C);
        assert_eq!(scale.summarize(40.0, 2).percentage, 40.0);
    }

    #[test]
    fn test_weighted_percentage() {
        // 期中 50% 权重 1，期末 80% 权重 3
        let (weight, pct) = weighted_percentage(&[(1.0, 50.0), (3.0, 80.0)]);
        assert_eq!(weight, 4.0);
        assert_eq!(pct, 72.5);
        assert_eq!(weighted_percentage(&[]), (0.0, 0.0));
    }
}
