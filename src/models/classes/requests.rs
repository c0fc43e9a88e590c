use serde::Deserialize;

// 班级创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClassRequest {
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub section: String,
}

impl CreateClassRequest {
    /// 去掉首尾空白，分班统一大写；任一为空时返回 None
    pub fn normalized(&self) -> Option<(String, String)> {
        let class_name = self.class_name.trim();
        let section = self.section.trim().to_uppercase();
        if class_name.is_empty() || section.is_empty() {
            None
        } else {
            Some((class_name.to_string(), section))
        }
    }
}

// 班级更新请求，字段与创建相同
pub type UpdateClassRequest = CreateClassRequest;

// 升班请求
#[derive(Debug, Clone, Deserialize)]
pub struct PromoteClassRequest {
    pub target_class_id: Option<i64>,
    /// 为 true 时复制成功的学生会从原班级移除
    #[serde(default, rename = "move")]
    pub move_students: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_trims_and_uppercases() {
        let req = CreateClassRequest {
            class_name: "  Grade 5 ".into(),
            section: " b ".into(),
        };
        assert_eq!(
            req.normalized(),
            Some(("Grade 5".to_string(), "B".to_string()))
        );
    }

    #[test]
    fn test_normalized_rejects_blank() {
        let req = CreateClassRequest {
            class_name: "Grade 5".into(),
            section: "   ".into(),
        };
        assert_eq!(req.normalized(), None);
    }

    #[test]
    fn test_promote_move_flag() {
        let req: PromoteClassRequest =
            serde_json::from_str(r#"{"target_class_id": 4, "move": true}"#).unwrap();
        assert_eq!(req.target_class_id, Some(4));
        assert!(req.move_students);
    }
}
