use serde::Deserialize;

// 学生创建 / 更新请求
#[derive(Debug, Clone, Deserialize)]
pub struct StudentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roll_no: String,
}

impl StudentRequest {
    /// 去掉首尾空白；姓名或学号为空时返回 None
    pub fn normalized(&self) -> Option<(String, String)> {
        let name = self.name.trim();
        let roll_no = self.roll_no.trim();
        if name.is_empty() || roll_no.is_empty() {
            None
        } else {
            Some((name.to_string(), roll_no.to_string()))
        }
    }
}

// 学生搜索参数
#[derive(Debug, Deserialize)]
pub struct StudentSearchQuery {
    pub q: Option<String>,
}

impl StudentSearchQuery {
    pub fn term(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_search_term() {
        let query = StudentSearchQuery {
            q: Some("   ".into()),
        };
        assert_eq!(query.term(), None);
        let query = StudentSearchQuery { q: None };
        assert_eq!(query.term(), None);
        let query = StudentSearchQuery {
            q: Some(" Ali ".into()),
        };
        assert_eq!(query.term(), Some("Ali"));
    }

    #[test]
    fn test_student_request_requires_both_fields() {
        let req = StudentRequest {
            name: "Asha".into(),
            roll_no: " ".into(),
        };
        assert!(req.normalized().is_none());
    }
}
