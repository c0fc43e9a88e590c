use serde::Deserialize;

// 科目创建 / 更新请求
#[derive(Debug, Clone, Deserialize)]
pub struct SubjectRequest {
    #[serde(default)]
    pub subject_name: String,
}

impl SubjectRequest {
    pub fn normalized(&self) -> Option<String> {
        let name = self.subject_name.trim();
        (!name.is_empty()).then(|| name.to_string())
    }
}
