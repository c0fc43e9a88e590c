use std::collections::HashMap;

use serde::Deserialize;

// 保存单个学生某次考试的各科成绩，键为科目 ID
#[derive(Debug, Clone, Deserialize)]
pub struct SaveMarksRequest {
    #[serde(default)]
    pub marks: HashMap<i64, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_ids_as_object_keys() {
        let req: SaveMarksRequest =
            serde_json::from_str(r#"{"marks": {"3": 78.5, "7": 91}}"#).unwrap();
        assert_eq!(req.marks.get(&3), Some(&78.5));
        assert_eq!(req.marks.get(&7), Some(&91.0));
    }
}
