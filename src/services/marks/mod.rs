pub mod save;
pub mod sheet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::marks::requests::SaveMarksRequest;
use crate::storage::Storage;

pub struct MarkService {
    storage: Option<Arc<dyn Storage>>,
}

impl MarkService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => crate::services::storage_from_request(request),
        }
    }

    // 成绩录入表
    pub async fn get_sheet(
        &self,
        req: &HttpRequest,
        class_id: i64,
        exam_id: i64,
    ) -> ActixResult<HttpResponse> {
        sheet::get_marks_sheet(self, req, class_id, exam_id).await
    }

    // 保存单个学生的各科成绩
    pub async fn save_marks(
        &self,
        req: &HttpRequest,
        class_id: i64,
        exam_id: i64,
        student_id: i64,
        marks_data: SaveMarksRequest,
    ) -> ActixResult<HttpResponse> {
        save::save_marks(self, req, class_id, exam_id, student_id, marks_data).await
    }
}
