pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::exams::requests::{CreateExamRequest, UpdateExamRequest};
use crate::storage::Storage;

pub(crate) const INVALID_WEIGHT: &str = "Exam weight must be a positive number.";

pub struct ExamService {
    storage: Option<Arc<dyn Storage>>,
}

impl ExamService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => crate::services::storage_from_request(request),
        }
    }

    // 班级考试列表，最新的在前
    pub async fn list_exams(&self, req: &HttpRequest, class_id: i64) -> ActixResult<HttpResponse> {
        list::list_exams(self, req, class_id).await
    }

    pub async fn create_exam(
        &self,
        req: &HttpRequest,
        class_id: i64,
        exam_data: CreateExamRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_exam(self, req, class_id, exam_data).await
    }

    pub async fn update_exam(
        &self,
        req: &HttpRequest,
        exam_id: i64,
        exam_data: UpdateExamRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_exam(self, req, exam_id, exam_data).await
    }

    pub async fn delete_exam(&self, req: &HttpRequest, exam_id: i64) -> ActixResult<HttpResponse> {
        delete::delete_exam(self, req, exam_id).await
    }
}
