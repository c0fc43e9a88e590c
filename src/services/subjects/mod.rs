pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::subjects::requests::SubjectRequest;
use crate::storage::Storage;

pub struct SubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubjectService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => crate::services::storage_from_request(request),
        }
    }

    // 班级科目列表
    pub async fn list_subjects(
        &self,
        req: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_subjects(self, req, class_id).await
    }

    pub async fn create_subject(
        &self,
        req: &HttpRequest,
        class_id: i64,
        subject_data: SubjectRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_subject(self, req, class_id, subject_data).await
    }

    pub async fn update_subject(
        &self,
        req: &HttpRequest,
        subject_id: i64,
        subject_data: SubjectRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_subject(self, req, subject_id, subject_data).await
    }

    pub async fn delete_subject(
        &self,
        req: &HttpRequest,
        subject_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_subject(self, req, subject_id).await
    }
}
