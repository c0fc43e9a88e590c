pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod search;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::{StudentRequest, StudentSearchQuery};
use crate::storage::Storage;

/// 学号冲突提示
pub(crate) const ROLL_NO_EXISTS: &str = "Roll number already exists in this class!";

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => crate::services::storage_from_request(request),
        }
    }

    // 班级学生名单
    pub async fn list_students(
        &self,
        req: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, req, class_id).await
    }

    pub async fn create_student(
        &self,
        req: &HttpRequest,
        class_id: i64,
        student_data: StudentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, req, class_id, student_data).await
    }

    pub async fn get_student(
        &self,
        req: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_student(self, req, student_id).await
    }

    pub async fn update_student(
        &self,
        req: &HttpRequest,
        student_id: i64,
        student_data: StudentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, req, student_id, student_data).await
    }

    pub async fn delete_student(
        &self,
        req: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_student(self, req, student_id).await
    }

    // 按姓名或学号搜索
    pub async fn search_students(
        &self,
        req: &HttpRequest,
        query: StudentSearchQuery,
    ) -> ActixResult<HttpResponse> {
        search::search_students(self, req, query).await
    }
}
