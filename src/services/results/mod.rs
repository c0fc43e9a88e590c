pub mod class;
pub mod export;
pub mod grading;
pub mod overall;
pub mod pdf;
pub(crate) mod report;
pub mod student;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::results::requests::ResultQuery;
use crate::storage::Storage;

pub use grading::GradingScale;

pub struct ResultService {
    storage: Option<Arc<dyn Storage>>,
}

impl ResultService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => crate::services::storage_from_request(request),
        }
    }

    pub(crate) fn get_scale(&self) -> GradingScale {
        GradingScale::from_config()
    }

    // 学生单次考试成绩
    pub async fn student_result(
        &self,
        req: &HttpRequest,
        student_id: i64,
        query: ResultQuery,
    ) -> ActixResult<HttpResponse> {
        student::get_student_result(self, req, student_id, query).await
    }

    // 成绩单 PDF
    pub async fn student_result_pdf(
        &self,
        req: &HttpRequest,
        student_id: i64,
        query: ResultQuery,
    ) -> ActixResult<HttpResponse> {
        pdf::get_student_result_pdf(self, req, student_id, query).await
    }

    // 按考试权重汇总
    pub async fn overall_result(
        &self,
        req: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        overall::get_overall_result(self, req, student_id).await
    }

    // 班级成绩表
    pub async fn class_results(
        &self,
        req: &HttpRequest,
        class_id: i64,
        query: ResultQuery,
    ) -> ActixResult<HttpResponse> {
        class::get_class_results(self, req, class_id, query).await
    }

    pub async fn class_results_csv(
        &self,
        req: &HttpRequest,
        class_id: i64,
        query: ResultQuery,
    ) -> ActixResult<HttpResponse> {
        export::export_class_results_csv(self, req, class_id, query).await
    }
}
