use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::admin_only;
use crate::middlewares;
use crate::models::fees::requests::RecordPaymentRequest;
use crate::models::results::requests::ResultQuery;
use crate::models::students::requests::{StudentRequest, StudentSearchQuery};
use crate::services::{FeeService, ResultService, StudentService};
use crate::utils::{SafeClassIdI64, SafeStudentIdI64};

static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);
static RESULT_SERVICE: Lazy<ResultService> = Lazy::new(ResultService::new_lazy);
static FEE_SERVICE: Lazy<FeeService> = Lazy::new(FeeService::new_lazy);

pub async fn list_students(
    req: HttpRequest,
    class_id: SafeClassIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req, class_id.0).await
}

pub async fn create_student(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    student_data: web::Json<StudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(&req, class_id.0, student_data.into_inner())
        .await
}

pub async fn search_students(
    req: HttpRequest,
    query: web::Query<StudentSearchQuery>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .search_students(&req, query.into_inner())
        .await
}

pub async fn get_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(&req, student_id.0).await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    student_data: web::Json<StudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(&req, student_id.0, student_data.into_inner())
        .await
}

pub async fn delete_student(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&req, student_id.0).await
}

pub async fn get_student_result(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    query: web::Query<ResultQuery>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE
        .student_result(&req, student_id.0, query.into_inner())
        .await
}

pub async fn get_student_result_pdf(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    query: web::Query<ResultQuery>,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE
        .student_result_pdf(&req, student_id.0, query.into_inner())
        .await
}

pub async fn get_overall_result(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.overall_result(&req, student_id.0).await
}

pub async fn get_student_fees(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.student_fees(&req, student_id.0).await
}

pub async fn record_payment(
    req: HttpRequest,
    student_id: SafeStudentIdI64,
    payment_data: web::Json<RecordPaymentRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE
        .record_payment(&req, student_id.0, payment_data.into_inner())
        .await
}

/// /api/v1/classes/{class_id}/students
pub fn configure_class_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{class_id}/students")
            .route(web::get().to(list_students))
            .route(web::post().to(create_student)),
    );
}

pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RequireJWT)
            // search 必须在 /{student_id} 之前注册
            .route("/search", web::get().to(search_students))
            .service(
                web::resource("/{student_id}")
                    .route(web::get().to(get_student))
                    .route(web::put().to(update_student))
                    .route(web::delete().to(delete_student).wrap(admin_only())),
            )
            .route("/{student_id}/result", web::get().to(get_student_result))
            .route(
                "/{student_id}/result/pdf",
                web::get().to(get_student_result_pdf),
            )
            .route(
                "/{student_id}/result/overall",
                web::get().to(get_overall_result),
            )
            .route("/{student_id}/fees", web::get().to(get_student_fees))
            .route("/{student_id}/payments", web::post().to(record_payment)),
    );
}
