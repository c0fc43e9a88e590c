use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::{admin_only, attendance, exams, fees, marks, results, students, subjects};
use crate::middlewares;
use crate::models::classes::requests::{CreateClassRequest, PromoteClassRequest, UpdateClassRequest};
use crate::services::ClassService;
use crate::utils::SafeClassIdI64;

// 懒加载的全局 CLASS_SERVICE 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

// HTTP处理程序
pub async fn list_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req).await
}

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(&req, class_data.into_inner())
        .await
}

pub async fn get_class(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(&req, class_id.0).await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    update_data: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, class_id.0, update_data.into_inner())
        .await
}

pub async fn delete_class(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&req, class_id.0).await
}

pub async fn promote_class(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    promote_data: web::Json<PromoteClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .promote_class(&req, class_id.0, promote_data.into_inner())
        .await
}

// 配置路由
// 班级下的科目、学生、考试、成绩、考勤和收费都挂在同一个 scope 里
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_classes))
                    .route(web::post().to(create_class).wrap(admin_only())),
            )
            .service(
                web::resource("/{class_id}")
                    .route(web::get().to(get_class))
                    .route(web::put().to(update_class).wrap(admin_only()))
                    .route(web::delete().to(delete_class).wrap(admin_only())),
            )
            .service(
                web::resource("/{class_id}/promote")
                    .route(web::post().to(promote_class).wrap(admin_only())),
            )
            .configure(subjects::configure_class_subject_routes)
            .configure(students::configure_class_student_routes)
            .configure(exams::configure_class_exam_routes)
            .configure(marks::configure_class_marks_routes)
            .configure(results::configure_class_result_routes)
            .configure(attendance::configure_class_attendance_routes)
            .configure(fees::configure_class_fee_routes),
    );
}
