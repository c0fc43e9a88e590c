pub mod auth;

pub mod users;

pub mod dashboard;

pub mod classes;

pub mod subjects;

pub mod students;

pub mod exams;

pub mod marks;

pub mod results;

pub mod attendance;

pub mod fees;

pub mod frontend;

use actix_web::web;

use crate::middlewares::RequireRole;
use crate::models::users::entities::UserRole;
use crate::utils::{json_error_handler, query_error_handler};

pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use dashboard::configure_dashboard_routes;
pub use exams::configure_exam_routes;
pub use frontend::configure_frontend_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
pub use users::configure_user_routes;

/// 仅管理员可访问，放在 RequireJWT 内层
pub(crate) fn admin_only() -> RequireRole {
    RequireRole::new(&UserRole::Admin)
}

/// 注册全部路由和参数错误处理器
///
/// 页面路由是 fallback，必须最后注册。
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .configure(configure_auth_routes)
        .configure(configure_user_routes)
        .configure(configure_dashboard_routes)
        .configure(configure_classes_routes)
        .configure(configure_subject_routes)
        .configure(configure_student_routes)
        .configure(configure_exam_routes)
        .configure(configure_frontend_routes);
}
