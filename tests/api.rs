//! HTTP 接口集成测试，使用内存 SQLite

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use rust_schoolsystem::cache::{MokaCacheWrapper, ObjectCache};
use rust_schoolsystem::models::users::entities::{User, UserRole};
use rust_schoolsystem::models::users::requests::CreateUserRequest;
use rust_schoolsystem::routes;
use rust_schoolsystem::storage::{SeaOrmStorage, Storage};
use rust_schoolsystem::utils::password::hash_password;

const ADMIN_PASSWORD: &str = "Str0ng-admin-pass";
const TEACHER_PASSWORD: &str = "Str0ng-teacher-pass";

macro_rules! init_app {
    ($storage:expr) => {{
        let storage: Arc<dyn Storage> = $storage.clone();
        let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(100, 60));
        test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .app_data(web::Data::new(cache))
                .configure(routes::configure_app),
        )
        .await
    }};
}

/// 发送请求并解析 JSON 响应
macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

async fn create_user(
    storage: &Arc<dyn Storage>,
    username: &str,
    password: &str,
    role: UserRole,
) -> User {
    storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
            password: hash_password(password).unwrap(),
            role,
            display_name: None,
        })
        .await
        .unwrap()
}

/// 内存库 + 一个管理员（ID 1）+ 一个教师
async fn setup() -> (Arc<dyn Storage>, String, String) {
    let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::new_in_memory().await.unwrap());
    let admin = create_user(&storage, "admin", ADMIN_PASSWORD, UserRole::Admin).await;
    let teacher = create_user(&storage, "teacher", TEACHER_PASSWORD, UserRole::Teacher).await;
    assert_eq!(admin.id, 1);

    let admin_token = admin.generate_token_pair().unwrap().access_token;
    let teacher_token = teacher.generate_token_pair().unwrap().access_token;
    (storage, admin_token, teacher_token)
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

#[actix_web::test]
async fn test_login_and_session_cookie() {
    let (storage, _, _) = setup().await;
    let app = init_app!(storage);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .insert_header(("X-Forwarded-For", "10.20.0.1"))
            .set_json(json!({"username": "admin", "password": "wrong-password"}))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid username or password.");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .insert_header(("X-Forwarded-For", "10.20.0.1"))
            .set_json(json!({"username": "nobody", "password": ADMIN_PASSWORD}))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid username or password.");

    // 输入会被 trim
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .insert_header(("X-Forwarded-For", "10.20.0.1"))
            .set_json(json!({"username": "  admin ", "password": ADMIN_PASSWORD}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "access_token")
        .expect("access_token cookie")
        .into_owned();
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["user"]["username"], "admin");
    assert!(body["data"]["user"].get("password_hash").is_none());

    // cookie 即会话
    let (status, body) = send!(
        app,
        test::TestRequest::get().uri("/api/v1/auth/me").cookie(cookie)
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["role"], "admin");
    assert!(!body["data"]["user"]["last_login"].is_null());
}

#[actix_web::test]
async fn test_requires_login_and_admin_role() {
    let (storage, _, teacher) = setup().await;
    let app = init_app!(storage);

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/v1/classes"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1001);

    let (status, _) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/v1/classes")
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/classes")
            .insert_header(bearer(&teacher))
            .set_json(json!({"class_name": "Grade 5", "section": "a"}))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Access denied. Admin only.");

    let (status, _) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/v1/users")
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_class_and_student_flow() {
    let (storage, admin, teacher) = setup().await;
    let app = init_app!(storage);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/classes")
            .insert_header(bearer(&admin))
            .set_json(json!({"class_name": "  Grade 5 ", "section": "a"}))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["class_name"], "Grade 5");
    assert_eq!(body["data"]["section"], "A");
    let class_id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/classes")
            .insert_header(bearer(&admin))
            .set_json(json!({"class_name": "", "section": "A"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Class name and section are required.");

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/classes")
            .insert_header(bearer(&admin))
            .set_json(json!({"class_name": "Grade 5", "section": "A"}))
    );
    assert_eq!(status, StatusCode::CONFLICT);

    // 教师可以添加学生，一次提交只产生一行
    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/classes/{class_id}/students"))
            .insert_header(bearer(&teacher))
            .set_json(json!({"name": "Asha Rao", "roll_no": "01"}))
    );
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/classes/{class_id}/students"))
            .insert_header(bearer(&teacher))
    );
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Asha Rao");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/classes/{class_id}/students"))
            .insert_header(bearer(&teacher))
            .set_json(json!({"name": "Someone Else", "roll_no": "01"}))
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Roll number already exists in this class!");

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/classes/9999/students")
            .insert_header(bearer(&teacher))
            .set_json(json!({"name": "Ghost", "roll_no": "02"}))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 搜索
    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/v1/students/search?q=%20%20")
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please enter name or roll number to search.");

    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/v1/students/search?q=asha")
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"][0]["section"], "A");

    // 通配符按字面量匹配
    let (_, body) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/v1/students/search?q=%25")
            .insert_header(bearer(&teacher))
    );
    assert_eq!(body["data"]["items"].as_array().unwrap().len(), 0);

    let (status, _) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/v1/classes/abc")
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_marks_and_results() {
    let (storage, admin, teacher) = setup().await;
    let app = init_app!(storage);

    let class = storage.create_class("Grade 6", "B").await.unwrap();
    let maths = storage.create_subject(class.id, "Maths").await.unwrap();
    let english = storage.create_subject(class.id, "English").await.unwrap();
    let asha = storage.create_student(class.id, "Asha", "01").await.unwrap();
    let ravi = storage.create_student(class.id, "Ravi", "02").await.unwrap();

    // 无考试时取最近一次考试失败
    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/classes/{}/results", class.id))
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No exams defined for this class.");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/classes/{}/exams", class.id))
            .insert_header(bearer(&teacher))
            .set_json(json!({"name": "Midterm"}))
    );
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["weight"], 1.0);
    let exam_id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/classes/{}/exams", class.id))
            .insert_header(bearer(&teacher))
            .set_json(json!({"name": "Bad", "weight": 0}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let marks_uri = |student_id: i64| {
        format!(
            "/api/v1/classes/{}/exams/{}/marks/{}",
            class.id, exam_id, student_id
        )
    };

    let (status, _) = send!(
        app,
        test::TestRequest::put()
            .uri(&marks_uri(asha.id))
            .insert_header(bearer(&teacher))
            .set_json(json!({"marks": {(maths.id.to_string()): 95, (english.id.to_string()): 85}}))
    );
    assert_eq!(status, StatusCode::OK);

    // English 缺省记 0 分
    let (status, _) = send!(
        app,
        test::TestRequest::put()
            .uri(&marks_uri(ravi.id))
            .insert_header(bearer(&teacher))
            .set_json(json!({"marks": {(maths.id.to_string()): 50}}))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send!(
        app,
        test::TestRequest::put()
            .uri(&marks_uri(ravi.id))
            .insert_header(bearer(&teacher))
            .set_json(json!({"marks": {(maths.id.to_string()): 101}}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/students/{}/result", asha.id))
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["summary"]["total"], 180.0);
    assert_eq!(body["data"]["summary"]["max_total"], 200.0);
    assert_eq!(body["data"]["summary"]["grade"], "A+");
    assert_eq!(body["data"]["summary"]["status"], "PASS");
    // 科目按名称排序
    assert_eq!(body["data"]["subjects"][0]["subject_name"], "English");

    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/classes/{}/results", class.id))
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["subject_count"], 2);
    let rows = body["data"]["rows"].as_array().unwrap();
    assert_eq!(rows[0]["name"], "Asha");
    assert_eq!(rows[1]["name"], "Ravi");
    assert_eq!(rows[1]["percentage"], 25.0);
    assert_eq!(rows[1]["status"], "FAIL");

    // CSV 必须指定考试
    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/classes/{}/results/csv", class.id))
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Exam required for CSV export.");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!(
                "/api/v1/classes/{}/results/csv?exam_id={}",
                class.id, exam_id
            ))
            .insert_header(bearer(&teacher))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains(&format!("class_{}_exam_{}_results.csv", class.id, exam_id)));
    let csv = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Roll No,Name,Total,Max (200),Percentage,Grade,Status")
    );
    assert_eq!(lines.next(), Some("01,Asha,180,200,90.00,A+,PASS"));

    // 第二次考试，权重 3
    let final_exam = storage
        .create_exam(class.id, "Final", None, 3.0)
        .await
        .unwrap();
    storage
        .save_marks(asha.id, final_exam.id, vec![(maths.id, 50.0), (english.id, 50.0)])
        .await
        .unwrap();

    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/students/{}/result/overall", asha.id))
            .insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_weight"], 4.0);
    // (1 × 90 + 3 × 50) / 4
    assert_eq!(body["data"]["weighted_percentage"], 60.0);
    assert_eq!(body["data"]["grade"], "B");
}

#[cfg(feature = "pdf")]
#[actix_web::test]
async fn test_result_pdf_download() {
    let (storage, _, teacher) = setup().await;
    let app = init_app!(storage);

    let class = storage.create_class("Grade 7", "A").await.unwrap();
    storage.create_subject(class.id, "Science").await.unwrap();
    let student = storage.create_student(class.id, "Meera", "07").await.unwrap();
    let exam = storage.create_exam(class.id, "Unit Test", None, 1.0).await.unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/students/{}/result/pdf", student.id))
            .insert_header(bearer(&teacher))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("Content-Type").unwrap(), "application/pdf");
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains(&format!("result_{}_exam_{}.pdf", student.id, exam.id)));
    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"%PDF"));
}

#[cfg(not(feature = "pdf"))]
#[actix_web::test]
async fn test_result_pdf_without_renderer() {
    let (storage, _, teacher) = setup().await;
    let app = init_app!(storage);

    let class = storage.create_class("Grade 7", "A").await.unwrap();
    let student = storage.create_student(class.id, "Meera", "07").await.unwrap();
    storage.create_exam(class.id, "Unit Test", None, 1.0).await.unwrap();

    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/students/{}/result/pdf", student.id))
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(
        body["message"],
        "PDF generation requires the `pdf` feature. Rebuild with it enabled."
    );
}

#[actix_web::test]
async fn test_attendance_flow() {
    let (storage, _, teacher) = setup().await;
    let app = init_app!(storage);

    let class = storage.create_class("Grade 4", "C").await.unwrap();
    let asha = storage.create_student(class.id, "Asha", "01").await.unwrap();
    storage.create_student(class.id, "Ravi", "02").await.unwrap();

    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/classes/{}/attendance?date=2025-13-01", class.id))
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid date. Use YYYY-MM-DD.");

    // 未点名时默认出勤
    let (_, body) = send!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/classes/{}/attendance?date=2025-06-02", class.id))
            .insert_header(bearer(&teacher))
    );
    assert_eq!(body["data"]["recorded"], false);
    assert_eq!(body["data"]["rows"][1]["status"], "P");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/classes/{}/attendance", class.id))
            .insert_header(bearer(&teacher))
            .set_json(json!({"date": "2025-06-02", "present": [asha.id]}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["present"], 1);
    assert_eq!(body["data"]["absent"], 1);

    let (_, body) = send!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/classes/{}/attendance?date=2025-06-02", class.id))
            .insert_header(bearer(&teacher))
    );
    assert_eq!(body["data"]["recorded"], true);
    assert_eq!(body["data"]["rows"][0]["status"], "P");
    assert_eq!(body["data"]["rows"][1]["status"], "A");

    // 同一天再次保存覆盖旧记录
    send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/classes/{}/attendance", class.id))
            .insert_header(bearer(&teacher))
            .set_json(json!({"date": "2025-06-02", "present": []}))
    );
    let (_, body) = send!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/classes/{}/attendance/summary", class.id))
            .insert_header(bearer(&teacher))
    );
    assert_eq!(body["data"]["total_sessions"], 1);
    assert_eq!(body["data"]["rows"][0]["present_days"], 0);
}

#[actix_web::test]
async fn test_fees_flow() {
    let (storage, admin, teacher) = setup().await;
    let app = init_app!(storage);

    let class = storage.create_class("Grade 8", "A").await.unwrap();
    let other = storage.create_class("Grade 9", "A").await.unwrap();
    let asha = storage.create_student(class.id, "Asha", "01").await.unwrap();
    let foreign_fee = storage
        .create_fee_item(other.id, "Lab", 100.0, None)
        .await
        .unwrap();

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/classes/{}/fees", class.id))
            .insert_header(bearer(&admin))
            .set_json(json!({"name": "Tuition", "amount": 0}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Valid fee name and amount required.");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/classes/{}/fees", class.id))
            .insert_header(bearer(&admin))
            .set_json(json!({"name": "Tuition", "amount": 500, "due_date": "2025-07-01"}))
    );
    assert_eq!(status, StatusCode::CREATED);
    let fee_id = body["data"]["id"].as_i64().unwrap();

    let payments_uri = format!("/api/v1/students/{}/payments", asha.id);
    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri(&payments_uri)
            .insert_header(bearer(&teacher))
            .set_json(json!({"fee_id": fee_id, "amount": -5}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Payment amount must be positive.");

    // 学生不存在时优先返回 404
    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/students/9999/payments")
            .insert_header(bearer(&teacher))
            .set_json(json!({"fee_id": fee_id, "amount": -5}))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Student not found.");

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri(&payments_uri)
            .insert_header(bearer(&teacher))
            .set_json(json!({"fee_id": foreign_fee.id, "amount": 50}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri(&payments_uri)
            .insert_header(bearer(&teacher))
            .set_json(json!({"fee_id": fee_id, "amount": 200, "mode": "Cash"}))
    );
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/students/{}/fees", asha.id))
            .insert_header(bearer(&teacher))
    );
    assert_eq!(body["data"]["total_due"], 500.0);
    assert_eq!(body["data"]["paid"], 200.0);
    assert_eq!(body["data"]["balance"], 300.0);
    assert_eq!(body["data"]["payments"][0]["fee_name"], "Tuition");

    let (_, body) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/v1/dashboard/fees")
            .insert_header(bearer(&teacher))
    );
    assert_eq!(body["data"]["items"][0]["student_count"], 1);
    assert_eq!(body["data"]["items"][0]["fee_item_count"], 1);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/classes/{}/fees/csv", class.id))
            .insert_header(bearer(&teacher))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let csv = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(csv.contains("01,Asha,500.00,200.00,300.00"));
}

#[actix_web::test]
async fn test_promotion_skips_existing_roll_numbers() {
    let (storage, admin, _) = setup().await;
    let app = init_app!(storage);

    let source = storage.create_class("Grade 5", "A").await.unwrap();
    let target = storage.create_class("Grade 6", "A").await.unwrap();
    storage.create_student(source.id, "Asha", "01").await.unwrap();
    storage.create_student(source.id, "Ravi", "02").await.unwrap();
    storage.create_student(target.id, "Existing", "02").await.unwrap();

    let promote_uri = format!("/api/v1/classes/{}/promote", source.id);
    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri(&promote_uri)
            .insert_header(bearer(&admin))
            .set_json(json!({"target_class_id": source.id}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Select a different target class.");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri(&promote_uri)
            .insert_header(bearer(&admin))
            .set_json(json!({"target_class_id": target.id, "move": true}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["copied"], 1);
    assert_eq!(body["data"]["skipped"], 1);
    assert_eq!(body["data"]["removed"], 1);

    let target_students = storage.list_students_by_class(target.id).await.unwrap();
    assert_eq!(target_students.len(), 2);
    let source_students = storage.list_students_by_class(source.id).await.unwrap();
    // 被跳过的学生留在原班级
    assert_eq!(source_students.len(), 1);
    assert_eq!(source_students[0].roll_no, "02");
}

#[actix_web::test]
async fn test_admin_edits_subjects_exams_and_classes() {
    let (storage, admin, teacher) = setup().await;
    let app = init_app!(storage);

    let class = storage.create_class("Grade 5", "A").await.unwrap();
    let other = storage.create_class("Grade 5", "B").await.unwrap();
    let asha = storage.create_student(class.id, "Asha", "01").await.unwrap();
    let maths = storage.create_subject(class.id, "Maths").await.unwrap();
    let science = storage.create_subject(class.id, "Science").await.unwrap();
    let exam = storage
        .create_exam(class.id, "Unit Test", None, 1.0)
        .await
        .unwrap();
    storage
        .save_marks(asha.id, exam.id, vec![(maths.id, 70.0), (science.id, 60.0)])
        .await
        .unwrap();

    // 教师不能改科目
    let subject_uri = format!("/api/v1/subjects/{}", maths.id);
    let (status, _) = send!(
        app,
        test::TestRequest::put()
            .uri(&subject_uri)
            .insert_header(bearer(&teacher))
            .set_json(json!({"subject_name": "Mathematics"}))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send!(
        app,
        test::TestRequest::put()
            .uri(&subject_uri)
            .insert_header(bearer(&admin))
            .set_json(json!({"subject_name": "  Mathematics "}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["subject_name"], "Mathematics");

    let (status, body) = send!(
        app,
        test::TestRequest::put()
            .uri(&subject_uri)
            .insert_header(bearer(&admin))
            .set_json(json!({"subject_name": "  "}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Subject name is required.");

    let (status, _) = send!(
        app,
        test::TestRequest::delete()
            .uri(&subject_uri)
            .insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send!(
        app,
        test::TestRequest::delete()
            .uri(&subject_uri)
            .insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Subject not found.");
    // 删除科目同时删除该科目成绩
    let marks = storage.list_marks_by_exam(exam.id).await.unwrap();
    assert_eq!(marks.len(), 1);
    assert_eq!(marks[0].subject_id, science.id);

    let exam_uri = format!("/api/v1/exams/{}", exam.id);
    let (status, body) = send!(
        app,
        test::TestRequest::put()
            .uri(&exam_uri)
            .insert_header(bearer(&admin))
            .set_json(json!({"name": "Unit Test 1", "weight": 2.5}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Unit Test 1");
    assert_eq!(body["data"]["weight"], 2.5);

    let (status, _) = send!(
        app,
        test::TestRequest::put()
            .uri(&exam_uri)
            .insert_header(bearer(&admin))
            .set_json(json!({"name": "Unit Test 1", "weight": 0}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send!(
        app,
        test::TestRequest::delete()
            .uri(&exam_uri)
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = send!(
        app,
        test::TestRequest::delete()
            .uri(&exam_uri)
            .insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::OK);
    assert!(storage.list_marks_by_student(asha.id).await.unwrap().is_empty());
    let (status, body) = send!(
        app,
        test::TestRequest::delete()
            .uri(&exam_uri)
            .insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Exam not found.");

    // 分班会转成大写，与已有班级冲突
    let class_uri = format!("/api/v1/classes/{}", class.id);
    let (status, body) = send!(
        app,
        test::TestRequest::put()
            .uri(&class_uri)
            .insert_header(bearer(&admin))
            .set_json(json!({"class_name": "Grade 5", "section": "b"}))
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Class with this name and section already exists.");

    let (status, body) = send!(
        app,
        test::TestRequest::delete()
            .uri(&class_uri)
            .insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Class deleted.");
    assert!(storage.get_student_by_id(asha.id).await.unwrap().is_none());

    let (status, body) = send!(
        app,
        test::TestRequest::delete()
            .uri(&class_uri)
            .insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Class not found.");

    let (status, _) = send!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/classes/{}", other.id))
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_user_management() {
    let (storage, admin, _) = setup().await;
    let app = init_app!(storage);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(bearer(&admin))
            .set_json(json!({"username": "teacher", "password": "An0ther-pass", "role": "teacher"}))
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 2004);

    let (status, _) = send!(
        app,
        test::TestRequest::delete()
            .uri("/api/v1/users/1")
            .insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send!(
        app,
        test::TestRequest::delete()
            .uri("/api/v1/users/2")
            .insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send!(
        app,
        test::TestRequest::delete()
            .uri("/api/v1/users/2")
            .insert_header(bearer(&admin))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_embedded_pages() {
    let (storage, _, _) = setup().await;
    let app = init_app!(storage);

    for uri in ["/", "/howto", "/some/unknown/page"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        assert_eq!(
            resp.headers().get("Content-Type").unwrap(),
            "text/html; charset=utf-8"
        );
    }

    let (status, _) = send!(app, test::TestRequest::get().uri("/api/v1/nothing-here"));
    assert_eq!(status, StatusCode::NOT_FOUND);
}
