use crate::models::{
    attendance::entities::{AttendanceRecord, AttendanceSession, AttendanceStatus},
    classes::entities::{Class, PromotionOutcome},
    exams::{entities::Exam, requests::UpdateExamRequest},
    fees::entities::{FeeItem, FeePayment},
    marks::entities::Mark,
    students::entities::{Student, StudentWithClass},
    subjects::entities::Subject,
    users::{
        entities::User,
        requests::{CreateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;
use std::sync::Arc;

pub mod sea_orm_storage;

pub use sea_orm_storage::SeaOrmStorage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段需已是哈希值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新密码
    async fn update_user_password(&self, id: i64, password_hash: &str) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 用户总数
    async fn count_users(&self) -> Result<u64>;

    /// 班级管理方法
    async fn create_class(&self, class_name: &str, section: &str) -> Result<Class>;
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 按班级名、分班排序
    async fn list_classes(&self) -> Result<Vec<Class>>;
    async fn update_class(
        &self,
        class_id: i64,
        class_name: &str,
        section: &str,
    ) -> Result<Option<Class>>;
    // 删除班级（级联删除科目、学生、考试、成绩、考勤和收费）
    async fn delete_class(&self, class_id: i64) -> Result<bool>;
    async fn count_classes(&self) -> Result<u64>;
    // 升班：把学生复制到目标班级，学号已存在的跳过
    async fn promote_students(
        &self,
        source_class_id: i64,
        target_class_id: i64,
        move_students: bool,
    ) -> Result<PromotionOutcome>;

    /// 科目管理方法
    async fn create_subject(&self, class_id: i64, subject_name: &str) -> Result<Subject>;
    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>>;
    async fn list_subjects_by_class(&self, class_id: i64) -> Result<Vec<Subject>>;
    async fn update_subject(&self, subject_id: i64, subject_name: &str)
    -> Result<Option<Subject>>;
    async fn delete_subject(&self, subject_id: i64) -> Result<bool>;

    /// 学生管理方法
    async fn create_student(&self, class_id: i64, name: &str, roll_no: &str) -> Result<Student>;
    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>>;
    async fn get_student_with_class(&self, student_id: i64) -> Result<Option<StudentWithClass>>;
    // 按学号排序
    async fn list_students_by_class(&self, class_id: i64) -> Result<Vec<Student>>;
    async fn update_student(
        &self,
        student_id: i64,
        name: &str,
        roll_no: &str,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, student_id: i64) -> Result<bool>;
    // 按姓名或学号模糊搜索
    async fn search_students(&self, term: &str) -> Result<Vec<StudentWithClass>>;
    async fn count_students(&self) -> Result<u64>;
    async fn count_students_by_class(&self, class_id: i64) -> Result<u64>;

    /// 考试管理方法
    async fn create_exam(
        &self,
        class_id: i64,
        name: &str,
        exam_type: Option<String>,
        weight: f64,
    ) -> Result<Exam>;
    async fn get_exam_by_id(&self, exam_id: i64) -> Result<Option<Exam>>;
    // 最新的在前
    async fn list_exams_by_class(&self, class_id: i64) -> Result<Vec<Exam>>;
    async fn update_exam(&self, exam_id: i64, update: UpdateExamRequest) -> Result<Option<Exam>>;
    async fn delete_exam(&self, exam_id: i64) -> Result<bool>;
    async fn count_exams(&self) -> Result<u64>;

    /// 成绩方法
    async fn list_marks_by_exam(&self, exam_id: i64) -> Result<Vec<Mark>>;
    async fn list_marks_by_student(&self, student_id: i64) -> Result<Vec<Mark>>;
    // 覆盖写入学生某次考试的成绩 (subject_id, marks)
    async fn save_marks(&self, student_id: i64, exam_id: i64, marks: Vec<(i64, f64)>)
    -> Result<usize>;

    /// 考勤方法
    async fn get_attendance_session(
        &self,
        class_id: i64,
        date: &str,
    ) -> Result<Option<AttendanceSession>>;
    async fn list_attendance_records(&self, session_id: i64) -> Result<Vec<AttendanceRecord>>;
    // 重写某天的考勤
    async fn save_attendance(
        &self,
        class_id: i64,
        date: &str,
        statuses: Vec<(i64, AttendanceStatus)>,
    ) -> Result<AttendanceSession>;
    async fn list_attendance_sessions_by_class(
        &self,
        class_id: i64,
    ) -> Result<Vec<AttendanceSession>>;
    async fn list_attendance_records_by_class(
        &self,
        class_id: i64,
    ) -> Result<Vec<AttendanceRecord>>;

    /// 收费方法
    async fn create_fee_item(
        &self,
        class_id: i64,
        name: &str,
        amount: f64,
        due_date: Option<String>,
    ) -> Result<FeeItem>;
    async fn get_fee_item_by_id(&self, fee_id: i64) -> Result<Option<FeeItem>>;
    async fn list_fee_items_by_class(&self, class_id: i64) -> Result<Vec<FeeItem>>;
    async fn count_fee_items_by_class(&self, class_id: i64) -> Result<u64>;
    // 缴费日期倒序
    async fn list_payments_by_student(&self, student_id: i64) -> Result<Vec<FeePayment>>;
    // 该班级收费项目下的全部缴费
    async fn list_payments_by_class(&self, class_id: i64) -> Result<Vec<FeePayment>>;
    async fn record_payment(
        &self,
        student_id: i64,
        fee_id: i64,
        amount: f64,
        paid_on: &str,
        mode: Option<String>,
    ) -> Result<FeePayment>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
