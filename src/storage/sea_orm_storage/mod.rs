//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod attendance;
mod classes;
mod exams;
mod fees;
mod marks;
mod students;
mod subjects;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolSystemError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实例
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 连接数据库并执行迁移；数据库文件不存在时自动创建
    pub async fn connect(url: &str, pool_size: u32, timeout_secs: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, timeout_secs).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout_secs).await?
        };

        Self::migrate(&db).await?;
        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 内存数据库，单连接保证所有查询看到同一个库
    pub async fn new_in_memory() -> Result<Self> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| SchoolSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opt)
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        let db = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);
        Self::migrate(&db).await?;

        Ok(Self { db })
    }

    async fn migrate(db: &DatabaseConnection) -> Result<()> {
        Migrator::up(db, None)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("数据库迁移失败: {e}")))
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(
        url: &str,
        pool_size: u32,
        timeout_secs: u64,
    ) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-16000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size.max(1))
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout_secs))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(
        url: &str,
        pool_size: u32,
        timeout_secs: u64,
    ) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size.max(1))
            .min_connections(1)
            .connect_timeout(Duration::from_secs(timeout_secs))
            .acquire_timeout(Duration::from_secs(timeout_secs))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url.ends_with(".sqlite3")
        {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user_password(&self, id: i64, password_hash: &str) -> Result<bool> {
        self.update_user_password_impl(id, password_hash).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 班级
    async fn create_class(&self, class_name: &str, section: &str) -> Result<Class> {
        self.create_class_impl(class_name, section).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn list_classes(&self) -> Result<Vec<Class>> {
        self.list_classes_impl().await
    }

    async fn update_class(
        &self,
        class_id: i64,
        class_name: &str,
        section: &str,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, class_name, section).await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    async fn count_classes(&self) -> Result<u64> {
        self.count_classes_impl().await
    }

    async fn promote_students(
        &self,
        source_class_id: i64,
        target_class_id: i64,
        move_students: bool,
    ) -> Result<PromotionOutcome> {
        self.promote_students_impl(source_class_id, target_class_id, move_students)
            .await
    }

    // 科目
    async fn create_subject(&self, class_id: i64, subject_name: &str) -> Result<Subject> {
        self.create_subject_impl(class_id, subject_name).await
    }

    async fn get_subject_by_id(&self, subject_id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(subject_id).await
    }

    async fn list_subjects_by_class(&self, class_id: i64) -> Result<Vec<Subject>> {
        self.list_subjects_by_class_impl(class_id).await
    }

    async fn update_subject(
        &self,
        subject_id: i64,
        subject_name: &str,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(subject_id, subject_name).await
    }

    async fn delete_subject(&self, subject_id: i64) -> Result<bool> {
        self.delete_subject_impl(subject_id).await
    }

    // 学生
    async fn create_student(&self, class_id: i64, name: &str, roll_no: &str) -> Result<Student> {
        self.create_student_impl(class_id, name, roll_no).await
    }

    async fn get_student_by_id(&self, student_id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(student_id).await
    }

    async fn get_student_with_class(&self, student_id: i64) -> Result<Option<StudentWithClass>> {
        self.get_student_with_class_impl(student_id).await
    }

    async fn list_students_by_class(&self, class_id: i64) -> Result<Vec<Student>> {
        self.list_students_by_class_impl(class_id).await
    }

    async fn update_student(
        &self,
        student_id: i64,
        name: &str,
        roll_no: &str,
    ) -> Result<Option<Student>> {
        self.update_student_impl(student_id, name, roll_no).await
    }

    async fn delete_student(&self, student_id: i64) -> Result<bool> {
        self.delete_student_impl(student_id).await
    }

    async fn search_students(&self, term: &str) -> Result<Vec<StudentWithClass>> {
        self.search_students_impl(term).await
    }

    async fn count_students(&self) -> Result<u64> {
        self.count_students_impl().await
    }

    async fn count_students_by_class(&self, class_id: i64) -> Result<u64> {
        self.count_students_by_class_impl(class_id).await
    }

    // 考试
    async fn create_exam(
        &self,
        class_id: i64,
        name: &str,
        exam_type: Option<String>,
        weight: f64,
    ) -> Result<Exam> {
        self.create_exam_impl(class_id, name, exam_type, weight)
            .await
    }

    async fn get_exam_by_id(&self, exam_id: i64) -> Result<Option<Exam>> {
        self.get_exam_by_id_impl(exam_id).await
    }

    async fn list_exams_by_class(&self, class_id: i64) -> Result<Vec<Exam>> {
        self.list_exams_by_class_impl(class_id).await
    }

    async fn update_exam(&self, exam_id: i64, update: UpdateExamRequest) -> Result<Option<Exam>> {
        self.update_exam_impl(exam_id, update).await
    }

    async fn delete_exam(&self, exam_id: i64) -> Result<bool> {
        self.delete_exam_impl(exam_id).await
    }

    async fn count_exams(&self) -> Result<u64> {
        self.count_exams_impl().await
    }

    // 成绩
    async fn list_marks_by_exam(&self, exam_id: i64) -> Result<Vec<Mark>> {
        self.list_marks_by_exam_impl(exam_id).await
    }

    async fn list_marks_by_student(&self, student_id: i64) -> Result<Vec<Mark>> {
        self.list_marks_by_student_impl(student_id).await
    }

    async fn save_marks(
        &self,
        student_id: i64,
        exam_id: i64,
        marks: Vec<(i64, f64)>,
    ) -> Result<usize> {
        self.save_marks_impl(student_id, exam_id, marks).await
    }

    // 考勤
    async fn get_attendance_session(
        &self,
        class_id: i64,
        date: &str,
    ) -> Result<Option<AttendanceSession>> {
        self.get_attendance_session_impl(class_id, date).await
    }

    async fn list_attendance_records(&self, session_id: i64) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance_records_impl(session_id).await
    }

    async fn save_attendance(
        &self,
        class_id: i64,
        date: &str,
        statuses: Vec<(i64, AttendanceStatus)>,
    ) -> Result<AttendanceSession> {
        self.save_attendance_impl(class_id, date, statuses).await
    }

    async fn list_attendance_sessions_by_class(
        &self,
        class_id: i64,
    ) -> Result<Vec<AttendanceSession>> {
        self.list_attendance_sessions_by_class_impl(class_id).await
    }

    async fn list_attendance_records_by_class(
        &self,
        class_id: i64,
    ) -> Result<Vec<AttendanceRecord>> {
        self.list_attendance_records_by_class_impl(class_id).await
    }

    // 收费
    async fn create_fee_item(
        &self,
        class_id: i64,
        name: &str,
        amount: f64,
        due_date: Option<String>,
    ) -> Result<FeeItem> {
        self.create_fee_item_impl(class_id, name, amount, due_date)
            .await
    }

    async fn get_fee_item_by_id(&self, fee_id: i64) -> Result<Option<FeeItem>> {
        self.get_fee_item_by_id_impl(fee_id).await
    }

    async fn list_fee_items_by_class(&self, class_id: i64) -> Result<Vec<FeeItem>> {
        self.list_fee_items_by_class_impl(class_id).await
    }

    async fn count_fee_items_by_class(&self, class_id: i64) -> Result<u64> {
        self.count_fee_items_by_class_impl(class_id).await
    }

    async fn list_payments_by_student(&self, student_id: i64) -> Result<Vec<FeePayment>> {
        self.list_payments_by_student_impl(student_id).await
    }

    async fn list_payments_by_class(&self, class_id: i64) -> Result<Vec<FeePayment>> {
        self.list_payments_by_class_impl(class_id).await
    }

    async fn record_payment(
        &self,
        student_id: i64,
        fee_id: i64,
        amount: f64,
        paid_on: &str,
        mode: Option<String>,
    ) -> Result<FeePayment> {
        self.record_payment_impl(student_id, fee_id, amount, paid_on, mode)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::entities::AttendanceStatus;
    use crate::storage::Storage;

    struct Fixture {
        class_id: i64,
        student_id: i64,
        subject_id: i64,
        exam_id: i64,
        fee_id: i64,
        session_id: i64,
    }

    /// 一个班级，带科目、学生、考试、成绩、考勤和缴费
    async fn seed_class(storage: &SeaOrmStorage) -> Fixture {
        let class = storage.create_class("Grade 7", "A").await.unwrap();
        let subject = storage.create_subject(class.id, "Maths").await.unwrap();
        let student = storage.create_student(class.id, "Asha", "01").await.unwrap();
        let exam = storage
            .create_exam(class.id, "Midterm", None, 1.0)
            .await
            .unwrap();
        storage
            .save_marks(student.id, exam.id, vec![(subject.id, 88.0)])
            .await
            .unwrap();
        let session = storage
            .save_attendance(
                class.id,
                "2025-03-07",
                vec![(student.id, AttendanceStatus::Present)],
            )
            .await
            .unwrap();
        let fee = storage
            .create_fee_item(class.id, "Tuition", 500.0, None)
            .await
            .unwrap();
        storage
            .record_payment(student.id, fee.id, 200.0, "2025-03-08", None)
            .await
            .unwrap();

        Fixture {
            class_id: class.id,
            student_id: student.id,
            subject_id: subject.id,
            exam_id: exam.id,
            fee_id: fee.id,
            session_id: session.id,
        }
    }

    #[actix_web::test]
    async fn test_delete_student_cascades() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let f = seed_class(&storage).await;

        assert_eq!(storage.list_marks_by_student(f.student_id).await.unwrap().len(), 1);
        assert!(storage.delete_student(f.student_id).await.unwrap());

        assert!(storage.list_marks_by_student(f.student_id).await.unwrap().is_empty());
        assert!(storage.list_payments_by_student(f.student_id).await.unwrap().is_empty());
        assert!(
            storage
                .list_attendance_records(f.session_id)
                .await
                .unwrap()
                .is_empty()
        );
        // 班级本身的数据不受影响
        assert!(storage.get_fee_item_by_id(f.fee_id).await.unwrap().is_some());
        assert!(storage.get_subject_by_id(f.subject_id).await.unwrap().is_some());
        assert!(!storage.delete_student(f.student_id).await.unwrap());
    }

    #[actix_web::test]
    async fn test_delete_subject_and_exam_cascade_marks() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let f = seed_class(&storage).await;
        let other = storage.create_subject(f.class_id, "Science").await.unwrap();
        storage
            .save_marks(f.student_id, f.exam_id, vec![(f.subject_id, 88.0), (other.id, 70.0)])
            .await
            .unwrap();

        assert!(storage.delete_subject(f.subject_id).await.unwrap());
        let marks = storage.list_marks_by_exam(f.exam_id).await.unwrap();
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].subject_id, other.id);

        assert!(storage.delete_exam(f.exam_id).await.unwrap());
        assert!(storage.list_marks_by_student(f.student_id).await.unwrap().is_empty());
        assert!(storage.get_exam_by_id(f.exam_id).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_delete_class_cascades() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let f = seed_class(&storage).await;
        let kept = storage.create_class("Grade 8", "A").await.unwrap();
        storage.create_student(kept.id, "Ravi", "01").await.unwrap();

        assert!(storage.delete_class(f.class_id).await.unwrap());

        assert!(storage.get_class_by_id(f.class_id).await.unwrap().is_none());
        assert!(storage.list_subjects_by_class(f.class_id).await.unwrap().is_empty());
        assert!(storage.list_students_by_class(f.class_id).await.unwrap().is_empty());
        assert!(storage.list_exams_by_class(f.class_id).await.unwrap().is_empty());
        assert!(storage.list_fee_items_by_class(f.class_id).await.unwrap().is_empty());
        assert!(
            storage
                .list_attendance_sessions_by_class(f.class_id)
                .await
                .unwrap()
                .is_empty()
        );
        assert!(
            storage
                .list_attendance_records(f.session_id)
                .await
                .unwrap()
                .is_empty()
        );
        assert!(storage.list_marks_by_student(f.student_id).await.unwrap().is_empty());
        assert!(storage.list_payments_by_student(f.student_id).await.unwrap().is_empty());
        assert!(storage.get_student_by_id(f.student_id).await.unwrap().is_none());

        assert_eq!(storage.count_students().await.unwrap(), 1);
        assert!(!storage.delete_class(f.class_id).await.unwrap());
    }

    #[actix_web::test]
    async fn test_search_returns_every_match() {
        let storage = SeaOrmStorage::new_in_memory().await.unwrap();
        let class = storage.create_class("Grade 1", "A").await.unwrap();
        for n in 0..250 {
            storage
                .create_student(class.id, &format!("Kid {n}"), &format!("{n:03}"))
                .await
                .unwrap();
        }
        storage.create_student(class.id, "Asha", "999").await.unwrap();

        let hits = storage.search_students("Kid").await.unwrap();
        assert_eq!(hits.len(), 250);
        assert_eq!(hits[0].student.roll_no, "000");
        assert_eq!(hits[249].student.roll_no, "249");
    }

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("school.db").unwrap(),
            "sqlite://school.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite::memory:").unwrap(),
            "sqlite::memory:"
        );
        assert!(SeaOrmStorage::build_database_url("postgres://localhost/school").is_ok());
        assert!(SeaOrmStorage::build_database_url("ftp://nope").is_err());
    }
}
