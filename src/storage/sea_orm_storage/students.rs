//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::classes;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, SchoolSystemError};
use crate::models::students::entities::{Student, StudentWithClass};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

fn with_class(student: Student, class: Option<classes::Model>) -> StudentWithClass {
    let (class_name, section) = class
        .map(|c| (c.class_name, c.section))
        .unwrap_or_default();
    StudentWithClass {
        student,
        class_name,
        section,
    }
}

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(
        &self,
        class_id: i64,
        name: &str,
        roll_no: &str,
    ) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(name.to_string()),
            roll_no: Set(roll_no.to_string()),
            class_id: Set(class_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("创建学生失败", e))?;

        Ok(result.into_student())
    }

    pub async fn get_student_by_id_impl(&self, student_id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 查询学生及所在班级
    pub async fn get_student_with_class_impl(
        &self,
        student_id: i64,
    ) -> Result<Option<StudentWithClass>> {
        let result = Students::find_by_id(student_id)
            .find_also_related(classes::Entity)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|(student, class)| with_class(student.into_student(), class)))
    }

    /// 按学号排序
    pub async fn list_students_by_class_impl(&self, class_id: i64) -> Result<Vec<Student>> {
        let students = Students::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::RollNo)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 更新学生
    pub async fn update_student_impl(
        &self,
        student_id: i64,
        name: &str,
        roll_no: &str,
    ) -> Result<Option<Student>> {
        let existing = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生失败: {e}")))?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.name = Set(name.to_string());
        model.roll_no = Set(roll_no.to_string());
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("更新学生失败", e))?;

        Ok(Some(result.into_student()))
    }

    pub async fn delete_student_impl(&self, student_id: i64) -> Result<bool> {
        let result = Students::delete_by_id(student_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按姓名或学号子串搜索，结果按班级名、分班、学号排序
    pub async fn search_students_impl(&self, term: &str) -> Result<Vec<StudentWithClass>> {
        let rows = Students::find()
            .find_also_related(classes::Entity)
            .filter(
                Condition::any()
                    .add(Column::Name.like(contains_pattern(term)))
                    .add(Column::RollNo.like(contains_pattern(term))),
            )
            .order_by_asc(classes::Column::ClassName)
            .order_by_asc(classes::Column::Section)
            .order_by_asc(Column::RollNo)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("搜索学生失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(student, class)| with_class(student.into_student(), class))
            .collect())
    }

    pub async fn count_students_impl(&self) -> Result<u64> {
        Students::find()
            .count(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计学生失败: {e}")))
    }

    pub async fn count_students_by_class_impl(&self, class_id: i64) -> Result<u64> {
        Students::find()
            .filter(Column::ClassId.eq(class_id))
            .count(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计学生失败: {e}")))
    }
}
