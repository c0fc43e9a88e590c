use super::SeaOrmStorage;
use crate::entity::exams::{ActiveModel, Column, Entity as Exams};
use crate::errors::{Result, SchoolSystemError};
use crate::models::exams::{
    entities::Exam,
    requests::{UpdateExamRequest, normalize_exam_type},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_exam_impl(
        &self,
        class_id: i64,
        name: &str,
        exam_type: Option<String>,
        weight: f64,
    ) -> Result<Exam> {
        let model = ActiveModel {
            class_id: Set(class_id),
            name: Set(name.to_string()),
            exam_type: Set(exam_type),
            weight: Set(weight),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("创建考试失败", e))?;

        Ok(result.into_exam())
    }

    pub async fn get_exam_by_id_impl(&self, exam_id: i64) -> Result<Option<Exam>> {
        let result = Exams::find_by_id(exam_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询考试失败: {e}")))?;

        Ok(result.map(|m| m.into_exam()))
    }

    /// 最新创建的考试在前
    pub async fn list_exams_by_class_impl(&self, class_id: i64) -> Result<Vec<Exam>> {
        let exams = Exams::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询考试列表失败: {e}")))?;

        Ok(exams.into_iter().map(|m| m.into_exam()).collect())
    }

    pub async fn update_exam_impl(
        &self,
        exam_id: i64,
        update: UpdateExamRequest,
    ) -> Result<Option<Exam>> {
        let existing = Exams::find_by_id(exam_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询考试失败: {e}")))?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        if let Some(name) = update.name {
            model.name = Set(name.trim().to_string());
        }
        if let Some(exam_type) = update.exam_type {
            model.exam_type = Set(normalize_exam_type(Some(&exam_type)));
        }
        if let Some(weight) = update.weight {
            model.weight = Set(weight);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("更新考试失败", e))?;

        Ok(Some(result.into_exam()))
    }

    pub async fn delete_exam_impl(&self, exam_id: i64) -> Result<bool> {
        let result = Exams::delete_by_id(exam_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除考试失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_exams_impl(&self) -> Result<u64> {
        Exams::find()
            .count(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计考试失败: {e}")))
    }
}
