//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::marks::{ActiveModel, Column, Entity as Marks};
use crate::errors::{Result, SchoolSystemError};
use crate::models::marks::entities::Mark;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};

impl SeaOrmStorage {
    pub async fn list_marks_by_exam_impl(&self, exam_id: i64) -> Result<Vec<Mark>> {
        let marks = Marks::find()
            .filter(Column::ExamId.eq(exam_id))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(marks.into_iter().map(|m| m.into_mark()).collect())
    }

    pub async fn list_marks_by_student_impl(&self, student_id: i64) -> Result<Vec<Mark>> {
        let marks = Marks::find()
            .filter(Column::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(marks.into_iter().map(|m| m.into_mark()).collect())
    }

    /// 写入成绩，已有记录直接覆盖
    pub async fn save_marks_impl(
        &self,
        student_id: i64,
        exam_id: i64,
        marks: Vec<(i64, f64)>,
    ) -> Result<usize> {
        let now = chrono::Utc::now().timestamp();
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let count = marks.len();
        for (subject_id, value) in marks {
            let model = ActiveModel {
                student_id: Set(student_id),
                subject_id: Set(subject_id),
                exam_id: Set(exam_id),
                marks_obtained: Set(value),
                updated_at: Set(now),
            };

            Marks::insert(model)
                .on_conflict(
                    OnConflict::columns([Column::StudentId, Column::SubjectId, Column::ExamId])
                        .update_columns([Column::MarksObtained, Column::UpdatedAt])
                        .to_owned(),
                )
                .exec_without_returning(&txn)
                .await
                .map_err(|e| SchoolSystemError::from_db("保存成绩失败", e))?;
        }

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(count)
    }
}
