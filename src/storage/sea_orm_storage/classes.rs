//! 班级存储操作

use std::collections::HashSet;

use super::SeaOrmStorage;
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::entity::students;
use crate::errors::{Result, SchoolSystemError};
use crate::models::classes::entities::{Class, PromotionOutcome};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, class_name: &str, section: &str) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_name: Set(class_name.to_string()),
            section: Set(section.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("创建班级失败", e))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 列出全部班级
    pub async fn list_classes_impl(&self) -> Result<Vec<Class>> {
        let classes = Classes::find()
            .order_by_asc(Column::ClassName)
            .order_by_asc(Column::Section)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(classes.into_iter().map(|m| m.into_class()).collect())
    }

    /// 更新班级
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        class_name: &str,
        section: &str,
    ) -> Result<Option<Class>> {
        // 先检查班级是否存在
        let existing = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询班级失败: {e}")))?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.class_name = Set(class_name.to_string());
        model.section = Set(section.to_string());
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("更新班级失败", e))?;

        Ok(Some(result.into_class()))
    }

    /// 删除班级
    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 班级总数
    pub async fn count_classes_impl(&self) -> Result<u64> {
        Classes::find()
            .count(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计班级失败: {e}")))
    }

    /// 升班
    ///
    /// 在同一事务内把源班级学生按学号复制到目标班级。目标班级已有相同学号时跳过；
    /// `move_students` 为 true 时只删除本次成功复制的学生。
    pub async fn promote_students_impl(
        &self,
        source_class_id: i64,
        target_class_id: i64,
        move_students: bool,
    ) -> Result<PromotionOutcome> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let source_students = students::Entity::find()
            .filter(students::Column::ClassId.eq(source_class_id))
            .order_by_asc(students::Column::RollNo)
            .all(&txn)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生失败: {e}")))?;

        let mut taken: HashSet<String> = students::Entity::find()
            .filter(students::Column::ClassId.eq(target_class_id))
            .all(&txn)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询学生失败: {e}")))?
            .into_iter()
            .map(|s| s.roll_no)
            .collect();

        let now = chrono::Utc::now().timestamp();
        let mut copied_ids = Vec::new();
        let mut skipped = 0u64;

        for student in source_students {
            if !taken.insert(student.roll_no.clone()) {
                skipped += 1;
                continue;
            }

            students::ActiveModel {
                name: Set(student.name),
                roll_no: Set(student.roll_no),
                class_id: Set(target_class_id),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| SchoolSystemError::from_db("复制学生失败", e))?;

            copied_ids.push(student.id);
        }

        let mut removed = 0u64;
        if move_students && !copied_ids.is_empty() {
            let result = students::Entity::delete_many()
                .filter(students::Column::Id.is_in(copied_ids.clone()))
                .exec(&txn)
                .await
                .map_err(|e| {
                    SchoolSystemError::database_operation(format!("移除原班级学生失败: {e}"))
                })?;
            removed = result.rows_affected;
        }

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(PromotionOutcome {
            copied: copied_ids.len() as u64,
            skipped,
            removed,
        })
    }
}
