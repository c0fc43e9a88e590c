//! 考勤存储操作

use super::SeaOrmStorage;
use crate::entity::{attendance_records, attendance_sessions};
use crate::errors::{Result, SchoolSystemError};
use crate::models::attendance::entities::{
    AttendanceRecord, AttendanceSession, AttendanceStatus,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    pub async fn get_attendance_session_impl(
        &self,
        class_id: i64,
        date: &str,
    ) -> Result<Option<AttendanceSession>> {
        let result = attendance_sessions::Entity::find()
            .filter(attendance_sessions::Column::ClassId.eq(class_id))
            .filter(attendance_sessions::Column::Date.eq(date))
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询考勤失败: {e}")))?;

        Ok(result.map(|m| m.into_session()))
    }

    pub async fn list_attendance_records_impl(
        &self,
        session_id: i64,
    ) -> Result<Vec<AttendanceRecord>> {
        let records = attendance_records::Entity::find()
            .filter(attendance_records::Column::SessionId.eq(session_id))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询考勤记录失败: {e}")))?;

        Ok(records.into_iter().map(|m| m.into_record()).collect())
    }

    /// 重写某个班级某天的考勤（单个事务）
    pub async fn save_attendance_impl(
        &self,
        class_id: i64,
        date: &str,
        statuses: Vec<(i64, AttendanceStatus)>,
    ) -> Result<AttendanceSession> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = attendance_sessions::Entity::find()
            .filter(attendance_sessions::Column::ClassId.eq(class_id))
            .filter(attendance_sessions::Column::Date.eq(date))
            .one(&txn)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询考勤失败: {e}")))?;

        let session = match existing {
            Some(session) => session,
            None => attendance_sessions::ActiveModel {
                class_id: Set(class_id),
                date: Set(date.to_string()),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| SchoolSystemError::from_db("创建考勤失败", e))?,
        };

        attendance_records::Entity::delete_many()
            .filter(attendance_records::Column::SessionId.eq(session.id))
            .exec(&txn)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("清除考勤记录失败: {e}")))?;

        if !statuses.is_empty() {
            let records = statuses
                .into_iter()
                .map(|(student_id, status)| attendance_records::ActiveModel {
                    session_id: Set(session.id),
                    student_id: Set(student_id),
                    status: Set(status.to_string()),
                    ..Default::default()
                });

            attendance_records::Entity::insert_many(records)
                .exec_without_returning(&txn)
                .await
                .map_err(|e| SchoolSystemError::from_db("写入考勤记录失败", e))?;
        }

        txn.commit()
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(session.into_session())
    }

    pub async fn list_attendance_sessions_by_class_impl(
        &self,
        class_id: i64,
    ) -> Result<Vec<AttendanceSession>> {
        let sessions = attendance_sessions::Entity::find()
            .filter(attendance_sessions::Column::ClassId.eq(class_id))
            .order_by_asc(attendance_sessions::Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询考勤失败: {e}")))?;

        Ok(sessions.into_iter().map(|m| m.into_session()).collect())
    }

    /// 班级全部场次下的考勤记录
    pub async fn list_attendance_records_by_class_impl(
        &self,
        class_id: i64,
    ) -> Result<Vec<AttendanceRecord>> {
        let records = attendance_records::Entity::find()
            .inner_join(attendance_sessions::Entity)
            .filter(attendance_sessions::Column::ClassId.eq(class_id))
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询考勤记录失败: {e}")))?;

        Ok(records.into_iter().map(|m| m.into_record()).collect())
    }
}
