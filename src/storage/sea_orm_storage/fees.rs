//! 收费存储操作

use super::SeaOrmStorage;
use crate::entity::{fee_payments, fee_structures};
use crate::errors::{Result, SchoolSystemError};
use crate::models::fees::entities::{FeeItem, FeePayment};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_fee_item_impl(
        &self,
        class_id: i64,
        name: &str,
        amount: f64,
        due_date: Option<String>,
    ) -> Result<FeeItem> {
        let model = fee_structures::ActiveModel {
            class_id: Set(class_id),
            name: Set(name.to_string()),
            amount: Set(amount),
            due_date: Set(due_date),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("创建收费项目失败", e))?;

        Ok(result.into_fee_item())
    }

    pub async fn get_fee_item_by_id_impl(&self, fee_id: i64) -> Result<Option<FeeItem>> {
        let result = fee_structures::Entity::find_by_id(fee_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询收费项目失败: {e}")))?;

        Ok(result.map(|m| m.into_fee_item()))
    }

    pub async fn list_fee_items_by_class_impl(&self, class_id: i64) -> Result<Vec<FeeItem>> {
        let items = fee_structures::Entity::find()
            .filter(fee_structures::Column::ClassId.eq(class_id))
            .order_by_asc(fee_structures::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询收费项目失败: {e}")))?;

        Ok(items.into_iter().map(|m| m.into_fee_item()).collect())
    }

    pub async fn count_fee_items_by_class_impl(&self, class_id: i64) -> Result<u64> {
        fee_structures::Entity::find()
            .filter(fee_structures::Column::ClassId.eq(class_id))
            .count(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("统计收费项目失败: {e}")))
    }

    /// 缴费记录，最近的在前
    pub async fn list_payments_by_student_impl(&self, student_id: i64) -> Result<Vec<FeePayment>> {
        let payments = fee_payments::Entity::find()
            .filter(fee_payments::Column::StudentId.eq(student_id))
            .order_by_desc(fee_payments::Column::PaidOn)
            .order_by_desc(fee_payments::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询缴费记录失败: {e}")))?;

        Ok(payments.into_iter().map(|m| m.into_payment()).collect())
    }

    /// 该班级收费项目下的缴费记录
    pub async fn list_payments_by_class_impl(&self, class_id: i64) -> Result<Vec<FeePayment>> {
        let payments = fee_payments::Entity::find()
            .inner_join(fee_structures::Entity)
            .filter(fee_structures::Column::ClassId.eq(class_id))
            .order_by_asc(fee_payments::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("查询缴费记录失败: {e}")))?;

        Ok(payments.into_iter().map(|m| m.into_payment()).collect())
    }

    pub async fn record_payment_impl(
        &self,
        student_id: i64,
        fee_id: i64,
        amount: f64,
        paid_on: &str,
        mode: Option<String>,
    ) -> Result<FeePayment> {
        let model = fee_payments::ActiveModel {
            student_id: Set(student_id),
            fee_id: Set(fee_id),
            paid_amount: Set(amount),
            paid_on: Set(paid_on.to_string()),
            mode: Set(mode),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSystemError::from_db("登记缴费失败", e))?;

        Ok(result.into_payment())
    }
}
