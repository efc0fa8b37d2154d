use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// 商品
/// - price: 单价(分)
/// - quantity: 库存，仅在结算时扣减
/// - is_deleted: 下架标记（软删除）
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: i64,
    pub quantity: i32,
    pub category_id: i32,
    pub brand_id: i32,
    pub is_deleted: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model {
    /// 是否可以购买指定数量
    pub fn can_supply(&self, quantity: i32) -> bool {
        !self.is_deleted && self.quantity >= quantity
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categories::Entity",
        from = "Column::CategoryId",
        to = "super::categories::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::brands::Entity",
        from = "Column::BrandId",
        to = "super::brands::Column::Id"
    )]
    Brand,
}

impl ActiveModelBehavior for ActiveModel {}
