use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 会员等级
/// - status: 等级名称 (唯一)，用户表以名称引用
/// - min_items / max_items: 累计购买件数区间（闭区间，max_items 为 NULL 表示无上限）
/// - discount_percentage: 折扣百分比 (0 - 100)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "memberships")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub status: String,
    pub min_items: i32,
    pub max_items: Option<i32>,
    pub discount_percentage: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model {
    /// 累计件数是否落在本等级区间内
    pub fn contains(&self, item_count: i64) -> bool {
        let above_min = item_count >= i64::from(self.min_items);
        let below_max = self
            .max_items
            .is_none_or(|max| item_count <= i64::from(max));
        above_min && below_max
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
