use crate::entities::{
    OrderStatus, order_entity as orders, order_item_entity as order_items,
    product_entity as products,
};
use crate::error::AppResult;
use crate::models::{CartLine, OrderLine};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, FromQueryResult,
    IntoActiveModel, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    Set,
};
use std::collections::HashMap;

#[derive(Debug, FromQueryResult)]
struct QuantityTotal {
    total: Option<i64>,
}

pub struct OrderRepository;

impl OrderRepository {
    pub async fn order_number_exists<C: ConnectionTrait>(
        db: &C,
        order_number: &str,
    ) -> AppResult<bool> {
        let count = orders::Entity::find()
            .filter(orders::Column::OrderNumber.eq(order_number))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    pub async fn create<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
        order_number: &str,
        discount: i32,
    ) -> AppResult<orders::Model> {
        let now = Utc::now();
        Ok(orders::ActiveModel {
            user_id: Set(user_id),
            status: Set(OrderStatus::InProgress),
            order_number: Set(order_number.to_string()),
            discount: Set(discount),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(db)
        .await?)
    }

    /// 按购物车条目写入订单条目快照
    pub async fn insert_lines<C: ConnectionTrait>(
        db: &C,
        order_id: i32,
        lines: &[CartLine],
    ) -> AppResult<()> {
        if lines.is_empty() {
            return Ok(());
        }
        let now = Utc::now();
        let models = lines.iter().map(|line| order_items::ActiveModel {
            order_id: Set(order_id),
            product_id: Set(line.item.product_id),
            quantity: Set(line.item.quantity),
            unit_price: Set(line.item.unit_price),
            created_at: Set(Some(now)),
            ..Default::default()
        });
        order_items::Entity::insert_many(models).exec(db).await?;
        Ok(())
    }

    /// 用户累计购买件数；status 为 None 时统计全部订单
    pub async fn purchased_item_count<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
        status: Option<OrderStatus>,
    ) -> AppResult<i64> {
        let mut query = order_items::Entity::find()
            .select_only()
            .column_as(
                Expr::col((order_items::Entity, order_items::Column::Quantity)).sum(),
                "total",
            )
            .join(JoinType::InnerJoin, order_items::Relation::Order.def())
            .filter(orders::Column::UserId.eq(user_id));
        if let Some(status) = status {
            query = query.filter(orders::Column::Status.eq(status));
        }
        let row = query.into_model::<QuantityTotal>().one(db).await?;
        Ok(row.and_then(|r| r.total).unwrap_or(0))
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: i32,
    ) -> AppResult<Option<orders::Model>> {
        Ok(orders::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn find_for_user<C: ConnectionTrait>(
        db: &C,
        id: i32,
        user_id: i32,
    ) -> AppResult<Option<orders::Model>> {
        Ok(orders::Entity::find_by_id(id)
            .filter(orders::Column::UserId.eq(user_id))
            .one(db)
            .await?)
    }

    /// 用户订单，最新的在前
    pub async fn list_for_user<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
    ) -> AppResult<Vec<orders::Model>> {
        Ok(orders::Entity::find()
            .filter(orders::Column::UserId.eq(user_id))
            .order_by_desc(orders::Column::CreatedAt)
            .order_by_desc(orders::Column::Id)
            .all(db)
            .await?)
    }

    /// 全部订单（后台），最新的在前
    pub async fn list_all<C: ConnectionTrait>(db: &C) -> AppResult<Vec<orders::Model>> {
        Ok(orders::Entity::find()
            .order_by_desc(orders::Column::CreatedAt)
            .order_by_desc(orders::Column::Id)
            .all(db)
            .await?)
    }

    /// 批量读取订单条目（附带商品），按订单 id 分组
    pub async fn lines_for_orders<C: ConnectionTrait>(
        db: &C,
        order_ids: &[i32],
    ) -> AppResult<HashMap<i32, Vec<OrderLine>>> {
        let mut grouped: HashMap<i32, Vec<OrderLine>> = HashMap::new();
        if order_ids.is_empty() {
            return Ok(grouped);
        }
        let rows = order_items::Entity::find()
            .filter(order_items::Column::OrderId.is_in(order_ids.iter().copied()))
            .order_by_asc(order_items::Column::Id)
            .find_also_related(products::Entity)
            .all(db)
            .await?;
        for (item, product) in rows {
            grouped
                .entry(item.order_id)
                .or_default()
                .push(OrderLine { item, product });
        }
        Ok(grouped)
    }

    pub async fn update_status<C: ConnectionTrait>(
        db: &C,
        order: orders::Model,
        status: OrderStatus,
    ) -> AppResult<orders::Model> {
        let mut am = order.into_active_model();
        am.status = Set(status);
        am.updated_at = Set(Some(Utc::now()));
        Ok(am.update(db).await?)
    }
}
