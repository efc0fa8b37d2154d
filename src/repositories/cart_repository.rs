use crate::entities::{
    cart_entity as carts, cart_item_entity as cart_items, product_entity as products,
};
use crate::error::{AppError, AppResult};
use crate::models::CartLine;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

pub struct CartRepository;

impl CartRepository {
    /// 用户当前未结算的购物车
    pub async fn find_open_for_user<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
    ) -> AppResult<Option<carts::Model>> {
        Ok(carts::Entity::find()
            .filter(carts::Column::UserId.eq(user_id))
            .filter(carts::Column::CheckedOut.eq(false))
            .order_by_asc(carts::Column::Id)
            .one(db)
            .await?)
    }

    /// 按 id 查找属于该用户且未结算的购物车
    pub async fn find_open_owned<C: ConnectionTrait>(
        db: &C,
        cart_id: i32,
        user_id: i32,
    ) -> AppResult<Option<carts::Model>> {
        Ok(carts::Entity::find_by_id(cart_id)
            .filter(carts::Column::UserId.eq(user_id))
            .filter(carts::Column::CheckedOut.eq(false))
            .one(db)
            .await?)
    }

    /// 查找或创建未结算购物车（一个用户只保留一个）
    pub async fn find_or_create_open<C: ConnectionTrait>(
        db: &C,
        user_id: i32,
    ) -> AppResult<carts::Model> {
        if let Some(cart) = Self::find_open_for_user(db, user_id).await? {
            return Ok(cart);
        }
        let now = Utc::now();
        let cart = carts::ActiveModel {
            user_id: Set(user_id),
            checked_out: Set(false),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(db)
        .await?;
        log::info!("Created cart {} for user {}", cart.id, user_id);
        Ok(cart)
    }

    /// 结算后关闭购物车（终态）
    pub async fn close<C: ConnectionTrait>(db: &C, cart: carts::Model) -> AppResult<carts::Model> {
        let mut am = cart.into_active_model();
        am.checked_out = Set(true);
        am.updated_at = Set(Some(Utc::now()));
        Ok(am.update(db).await?)
    }

    /// 查找购物车中某商品的条目（包含已软删除的）
    pub async fn find_item_by_product<C: ConnectionTrait>(
        db: &C,
        cart_id: i32,
        product_id: i32,
    ) -> AppResult<Option<cart_items::Model>> {
        Ok(cart_items::Entity::find()
            .filter(cart_items::Column::CartId.eq(cart_id))
            .filter(cart_items::Column::ProductId.eq(product_id))
            .one(db)
            .await?)
    }

    /// 查找未删除的条目
    pub async fn find_live_item<C: ConnectionTrait>(
        db: &C,
        cart_id: i32,
        item_id: i32,
    ) -> AppResult<Option<cart_items::Model>> {
        Ok(cart_items::Entity::find_by_id(item_id)
            .filter(cart_items::Column::CartId.eq(cart_id))
            .filter(cart_items::Column::DeletedAt.is_null())
            .one(db)
            .await?)
    }

    /// 购物车中未删除的条目及其商品
    pub async fn live_lines<C: ConnectionTrait>(db: &C, cart_id: i32) -> AppResult<Vec<CartLine>> {
        let rows = cart_items::Entity::find()
            .filter(cart_items::Column::CartId.eq(cart_id))
            .filter(cart_items::Column::DeletedAt.is_null())
            .order_by_asc(cart_items::Column::Id)
            .find_also_related(products::Entity)
            .all(db)
            .await?;

        rows.into_iter()
            .map(|(item, product)| match product {
                Some(product) => Ok(CartLine { item, product }),
                None => Err(AppError::NotFound(format!(
                    "Product {} not found",
                    item.product_id
                ))),
            })
            .collect()
    }

    pub async fn create_item<C: ConnectionTrait>(
        db: &C,
        cart_id: i32,
        product: &products::Model,
        quantity: i32,
    ) -> AppResult<cart_items::Model> {
        let now = Utc::now();
        Ok(cart_items::ActiveModel {
            cart_id: Set(cart_id),
            product_id: Set(product.id),
            quantity: Set(quantity),
            unit_price: Set(product.price),
            deleted_at: Set(None),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(db)
        .await?)
    }

    pub async fn set_item_quantity<C: ConnectionTrait>(
        db: &C,
        item: cart_items::Model,
        quantity: i32,
    ) -> AppResult<cart_items::Model> {
        let mut am = item.into_active_model();
        am.quantity = Set(quantity);
        am.updated_at = Set(Some(Utc::now()));
        Ok(am.update(db).await?)
    }

    /// 恢复软删除的条目，数量重置为本次请求的数量
    pub async fn restore_item<C: ConnectionTrait>(
        db: &C,
        item: cart_items::Model,
        quantity: i32,
    ) -> AppResult<cart_items::Model> {
        let mut am = item.into_active_model();
        am.deleted_at = Set(None);
        am.quantity = Set(quantity);
        am.updated_at = Set(Some(Utc::now()));
        Ok(am.update(db).await?)
    }

    pub async fn tombstone_item<C: ConnectionTrait>(
        db: &C,
        item: cart_items::Model,
    ) -> AppResult<cart_items::Model> {
        let now = Utc::now();
        let mut am = item.into_active_model();
        am.deleted_at = Set(Some(now));
        am.updated_at = Set(Some(now));
        Ok(am.update(db).await?)
    }
}
