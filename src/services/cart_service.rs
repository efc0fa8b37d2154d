use crate::entities::{cart_item_entity as cart_items, product_entity as products};
use crate::error::{AppError, AppResult};
use crate::models::{AuthUser, CartResponse};
use crate::repositories::{CartRepository, ProductRepository, UserRepository};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

fn ensure_positive(quantity: i32) -> AppResult<()> {
    if quantity <= 0 {
        return Err(AppError::ValidationError(
            "Quantity must be a positive integer".into(),
        ));
    }
    Ok(())
}

/// 购物车只校验库存，不占用库存
fn ensure_available(product: &products::Model, quantity: i32) -> AppResult<()> {
    if product.is_deleted {
        return Err(AppError::ValidationError(
            "This product is no longer available".into(),
        ));
    }
    if quantity > product.quantity {
        return Err(AppError::ValidationError(
            "Not enough stock available".into(),
        ));
    }
    Ok(())
}

#[derive(Clone)]
pub struct CartService {
    pool: DatabaseConnection,
}

impl CartService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 加入购物车
    ///
    /// - 新商品：按当前价格创建条目
    /// - 已有条目：累加数量（合计不得超过库存）
    /// - 已移除的条目：恢复并把数量重置为本次数量
    pub async fn add_item(
        &self,
        auth: &AuthUser,
        product_id: i32,
        quantity: i32,
    ) -> AppResult<cart_items::Model> {
        ensure_positive(quantity)?;

        let txn = self.pool.begin().await?;

        UserRepository::find_by_id(&txn, auth.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;
        let product = ProductRepository::find_by_id(&txn, product_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".into()))?;
        ensure_available(&product, quantity)?;

        let cart = CartRepository::find_or_create_open(&txn, auth.user_id).await?;

        let item = match CartRepository::find_item_by_product(&txn, cart.id, product.id).await? {
            None => CartRepository::create_item(&txn, cart.id, &product, quantity).await?,
            Some(existing) if existing.is_removed() => {
                CartRepository::restore_item(&txn, existing, quantity).await?
            }
            Some(existing) => {
                let combined = existing.quantity.saturating_add(quantity);
                ensure_available(&product, combined)?;
                CartRepository::set_item_quantity(&txn, existing, combined).await?
            }
        };

        txn.commit().await?;
        Ok(item)
    }

    pub async fn get_cart(&self, auth: &AuthUser) -> AppResult<CartResponse> {
        let cart = CartRepository::find_open_for_user(&self.pool, auth.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cart not found".into()))?;
        let lines = CartRepository::live_lines(&self.pool, cart.id).await?;
        Ok(CartResponse::new(cart, lines))
    }

    pub async fn update_item(
        &self,
        auth: &AuthUser,
        cart_id: i32,
        cart_item_id: i32,
        quantity: i32,
    ) -> AppResult<cart_items::Model> {
        ensure_positive(quantity)?;

        let item = Self::owned_live_item(&self.pool, auth, cart_id, cart_item_id).await?;
        let product = ProductRepository::find_by_id(&self.pool, item.product_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".into()))?;
        ensure_available(&product, quantity)?;

        CartRepository::set_item_quantity(&self.pool, item, quantity).await
    }

    /// 软删除条目
    pub async fn remove_item(
        &self,
        auth: &AuthUser,
        cart_id: i32,
        cart_item_id: i32,
    ) -> AppResult<()> {
        let item = Self::owned_live_item(&self.pool, auth, cart_id, cart_item_id).await?;
        CartRepository::tombstone_item(&self.pool, item).await?;
        Ok(())
    }

    async fn owned_live_item<C: ConnectionTrait>(
        db: &C,
        auth: &AuthUser,
        cart_id: i32,
        cart_item_id: i32,
    ) -> AppResult<cart_items::Model> {
        let cart = CartRepository::find_open_owned(db, cart_id, auth.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cart not found or already checked out".into()))?;
        CartRepository::find_live_item(db, cart.id, cart_item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cart item not found".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i32, deleted: bool) -> products::Model {
        products::Model {
            id: 1,
            name: "Tea".into(),
            description: String::new(),
            price: 100,
            quantity: stock,
            category_id: 1,
            brand_id: 1,
            is_deleted: deleted,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_quantity_must_be_positive() {
        assert!(ensure_positive(1).is_ok());
        assert!(matches!(ensure_positive(0), Err(AppError::ValidationError(_))));
        assert!(matches!(ensure_positive(-3), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_availability_checks() {
        assert!(ensure_available(&product(5, false), 5).is_ok());
        match ensure_available(&product(5, false), 6) {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "Not enough stock available"),
            other => panic!("unexpected: {other:?}"),
        }
        match ensure_available(&product(5, true), 1) {
            Err(AppError::ValidationError(msg)) => {
                assert_eq!(msg, "This product is no longer available")
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
