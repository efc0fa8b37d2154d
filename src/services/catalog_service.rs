use crate::entities::{
    brand_entity as brands, category_entity as categories, product_entity as products,
};
use crate::error::{AppError, AppResult};
use crate::models::{AuthUser, ProductRequest};
use crate::repositories::{BrandRepository, CategoryRepository, ProductRepository};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

fn validate_product(request: &ProductRequest) -> AppResult<()> {
    if request.name.trim().is_empty() {
        return Err(AppError::ValidationError("Product name is required".into()));
    }
    if request.price < 0 {
        return Err(AppError::ValidationError(
            "Price must not be negative".into(),
        ));
    }
    if request.quantity < 0 {
        return Err(AppError::ValidationError(
            "Quantity must not be negative".into(),
        ));
    }
    Ok(())
}

fn required_name(name: &str, what: &str) -> AppResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::ValidationError(format!("{what} name is required")));
    }
    Ok(name.to_string())
}

/// 商品、品牌、分类的后台维护，全部仅限管理员
#[derive(Clone)]
pub struct CatalogService {
    pool: DatabaseConnection,
}

impl CatalogService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn get_product(&self, auth: &AuthUser, id: i32) -> AppResult<products::Model> {
        auth.require_admin()?;
        ProductRepository::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".into()))
    }

    pub async fn create_product(
        &self,
        auth: &AuthUser,
        request: ProductRequest,
    ) -> AppResult<products::Model> {
        auth.require_admin()?;
        validate_product(&request)?;

        let txn = self.pool.begin().await?;
        Self::ensure_references(&txn, &request).await?;
        let product = ProductRepository::insert(&txn, &request).await?;
        txn.commit().await?;

        log::info!("Product {} ({}) created by {}", product.id, product.name, auth.user_id);
        Ok(product)
    }

    /// 已下架的商品视为不存在，需先恢复再修改
    pub async fn update_product(
        &self,
        auth: &AuthUser,
        id: i32,
        request: ProductRequest,
    ) -> AppResult<products::Model> {
        auth.require_admin()?;
        validate_product(&request)?;

        let txn = self.pool.begin().await?;
        let product = Self::live_product(&txn, id).await?;
        Self::ensure_references(&txn, &request).await?;
        let product = ProductRepository::update(&txn, product, &request).await?;
        txn.commit().await?;

        log::info!("Product {} updated by {}", product.id, auth.user_id);
        Ok(product)
    }

    /// 下架（软删除）；购物车与结算随即拒绝该商品
    pub async fn delete_product(&self, auth: &AuthUser, id: i32) -> AppResult<()> {
        auth.require_admin()?;
        let product = Self::live_product(&self.pool, id).await?;
        ProductRepository::set_deleted(&self.pool, product, true).await?;
        log::info!("Product {} soft-deleted by {}", id, auth.user_id);
        Ok(())
    }

    /// 设置下架标记（用于恢复已下架的商品）
    pub async fn set_product_status(
        &self,
        auth: &AuthUser,
        id: i32,
        is_deleted: bool,
    ) -> AppResult<products::Model> {
        auth.require_admin()?;
        let product = ProductRepository::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".into()))?;
        let product = ProductRepository::set_deleted(&self.pool, product, is_deleted).await?;
        log::info!(
            "Product {} is_deleted={} set by {}",
            id,
            is_deleted,
            auth.user_id
        );
        Ok(product)
    }

    pub async fn get_brand(&self, auth: &AuthUser, id: i32) -> AppResult<brands::Model> {
        auth.require_admin()?;
        Self::brand(&self.pool, id).await
    }

    pub async fn create_brand(&self, auth: &AuthUser, name: &str) -> AppResult<brands::Model> {
        auth.require_admin()?;
        let name = required_name(name, "Brand")?;
        BrandRepository::insert(&self.pool, &name).await
    }

    pub async fn update_brand(
        &self,
        auth: &AuthUser,
        id: i32,
        name: &str,
    ) -> AppResult<brands::Model> {
        auth.require_admin()?;
        let name = required_name(name, "Brand")?;
        let brand = Self::brand(&self.pool, id).await?;
        BrandRepository::rename(&self.pool, brand, &name).await
    }

    /// 仍有商品引用时拒绝删除
    pub async fn delete_brand(&self, auth: &AuthUser, id: i32) -> AppResult<()> {
        auth.require_admin()?;
        let brand = Self::brand(&self.pool, id).await?;
        if ProductRepository::count_for_brand(&self.pool, brand.id).await? > 0 {
            return Err(AppError::ValidationError(
                "Cannot delete brand as it is associated with one or more products".into(),
            ));
        }
        BrandRepository::delete(&self.pool, brand).await?;
        log::info!("Brand {} deleted by {}", id, auth.user_id);
        Ok(())
    }

    pub async fn get_category(&self, auth: &AuthUser, id: i32) -> AppResult<categories::Model> {
        auth.require_admin()?;
        Self::category(&self.pool, id).await
    }

    pub async fn create_category(
        &self,
        auth: &AuthUser,
        name: &str,
    ) -> AppResult<categories::Model> {
        auth.require_admin()?;
        let name = required_name(name, "Category")?;
        CategoryRepository::insert(&self.pool, &name).await
    }

    pub async fn update_category(
        &self,
        auth: &AuthUser,
        id: i32,
        name: &str,
    ) -> AppResult<categories::Model> {
        auth.require_admin()?;
        let name = required_name(name, "Category")?;
        let category = Self::category(&self.pool, id).await?;
        CategoryRepository::rename(&self.pool, category, &name).await
    }

    /// 仍有商品引用时拒绝删除
    pub async fn delete_category(&self, auth: &AuthUser, id: i32) -> AppResult<()> {
        auth.require_admin()?;
        let category = Self::category(&self.pool, id).await?;
        if ProductRepository::count_for_category(&self.pool, category.id).await? > 0 {
            return Err(AppError::ValidationError(
                "Cannot delete category as it is associated with one or more products".into(),
            ));
        }
        CategoryRepository::delete(&self.pool, category).await?;
        log::info!("Category {} deleted by {}", id, auth.user_id);
        Ok(())
    }

    async fn live_product<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<products::Model> {
        ProductRepository::find_by_id(db, id)
            .await?
            .filter(|p| !p.is_deleted)
            .ok_or_else(|| AppError::NotFound("Product not found".into()))
    }

    async fn brand<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<brands::Model> {
        BrandRepository::find_by_id(db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Brand not found".into()))
    }

    async fn category<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<categories::Model> {
        CategoryRepository::find_by_id(db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".into()))
    }

    async fn ensure_references<C: ConnectionTrait>(
        db: &C,
        request: &ProductRequest,
    ) -> AppResult<()> {
        Self::category(db, request.category_id).await?;
        Self::brand(db, request.brand_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, price: i64, quantity: i32) -> ProductRequest {
        ProductRequest {
            name: name.into(),
            description: String::new(),
            price,
            quantity,
            category_id: 1,
            brand_id: 1,
        }
    }

    #[test]
    fn test_validate_product() {
        assert!(validate_product(&request("Tea", 0, 0)).is_ok());
        assert!(validate_product(&request("  ", 100, 1)).is_err());
        assert!(validate_product(&request("Tea", -1, 1)).is_err());
        assert!(validate_product(&request("Tea", 100, -1)).is_err());
    }

    #[test]
    fn test_required_name_trims() {
        assert_eq!(required_name("  Acme ", "Brand").unwrap(), "Acme");
        match required_name("", "Category") {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "Category name is required"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
