mod common;

use common::*;
use storefront_backend::AppError;
use storefront_backend::config::CheckoutConfig;
use storefront_backend::entities::OrderStatus;
use storefront_backend::models::{AuthUser, ProductRequest};
use storefront_backend::services::{CartService, CatalogService, CheckoutService, OrderService};

fn product_request(
    name: &str,
    price: i64,
    quantity: i32,
    category_id: i32,
    brand_id: i32,
) -> ProductRequest {
    ProductRequest {
        name: name.into(),
        description: format!("{name} description"),
        price,
        quantity,
        category_id,
        brand_id,
    }
}

async fn new_product(
    catalog: &CatalogService,
    admin: &AuthUser,
    name: &str,
    price: i64,
    quantity: i32,
) -> anyhow::Result<storefront_backend::entities::product_entity::Model> {
    let category = catalog.create_category(admin, "Drinks").await?;
    let brand = catalog.create_brand(admin, "Acme").await?;
    let product = catalog
        .create_product(admin, product_request(name, price, quantity, category.id, brand.id))
        .await?;
    Ok(product)
}

#[tokio::test]
async fn admin_creates_and_updates_products() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let admin = create_admin(&db).await?;
    let catalog = CatalogService::new(db.clone());

    let product = new_product(&catalog, &admin, "Tea", 250, 10).await?;
    assert_eq!(product.price, 250);
    assert_eq!(product.quantity, 10);
    assert!(!product.is_deleted);

    let updated = catalog
        .update_product(
            &admin,
            product.id,
            product_request("Green Tea", 300, 8, product.category_id, product.brand_id),
        )
        .await?;
    assert_eq!(updated.name, "Green Tea");
    assert_eq!(updated.price, 300);
    assert_eq!(reload_product(&db, product.id).await?.quantity, 8);

    match catalog
        .create_product(&admin, product_request("Cup", 100, 1, product.category_id, 9999))
        .await
    {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Brand not found"),
        other => panic!("unexpected: {other:?}"),
    }
    match catalog
        .create_product(&admin, product_request("Cup", -1, 1, product.category_id, product.brand_id))
        .await
    {
        Err(AppError::ValidationError(msg)) => assert_eq!(msg, "Price must not be negative"),
        other => panic!("unexpected: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn catalog_is_admin_only() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let (_, customer) = create_customer(&db, "alice").await?;
    let product = create_product(&db, "Tea", 100, 5).await?;
    let catalog = CatalogService::new(db.clone());

    assert!(matches!(
        catalog.create_brand(&customer, "Acme").await,
        Err(AppError::Forbidden)
    ));
    assert!(matches!(
        catalog.delete_product(&customer, product.id).await,
        Err(AppError::Forbidden)
    ));
    assert!(matches!(
        catalog
            .create_product(
                &customer,
                product_request("Cup", 100, 1, product.category_id, product.brand_id)
            )
            .await,
        Err(AppError::Forbidden)
    ));
    assert!(!reload_product(&db, product.id).await?.is_deleted);
    Ok(())
}

#[tokio::test]
async fn soft_deleted_product_cannot_be_added_to_cart() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let admin = create_admin(&db).await?;
    let (_, auth) = create_customer(&db, "alice").await?;
    let catalog = CatalogService::new(db.clone());
    let carts = CartService::new(db.clone());
    let product = new_product(&catalog, &admin, "Tea", 100, 5).await?;

    catalog.delete_product(&admin, product.id).await?;
    assert!(reload_product(&db, product.id).await?.is_deleted);

    match carts.add_item(&auth, product.id, 1).await {
        Err(AppError::ValidationError(msg)) => {
            assert_eq!(msg, "This product is no longer available")
        }
        other => panic!("unexpected: {other:?}"),
    }

    // 已下架的商品不能再次下架或修改
    assert!(matches!(
        catalog.delete_product(&admin, product.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        catalog
            .update_product(
                &admin,
                product.id,
                product_request("Tea", 100, 5, product.category_id, product.brand_id)
            )
            .await,
        Err(AppError::NotFound(_))
    ));

    // 恢复后可以重新加入购物车
    let restored = catalog.set_product_status(&admin, product.id, false).await?;
    assert!(!restored.is_deleted);
    let item = carts.add_item(&auth, product.id, 2).await?;
    assert_eq!(item.quantity, 2);
    Ok(())
}

#[tokio::test]
async fn soft_delete_after_add_blocks_checkout() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let admin = create_admin(&db).await?;
    let (user, auth) = create_customer(&db, "alice").await?;
    let catalog = CatalogService::new(db.clone());
    let carts = CartService::new(db.clone());
    let product = new_product(&catalog, &admin, "Tea", 100, 5).await?;
    carts.add_item(&auth, product.id, 2).await?;

    catalog.delete_product(&admin, product.id).await?;

    let checkout = CheckoutService::new(db.clone(), CheckoutConfig::default());
    match checkout.checkout(&auth).await {
        Err(AppError::ValidationError(msg)) => {
            assert_eq!(msg, "Product Tea is no longer available")
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert_eq!(reload_product(&db, product.id).await?.quantity, 5);
    assert!(!carts.get_cart(&auth).await?.checked_out);
    assert!(OrderService::new(db.clone()).list_orders(&auth).await?.is_empty());
    assert_eq!(reload_user(&db, user.id).await?.membership_status, "Bronze");
    Ok(())
}

#[tokio::test]
async fn brand_and_category_delete_blocked_while_referenced() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let admin = create_admin(&db).await?;
    let catalog = CatalogService::new(db.clone());
    let product = new_product(&catalog, &admin, "Tea", 100, 5).await?;

    match catalog.delete_brand(&admin, product.brand_id).await {
        Err(AppError::ValidationError(msg)) => assert_eq!(
            msg,
            "Cannot delete brand as it is associated with one or more products"
        ),
        other => panic!("unexpected: {other:?}"),
    }
    match catalog.delete_category(&admin, product.category_id).await {
        Err(AppError::ValidationError(msg)) => assert_eq!(
            msg,
            "Cannot delete category as it is associated with one or more products"
        ),
        other => panic!("unexpected: {other:?}"),
    }

    let renamed = catalog.update_brand(&admin, product.brand_id, "  Acme Co ").await?;
    assert_eq!(renamed.name, "Acme Co");

    let unused = catalog.create_category(&admin, "Snacks").await?;
    catalog.delete_category(&admin, unused.id).await?;
    assert!(matches!(
        catalog.get_category(&admin, unused.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        catalog.create_brand(&admin, "   ").await,
        Err(AppError::ValidationError(_))
    ));
    Ok(())
}

#[tokio::test]
async fn admin_sees_every_users_orders() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let admin = create_admin(&db).await?;
    let (alice, alice_auth) = create_customer(&db, "alice").await?;
    let (bob, _) = create_customer(&db, "bob").await?;
    let product = create_product(&db, "Tea", 100, 50).await?;
    seed_order(&db, alice.id, product.id, 2, OrderStatus::Completed, "alice001").await?;
    let bobs = seed_order(&db, bob.id, product.id, 3, OrderStatus::InProgress, "bob00001").await?;

    let orders = OrderService::new(db.clone());
    let all = orders.list_all_orders(&admin).await?;
    assert_eq!(all.len(), 2);
    // 最新的在前
    assert_eq!(all[0].order.order_number, "bob00001");

    let one = orders.get_any_order(&admin, bobs.id).await?;
    assert_eq!(one.order.user_id, bob.id);
    assert_eq!(one.items[0].quantity, 3);

    assert!(matches!(
        orders.list_all_orders(&alice_auth).await,
        Err(AppError::Forbidden)
    ));
    assert!(matches!(
        orders.get_any_order(&alice_auth, bobs.id).await,
        Err(AppError::Forbidden)
    ));
    assert!(matches!(
        orders.get_any_order(&admin, 9999).await,
        Err(AppError::NotFound(_))
    ));
    Ok(())
}
