mod common;

use common::*;
use storefront_backend::AppError;
use storefront_backend::config::CheckoutConfig;
use storefront_backend::entities::OrderStatus;
use storefront_backend::services::{CartService, CheckoutService, OrderService};

#[tokio::test]
async fn orders_are_listed_newest_first_with_lines() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let (_, auth) = create_customer(&db, "alice").await?;
    let tea = create_product(&db, "Tea", 100, 50).await?;
    let cup = create_product(&db, "Cup", 250, 50).await?;
    let carts = CartService::new(db.clone());
    let checkout = CheckoutService::new(db.clone(), CheckoutConfig::default());

    carts.add_item(&auth, tea.id, 1).await?;
    let first = checkout.checkout(&auth).await?;
    carts.add_item(&auth, tea.id, 2).await?;
    carts.add_item(&auth, cup.id, 1).await?;
    let second = checkout.checkout(&auth).await?;

    let orders = OrderService::new(db.clone()).list_orders(&auth).await?;
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].order.id, second.order.id);
    assert_eq!(orders[1].order.id, first.order.id);
    assert_eq!(orders[0].items.len(), 2);
    assert_eq!(orders[0].items[1].product_name.as_deref(), Some("Cup"));
    assert_eq!(orders[0].order.membership_status, "Bronze");
    Ok(())
}

#[tokio::test]
async fn orders_are_private_to_their_owner() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let (alice, alice_auth) = create_customer(&db, "alice").await?;
    let (_, bob_auth) = create_customer(&db, "bob").await?;
    let tea = create_product(&db, "Tea", 100, 50).await?;
    let order = seed_order(&db, alice.id, tea.id, 2, OrderStatus::InProgress, "abcd1234").await?;

    let service = OrderService::new(db.clone());
    let found = service.get_order(&alice_auth, order.id).await?;
    assert_eq!(found.order.order_number, "abcd1234");
    assert_eq!(found.items[0].quantity, 2);

    assert!(matches!(
        service.get_order(&bob_auth, order.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(service.list_orders(&bob_auth).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn only_admin_can_change_order_status() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let (alice, alice_auth) = create_customer(&db, "alice").await?;
    let admin = create_admin(&db).await?;
    let tea = create_product(&db, "Tea", 100, 50).await?;
    let order = seed_order(&db, alice.id, tea.id, 2, OrderStatus::InProgress, "abcd1234").await?;
    let service = OrderService::new(db.clone());

    assert!(matches!(
        service
            .update_order_status(&alice_auth, order.id, OrderStatus::Completed)
            .await,
        Err(AppError::Forbidden)
    ));

    let updated = service
        .update_order_status(&admin, order.id, OrderStatus::Cancelled)
        .await?;
    assert_eq!(updated.order.status, OrderStatus::Cancelled);
    assert_eq!(updated.order.order_number, "abcd1234");
    assert_eq!(updated.items.len(), 1);

    assert!(matches!(
        service
            .update_order_status(&admin, 9999, OrderStatus::Completed)
            .await,
        Err(AppError::NotFound(_))
    ));
    Ok(())
}
