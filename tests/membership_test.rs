mod common;

use common::*;
use storefront_backend::AppError;
use storefront_backend::entities::OrderStatus;
use storefront_backend::services::{MembershipService, OrderService};

#[tokio::test]
async fn seeded_tiers_are_listed_in_threshold_order() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let service = MembershipService::new(db.clone());

    let tiers = service.list_tiers().await?;
    let names: Vec<&str> = tiers.iter().map(|t| t.status.as_str()).collect();
    assert_eq!(names, ["Bronze", "Silver", "Gold"]);
    assert_eq!(tiers[1].min_items, 15);
    assert_eq!(tiers[1].max_items, Some(29));
    assert_eq!(tiers[2].max_items, None);
    assert_eq!(tiers[2].discount_percentage, 30);

    let silver = service.get_tier(tiers[1].id).await?;
    assert_eq!(silver.status, "Silver");
    assert!(matches!(
        service.get_tier(9999).await,
        Err(AppError::NotFound(_))
    ));
    Ok(())
}

#[tokio::test]
async fn recompute_counts_completed_orders_only() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let (user, auth) = create_customer(&db, "alice").await?;
    let admin = create_admin(&db).await?;
    let product = create_product(&db, "Tea", 100, 100).await?;
    seed_order(&db, user.id, product.id, 20, OrderStatus::Completed, "done0001").await?;
    let pending =
        seed_order(&db, user.id, product.id, 20, OrderStatus::InProgress, "open0001").await?;
    seed_order(&db, user.id, product.id, 50, OrderStatus::Cancelled, "void0001").await?;

    let service = MembershipService::new(db.clone());
    assert_eq!(service.recompute_for_user(&auth, user.id).await?, "Silver");
    assert_eq!(reload_user(&db, user.id).await?.membership_status, "Silver");

    OrderService::new(db.clone())
        .update_order_status(&admin, pending.id, OrderStatus::Completed)
        .await?;
    assert_eq!(service.recompute_for_user(&auth, user.id).await?, "Gold");
    assert_eq!(reload_user(&db, user.id).await?.membership_status, "Gold");
    Ok(())
}

#[tokio::test]
async fn recompute_for_missing_user_is_not_found() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let (_, auth) = create_customer(&db, "alice").await?;
    match MembershipService::new(db.clone())
        .recompute_for_user(&auth, 4242)
        .await
    {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "User not found"),
        other => panic!("unexpected: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn delete_tier_requires_admin_and_no_holders() -> anyhow::Result<()> {
    let db = setup_db().await?;
    let (_, customer) = create_customer(&db, "alice").await?;
    let admin = create_admin(&db).await?;
    let service = MembershipService::new(db.clone());
    let tiers = service.list_tiers().await?;
    let bronze = tiers[0].id;
    let gold = tiers[2].id;

    assert!(matches!(
        service.delete_tier(&customer, gold).await,
        Err(AppError::Forbidden)
    ));

    match service.delete_tier(&admin, bronze).await {
        Err(AppError::ValidationError(msg)) => {
            assert_eq!(msg, "Cannot delete membership that is assigned to a user")
        }
        other => panic!("unexpected: {other:?}"),
    }

    service.delete_tier(&admin, gold).await?;
    assert_eq!(service.list_tiers().await?.len(), 2);
    assert!(matches!(
        service.delete_tier(&admin, gold).await,
        Err(AppError::NotFound(_))
    ));
    Ok(())
}
