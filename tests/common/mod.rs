#![allow(dead_code)]

use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, Set,
};
use storefront_backend::entities::{
    OrderStatus, brand_entity as brands, category_entity as categories,
    order_entity as orders, order_item_entity as order_items, product_entity as products,
    role_entity as roles, user_entity as users,
};
use storefront_backend::models::AuthUser;

/// 内存 SQLite，执行全部迁移（含初始角色与会员等级）
pub async fn setup_db() -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    // 内存库按连接隔离，只保留一个连接
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn create_user(
    db: &DatabaseConnection,
    username: &str,
    membership_status: &str,
    role: &str,
) -> anyhow::Result<users::Model> {
    let role = roles::Entity::find()
        .filter(roles::Column::Name.eq(role))
        .one(db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("role {role} not seeded"))?;
    let now = Utc::now();
    let user = users::ActiveModel {
        firstname: Set("Test".into()),
        lastname: Set("User".into()),
        username: Set(username.into()),
        email: Set(format!("{username}@example.com")),
        password_hash: Set("not-a-real-hash".into()),
        address: Set("1 Main St".into()),
        telephonenumber: Set("5550100".into()),
        membership_status: Set(membership_status.into()),
        role_id: Set(role.id),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(user)
}

pub fn auth_for(user: &users::Model, role: &str) -> AuthUser {
    AuthUser {
        user_id: user.id,
        username: user.username.clone(),
        role: role.to_string(),
    }
}

pub async fn create_customer(
    db: &DatabaseConnection,
    username: &str,
) -> anyhow::Result<(users::Model, AuthUser)> {
    let user = create_user(db, username, "Bronze", roles::USER).await?;
    let auth = auth_for(&user, roles::USER);
    Ok((user, auth))
}

pub async fn create_admin(db: &DatabaseConnection) -> anyhow::Result<AuthUser> {
    let user = create_user(db, "admin", "Bronze", roles::ADMIN).await?;
    Ok(auth_for(&user, roles::ADMIN))
}

pub async fn create_product(
    db: &DatabaseConnection,
    name: &str,
    price: i64,
    stock: i32,
) -> anyhow::Result<products::Model> {
    let now = Utc::now();
    let category = categories::ActiveModel {
        name: Set(format!("{name} category")),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
        ..Default::default()
    }
    .insert(db)
    .await?;
    let brand = brands::ActiveModel {
        name: Set(format!("{name} brand")),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
        ..Default::default()
    }
    .insert(db)
    .await?;
    let product = products::ActiveModel {
        name: Set(name.into()),
        description: Set(format!("{name} description")),
        price: Set(price),
        quantity: Set(stock),
        category_id: Set(category.id),
        brand_id: Set(brand.id),
        is_deleted: Set(false),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(product)
}

pub async fn reload_product(
    db: &DatabaseConnection,
    id: i32,
) -> anyhow::Result<products::Model> {
    products::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("product {id} missing"))
}

pub async fn set_stock(db: &DatabaseConnection, id: i32, stock: i32) -> anyhow::Result<()> {
    let mut product = reload_product(db, id).await?.into_active_model();
    product.quantity = Set(stock);
    product.update(db).await?;
    Ok(())
}

pub async fn soft_delete_product(db: &DatabaseConnection, id: i32) -> anyhow::Result<()> {
    let mut product = reload_product(db, id).await?.into_active_model();
    product.is_deleted = Set(true);
    product.update(db).await?;
    Ok(())
}

pub async fn reload_user(db: &DatabaseConnection, id: i32) -> anyhow::Result<users::Model> {
    users::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| anyhow::anyhow!("user {id} missing"))
}

/// 直接写入一笔历史订单（单条目）
pub async fn seed_order(
    db: &DatabaseConnection,
    user_id: i32,
    product_id: i32,
    quantity: i32,
    status: OrderStatus,
    order_number: &str,
) -> anyhow::Result<orders::Model> {
    let now = Utc::now();
    let order = orders::ActiveModel {
        user_id: Set(user_id),
        status: Set(status),
        order_number: Set(order_number.into()),
        discount: Set(0),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
        ..Default::default()
    }
    .insert(db)
    .await?;
    order_items::ActiveModel {
        order_id: Set(order.id),
        product_id: Set(product_id),
        quantity: Set(quantity),
        unit_price: Set(100),
        created_at: Set(Some(now)),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(order)
}
