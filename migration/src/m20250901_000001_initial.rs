use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Roles {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

/// 会员等级表：status 为等级名称 (Bronze / Silver / Gold)
#[derive(DeriveIden)]
enum Memberships {
    Table,
    Id,
    Status,
    MinItems,
    MaxItems,
    DiscountPercentage,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Firstname,
    Lastname,
    Username,
    Email,
    PasswordHash,
    Address,
    Telephonenumber,
    MembershipStatus,
    RoleId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Brands {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Description,
    Price,
    Quantity,
    CategoryId,
    BrandId,
    IsDeleted,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Carts {
    Table,
    Id,
    UserId,
    CheckedOut,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CartItems {
    Table,
    Id,
    CartId,
    ProductId,
    Quantity,
    UnitPrice,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    Id,
    UserId,
    Status,
    OrderNumber,
    Discount,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum OrderItems {
    Table,
    Id,
    OrderId,
    ProductId,
    Quantity,
    UnitPrice,
    CreatedAt,
}

fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn timestamp_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .default(Expr::current_timestamp())
        .null()
        .to_owned()
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(&mut id_col(Roles::Id))
                    .col(
                        ColumnDef::new(Roles::Name)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(&mut timestamp_col(Roles::CreatedAt))
                    .col(&mut timestamp_col(Roles::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Memberships::Table)
                    .if_not_exists()
                    .col(&mut id_col(Memberships::Id))
                    .col(
                        ColumnDef::new(Memberships::Status)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Memberships::MinItems)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    // NULL = 无上限
                    .col(ColumnDef::new(Memberships::MaxItems).integer().null())
                    .col(
                        ColumnDef::new(Memberships::DiscountPercentage)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(&mut timestamp_col(Memberships::CreatedAt))
                    .col(&mut timestamp_col(Memberships::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // membership_status 只保存等级名称，不建外键：删除等级由应用层检查
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(&mut id_col(Users::Id))
                    .col(ColumnDef::new(Users::Firstname).string_len(255).not_null())
                    .col(ColumnDef::new(Users::Lastname).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Users::Username)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string_len(255).not_null())
                    .col(ColumnDef::new(Users::Address).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Users::Telephonenumber)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::MembershipStatus)
                            .string_len(32)
                            .not_null()
                            .default("Bronze"),
                    )
                    .col(ColumnDef::new(Users::RoleId).integer().not_null())
                    .col(&mut timestamp_col(Users::CreatedAt))
                    .col(&mut timestamp_col(Users::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_role_id")
                            .from(Users::Table, Users::RoleId)
                            .to(Roles::Table, Roles::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(&mut id_col(Categories::Id))
                    .col(ColumnDef::new(Categories::Name).string_len(255).not_null())
                    .col(&mut timestamp_col(Categories::CreatedAt))
                    .col(&mut timestamp_col(Categories::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Brands::Table)
                    .if_not_exists()
                    .col(&mut id_col(Brands::Id))
                    .col(ColumnDef::new(Brands::Name).string_len(255).not_null())
                    .col(&mut timestamp_col(Brands::CreatedAt))
                    .col(&mut timestamp_col(Brands::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // price 单位为分；quantity 为库存
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(&mut id_col(Products::Id))
                    .col(ColumnDef::new(Products::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Products::Description).text().not_null())
                    .col(ColumnDef::new(Products::Price).big_integer().not_null())
                    .col(
                        ColumnDef::new(Products::Quantity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Products::CategoryId).integer().not_null())
                    .col(ColumnDef::new(Products::BrandId).integer().not_null())
                    .col(
                        ColumnDef::new(Products::IsDeleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(&mut timestamp_col(Products::CreatedAt))
                    .col(&mut timestamp_col(Products::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_category_id")
                            .from(Products::Table, Products::CategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_brand_id")
                            .from(Products::Table, Products::BrandId)
                            .to(Brands::Table, Brands::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Carts::Table)
                    .if_not_exists()
                    .col(&mut id_col(Carts::Id))
                    .col(ColumnDef::new(Carts::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(Carts::CheckedOut)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(&mut timestamp_col(Carts::CreatedAt))
                    .col(&mut timestamp_col(Carts::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_carts_user_id")
                            .from(Carts::Table, Carts::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_carts_user_checked_out")
                    .table(Carts::Table)
                    .col(Carts::UserId)
                    .col(Carts::CheckedOut)
                    .to_owned(),
            )
            .await?;

        // unit_price 为加入购物车时的价格快照；deleted_at 为软删除标记
        manager
            .create_table(
                Table::create()
                    .table(CartItems::Table)
                    .if_not_exists()
                    .col(&mut id_col(CartItems::Id))
                    .col(ColumnDef::new(CartItems::CartId).integer().not_null())
                    .col(ColumnDef::new(CartItems::ProductId).integer().not_null())
                    .col(ColumnDef::new(CartItems::Quantity).integer().not_null())
                    .col(ColumnDef::new(CartItems::UnitPrice).big_integer().not_null())
                    .col(
                        ColumnDef::new(CartItems::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(&mut timestamp_col(CartItems::CreatedAt))
                    .col(&mut timestamp_col(CartItems::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_items_cart_id")
                            .from(CartItems::Table, CartItems::CartId)
                            .to(Carts::Table, Carts::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_items_product_id")
                            .from(CartItems::Table, CartItems::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一购物车同一商品只保留一行（软删除后重新加入会复用该行）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_cart_items_cart_product")
                    .table(CartItems::Table)
                    .col(CartItems::CartId)
                    .col(CartItems::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(&mut id_col(Orders::Id))
                    .col(ColumnDef::new(Orders::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(Orders::Status)
                            .string_len(20)
                            .not_null()
                            .default("in_progress"),
                    )
                    .col(ColumnDef::new(Orders::OrderNumber).string_len(32).not_null())
                    .col(
                        ColumnDef::new(Orders::Discount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(&mut timestamp_col(Orders::CreatedAt))
                    .col(&mut timestamp_col(Orders::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_user_id")
                            .from(Orders::Table, Orders::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(OrderItems::Table)
                    .if_not_exists()
                    .col(&mut id_col(OrderItems::Id))
                    .col(ColumnDef::new(OrderItems::OrderId).integer().not_null())
                    .col(ColumnDef::new(OrderItems::ProductId).integer().not_null())
                    .col(ColumnDef::new(OrderItems::Quantity).integer().not_null())
                    .col(ColumnDef::new(OrderItems::UnitPrice).big_integer().not_null())
                    .col(&mut timestamp_col(OrderItems::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_items_order_id")
                            .from(OrderItems::Table, OrderItems::OrderId)
                            .to(Orders::Table, Orders::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_items_product_id")
                            .from(OrderItems::Table, OrderItems::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_order_items_order_id")
                    .table(OrderItems::Table)
                    .col(OrderItems::OrderId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderItems::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Orders::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CartItems::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Carts::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Brands::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Memberships::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Roles::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
