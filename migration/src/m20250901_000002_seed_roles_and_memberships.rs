use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Roles {
    Table,
    Name,
}

#[derive(DeriveIden)]
enum Memberships {
    Table,
    Status,
    MinItems,
    MaxItems,
    DiscountPercentage,
}

/// 默认会员等级（按累计购买件数划分）:
/// - Bronze: 0 - 14 件, 0%
/// - Silver: 15 - 29 件, 15%
/// - Gold: 30 件以上, 30%
const MEMBERSHIPS: [(&str, i32, Option<i32>, i32); 3] = [
    ("Bronze", 0, Some(14), 0),
    ("Silver", 15, Some(29), 15),
    ("Gold", 30, None, 30),
];

const ROLES: [&str; 2] = ["Admin", "User"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut roles = Query::insert();
        roles.into_table(Roles::Table).columns([Roles::Name]);
        for name in ROLES {
            roles
                .values([name.into()])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }
        manager.exec_stmt(roles).await?;

        let mut memberships = Query::insert();
        memberships.into_table(Memberships::Table).columns([
            Memberships::Status,
            Memberships::MinItems,
            Memberships::MaxItems,
            Memberships::DiscountPercentage,
        ]);
        for (status, min_items, max_items, discount) in MEMBERSHIPS {
            memberships
                .values([
                    status.into(),
                    min_items.into(),
                    max_items.into(),
                    discount.into(),
                ])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }
        manager.exec_stmt(memberships).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Memberships::Table)
                    .and_where(
                        Expr::col(Memberships::Status)
                            .is_in(MEMBERSHIPS.iter().map(|(status, ..)| *status)),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Roles::Table)
                    .and_where(Expr::col(Roles::Name).is_in(ROLES))
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
