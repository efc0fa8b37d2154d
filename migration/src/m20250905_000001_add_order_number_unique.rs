use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Orders {
    Table,
    OrderNumber,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 订单号唯一（生成时会重试，这里兜底）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_orders_order_number")
                    .table(Orders::Table)
                    .col(Orders::OrderNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uq_orders_order_number")
                    .table(Orders::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
