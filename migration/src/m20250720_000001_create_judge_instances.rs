use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建评测实例注册表
        manager
            .create_table(
                Table::create()
                    .table(JudgeInstances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JudgeInstances::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(JudgeInstances::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(JudgeInstances::BaseUrl)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(JudgeInstances::AuthToken).string().null())
                    .col(
                        ColumnDef::new(JudgeInstances::Enabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(JudgeInstances::Healthy)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(JudgeInstances::LastCheckedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(JudgeInstances::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JudgeInstances::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JudgeInstances::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum JudgeInstances {
    Table,
    Id,
    Name,
    BaseUrl,
    AuthToken,
    Enabled,
    Healthy,
    LastCheckedAt,
    CreatedAt,
    UpdatedAt,
}
