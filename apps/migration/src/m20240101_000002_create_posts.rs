use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_themes::Themes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Posts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Posts::Titulo).string_len(100).not_null())
                    .col(ColumnDef::new(Posts::Texto).text().not_null())
                    .col(
                        ColumnDef::new(Posts::Data)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Posts::TemaId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_postagens_tema")
                            .from(Posts::Table, Posts::TemaId)
                            .to(Themes::Table, Themes::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Posts {
    #[sea_orm(iden = "tb_postagens")]
    Table,
    Id,
    Titulo,
    Texto,
    Data,
    TemaId,
}
