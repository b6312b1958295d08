use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250110_000000_create_items::Items;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Points::Table)
                    .if_not_exists()
                    .col(pk_auto(Points::Id))
                    .col(string(Points::Name))
                    .col(string(Points::Email))
                    .col(string(Points::Whatsapp))
                    .col(double(Points::Latitude))
                    .col(double(Points::Longitude))
                    .col(string(Points::City))
                    .col(string(Points::Uf))
                    .col(string(Points::Image))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_points_city")
                    .table(Points::Table)
                    .col(Points::City)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_points_uf")
                    .table(Points::Table)
                    .col(Points::Uf)
                    .to_owned(),
            )
            .await?;

        // Association table with a composite primary key, so a point
        // cannot list the same item twice
        manager
            .create_table(
                Table::create()
                    .table(PointItems::Table)
                    .if_not_exists()
                    .col(integer(PointItems::PointId))
                    .col(integer(PointItems::ItemId))
                    .primary_key(
                        Index::create()
                            .col(PointItems::PointId)
                            .col(PointItems::ItemId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_point_items_point")
                            .from(PointItems::Table, PointItems::PointId)
                            .to(Points::Table, Points::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_point_items_item")
                            .from(PointItems::Table, PointItems::ItemId)
                            .to(Items::Table, Items::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_point_items_item_id")
                    .table(PointItems::Table)
                    .col(PointItems::ItemId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PointItems::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Points::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Points {
    Table,
    Id,
    Name,
    Email,
    Whatsapp,
    Latitude,
    Longitude,
    City,
    Uf,
    Image,
}

#[derive(DeriveIden)]
enum PointItems {
    Table,
    PointId,
    ItemId,
}
