use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_create_catalog::{Actor, Movie};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MovieCast::Table)
                    .if_not_exists()
                    .col(pk_auto(MovieCast::Id))
                    .col(integer(MovieCast::MovieId))
                    .col(integer(MovieCast::ActorId))
                    .col(string_len(MovieCast::CharacterName, 200))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_cast_movie")
                            .from(MovieCast::Table, MovieCast::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_cast_actor")
                            .from(MovieCast::Table, MovieCast::ActorId)
                            .to(Actor::Table, Actor::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_cast_unique")
                    .table(MovieCast::Table)
                    .col(MovieCast::MovieId)
                    .col(MovieCast::ActorId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_cast_actor")
                    .table(MovieCast::Table)
                    .col(MovieCast::ActorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MovieCast::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum MovieCast {
    Table,
    Id,
    MovieId,
    ActorId,
    CharacterName,
}
