use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Actor::Table)
                    .if_not_exists()
                    .col(pk_auto(Actor::Id))
                    .col(string_len(Actor::Name, 200))
                    .col(string(Actor::DateOfBirth))
                    .col(text(Actor::Biography).default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_actor_name")
                    .table(Actor::Table)
                    .col(Actor::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(pk_auto(Movie::Id))
                    .col(string_len(Movie::Title, 200))
                    .col(text(Movie::Summary))
                    .col(integer(Movie::Duration))
                    .col(string(Movie::ReleaseDate))
                    .col(string_len(Movie::TrailerUrl, 200).default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movie_release_date")
                    .table(Movie::Table)
                    .col(Movie::ReleaseDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Movie::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Actor::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Actor {
    Table,
    Id,
    Name,
    DateOfBirth,
    Biography,
}

#[derive(DeriveIden)]
pub(crate) enum Movie {
    Table,
    Id,
    Title,
    Summary,
    Duration,
    ReleaseDate,
    TrailerUrl,
}
