use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Movie::Table)
                    .if_not_exists()
                    .col(pk_auto(Movie::Id))
                    .col(integer_null(Movie::ExternalId))
                    .col(string(Movie::Title))
                    .col(string_uniq(Movie::Slug))
                    .col(string_null(Movie::PosterUrl))
                    .col(text_null(Movie::Overview))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Clue::Table)
                    .if_not_exists()
                    .col(pk_auto(Clue::Id))
                    .col(integer(Clue::MovieId))
                    .col(integer(Clue::OrderIndex))
                    .col(text(Clue::Text))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clue_movie_id")
                            .from(Clue::Table, Clue::MovieId)
                            .to(Movie::Table, Movie::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clue_movie_id")
                    .table(Clue::Table)
                    .col(Clue::MovieId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Clue::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Movie::Table).to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Movie {
    Table,
    Id,
    ExternalId,
    Title,
    Slug,
    PosterUrl,
    Overview,
}

#[derive(DeriveIden)]
enum Clue {
    Table,
    Id,
    MovieId,
    OrderIndex,
    Text,
}
