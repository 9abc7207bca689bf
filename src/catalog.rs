use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::warn;

use crate::{
    entities::{clue, movie},
    error::AppResult,
    models::{Clue, Movie, NewMovie},
};

/// Read/write access to movies and their clues.
///
/// Works over a plain connection or an open session; when handed a session,
/// writes join that session's transaction.
pub struct Catalog<'c, C> {
    conn: &'c C,
}

impl<'c, C> Catalog<'c, C>
where
    C: ConnectionTrait + TransactionTrait,
{
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }

    pub async fn find_movie_by_slug(&self, slug: &str) -> AppResult<Option<Movie>> {
        let movie = movie::Entity::find()
            .filter(movie::Column::Slug.eq(slug))
            .one(self.conn)
            .await?;
        Ok(movie.map(Movie::from))
    }

    /// Inserts a movie and its clues, numbering the clues from 0 in slice
    /// order. Either all rows are written or none are.
    pub async fn insert_movie_with_clues(
        &self,
        new: &NewMovie,
        clues: &[&str],
    ) -> AppResult<Movie> {
        let txn = self.conn.begin().await?;

        let result = insert_rows(&txn, new, clues).await;
        match result {
            Ok(movie) => {
                txn.commit().await?;
                Ok(movie)
            },
            Err(err) => {
                if let Err(rb) = txn.rollback().await {
                    warn!(slug = %new.slug, error = %rb, "rollback failed");
                }
                Err(err)
            },
        }
    }

    pub async fn clues_for_movie(&self, movie_id: i32) -> AppResult<Vec<Clue>> {
        let rows = clue::Entity::find()
            .filter(clue::Column::MovieId.eq(movie_id))
            .order_by_asc(clue::Column::OrderIndex)
            .all(self.conn)
            .await?;
        Ok(rows.into_iter().map(Clue::from).collect())
    }

    pub async fn count_movies(&self) -> AppResult<u64> {
        Ok(movie::Entity::find().count(self.conn).await?)
    }

    pub async fn count_clues(&self) -> AppResult<u64> {
        Ok(clue::Entity::find().count(self.conn).await?)
    }
}

async fn insert_rows(
    txn: &DatabaseTransaction,
    new: &NewMovie,
    clues: &[&str],
) -> AppResult<Movie> {
    let movie = movie::ActiveModel {
        external_id: Set(new.external_id),
        title: Set(new.title.clone()),
        slug: Set(new.slug.clone()),
        poster_url: Set(new.poster_url.clone()),
        overview: Set(new.overview.clone()),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    for (idx, text) in clues.iter().enumerate() {
        clue::ActiveModel {
            movie_id: Set(movie.id),
            order_index: Set(idx as i32),
            text: Set(text.to_string()),
            ..Default::default()
        }
        .insert(txn)
        .await?;
    }

    Ok(movie.into())
}
