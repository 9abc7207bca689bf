use jiff::civil::Date;
use serde::Serialize;

use crate::entities::{clue, movie};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Movie {
    pub id: i32,
    pub external_id: Option<i32>,
    pub title: String,
    pub slug: String,
    pub poster_url: Option<String>,
    pub overview: Option<String>,
}

impl From<movie::Model> for Movie {
    fn from(m: movie::Model) -> Self {
        Self {
            id: m.id,
            external_id: m.external_id,
            title: m.title,
            slug: m.slug,
            poster_url: m.poster_url,
            overview: m.overview,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMovie {
    pub external_id: Option<i32>,
    pub title: String,
    pub slug: String,
    pub poster_url: Option<String>,
    pub overview: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Clue {
    pub id: i32,
    pub movie_id: i32,
    pub order_index: i32,
    pub text: String,
}

impl From<clue::Model> for Clue {
    fn from(c: clue::Model) -> Self {
        Self { id: c.id, movie_id: c.movie_id, order_index: c.order_index, text: c.text }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClueView {
    pub order_index: i32,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TodayGame {
    pub game_date: Date,
    pub movie_slug: String,
    pub total_clues: usize,
    pub first_clue: ClueView,
}
