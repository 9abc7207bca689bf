pub mod clue;
pub mod movie;
