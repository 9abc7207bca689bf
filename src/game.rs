use jiff::civil::Date;

use crate::models::{ClueView, TodayGame};

pub const STUB_SLUG: &str = "daily-movie-stub";

// Fixture clues are numbered from 1, while stored clues use a zero-based
// `order_index`. Settle on one convention before serving real movies here.
pub const STUB_CLUES: [(i32, &str); 4] = [
    (1, "A quiet coastal town is disrupted by an unusual threat."),
    (2, "The danger lurks beneath the surface, unseen but deadly."),
    (3, "A small group of locals and outsiders try to warn everyone."),
    (4, "An iconic poster features a swimmer."),
];

/// Builds the game served for `date`.
///
/// Always the fixture for now: nothing yet decides which stored movie
/// belongs to which day.
pub fn todays_game(date: Date) -> TodayGame {
    let clues: Vec<ClueView> = STUB_CLUES
        .iter()
        .map(|&(order_index, text)| ClueView { order_index, text: text.to_string() })
        .collect();

    TodayGame {
        game_date: date,
        movie_slug: STUB_SLUG.to_string(),
        total_clues: clues.len(),
        first_clue: clues[0].clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_game_exposes_first_clue() {
        let date = jiff::civil::date(2025, 6, 1);
        let game = todays_game(date);

        assert_eq!(game.game_date, date);
        assert_eq!(game.movie_slug, "daily-movie-stub");
        assert_eq!(game.total_clues, 4);
        assert_eq!(game.first_clue.order_index, 1);
        assert_eq!(
            game.first_clue.text,
            "A quiet coastal town is disrupted by an unusual threat."
        );
    }

    #[test]
    fn serializes_date_as_iso_day() {
        let game = todays_game(jiff::civil::date(2025, 1, 9));
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["game_date"], "2025-01-09");
        assert_eq!(json["first_clue"]["order_index"], 1);
    }
}
