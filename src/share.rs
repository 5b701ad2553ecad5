//! Shareable result text
//!
//! Renders the fixed-format block players paste into social feeds: a title
//! line with the date, the attempts summary, one emoji row per guess, and the
//! recruitment footer. The grid is a player-visible correctness contract: it
//! must reproduce the evaluator's classification exactly.

use crate::core::row_emoji;
use crate::game::{GameState, GameStatus};
use std::fmt::Write;

/// Recruitment link appended to every shared result
pub const SHARE_LINK: &str = "https://joinwordpatrol.example.com/careers";

/// Render the shareable block for a finished (or in-progress) game
///
/// Summary shows the attempt count for a win and `X` otherwise; one
/// 🟩/🟨/⬜ row per submitted guess, derived through the evaluator against
/// the daily word.
#[must_use]
pub fn share_text(state: &GameState) -> String {
    let score = match state.status() {
        GameStatus::Won => state.attempts().to_string(),
        GameStatus::Playing | GameStatus::Lost => "X".to_owned(),
    };

    let mut text = format!(
        "Word Patrol {date} {score}/{max}\n\n",
        date = state.last_played().format("%Y-%m-%d"),
        max = state.max_attempts(),
    );

    for row in state.evaluated_rows() {
        let _ = writeln!(text, "{}", row_emoji(&row));
    }

    let _ = write!(
        text,
        "\nThink you have what it takes? Join the force:\n{SHARE_LINK}"
    );

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn state_with_guesses(target: &str, guesses: &[&str]) -> GameState {
        let mut state = GameState::fresh(
            Word::new(target).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
        );
        for guess in guesses {
            state.submit_guess(guess).unwrap();
        }
        state
    }

    #[test]
    fn won_game_shows_attempt_count() {
        let state = state_with_guesses("BADGE", &["SIREN", "BADGE"]);
        let text = share_text(&state);

        assert!(text.starts_with("Word Patrol 2026-08-30 2/6\n"));
    }

    #[test]
    fn lost_game_shows_x() {
        let state = state_with_guesses(
            "GAVEL",
            &["BADGE", "SIREN", "COURT", "JUDGE", "CRIME", "THEFT"],
        );
        let text = share_text(&state);

        assert!(text.starts_with("Word Patrol 2026-08-30 X/6\n"));
    }

    #[test]
    fn one_emoji_row_per_guess() {
        let state = state_with_guesses("BADGE", &["SIREN", "GAVEL", "BADGE"]);
        let text = share_text(&state);

        let rows: Vec<&str> = text
            .lines()
            .filter(|line| line.starts_with(['🟩', '🟨', '⬜']))
            .collect();
        assert_eq!(rows.len(), state.guesses().len());
    }

    #[test]
    fn rows_reproduce_the_evaluator_exactly() {
        let state = state_with_guesses("LEVEL", &["ELOPE", "LEVEL"]);
        let text = share_text(&state);

        for (guess, line) in state.guesses().iter().zip(
            text.lines()
                .filter(|line| line.starts_with(['🟩', '🟨', '⬜'])),
        ) {
            let expected = row_emoji(&evaluate(guess, state.target()));
            assert_eq!(line, expected);
        }
    }

    #[test]
    fn footer_carries_the_recruitment_link() {
        let state = state_with_guesses("BADGE", &["BADGE"]);
        let text = share_text(&state);

        assert!(text.ends_with(SHARE_LINK));
        assert!(text.contains("Join the force"));
    }
}
