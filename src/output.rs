//! Terminal output formatting
//!
//! Display utilities for the non-TUI subcommands.

use crate::game::{GameState, GameStatus};
use colored::Colorize;

/// Print streak and lifetime statistics
pub fn print_stats(state: &GameState) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("{}", "WORD PATROL - Your record".bright_yellow().bold());
    println!("{}", "─".repeat(40).cyan());

    let today = match state.status() {
        GameStatus::Playing => format!("in progress ({}/6 attempts)", state.attempts()),
        GameStatus::Won => format!(
            "solved in {} (+{} points)",
            state.attempts(),
            state.points_awarded()
        ),
        GameStatus::Lost => "not solved".to_owned(),
    };

    println!("Today ({}):  {today}", state.last_played());
    if let Some(rank) = state.rank() {
        println!("Rank:         {}", rank.bright_yellow());
    }
    println!("Streak:       {}", state.streak().to_string().green().bold());
    println!("Games played: {}", state.total_games_played());
    println!("Games won:    {}", state.total_wins());

    if state.total_games_played() > 0 {
        let rate = f64::from(state.total_wins()) / f64::from(state.total_games_played()) * 100.0;
        println!("Win rate:     {rate:.0}%");
    }
    println!();
}

/// Print the shareable result block
pub fn print_share(state: &GameState) {
    if state.status() == GameStatus::Playing {
        println!(
            "{}",
            "Finish today's challenge first, then come back to share!".yellow()
        );
        return;
    }

    println!("\n{}", crate::share::share_text(state));
    println!();
}
