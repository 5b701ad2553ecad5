//! Game events and the collaborator boundary
//!
//! Terminal transitions emit events instead of calling points/badge services
//! directly. The state machine never awaits or branches on a consumer: its
//! state is final the instant the local transition completes, and whatever a
//! sink does with an event cannot feed back into the game.

use crate::core::Word;
use chrono::NaiveDate;
use tracing::info;

/// An event emitted by the game state machine
///
/// `Won`/`Lost` feed the player-facing notification surface; `AwardPoints`
/// and `AwardBadge` are the fire-and-forget calls to the external award
/// services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Won {
        points: u32,
        attempts: u32,
    },
    Lost {
        answer: Word,
    },
    AwardPoints {
        points: u32,
        attempts: u32,
        max_attempts: u32,
        date: NaiveDate,
    },
    AwardBadge {
        streak: u32,
    },
}

/// Consumer of game events
///
/// Sinks observe transitions; they cannot fail back into the engine (the
/// signature is infallible) and nothing retries on their behalf.
pub trait EventSink {
    fn handle(&mut self, event: &GameEvent);
}

/// Logs events through `tracing`
///
/// Stands in for the external points/badge/notification collaborators at
/// their observable boundary.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn handle(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Won { points, attempts } => {
                info!(points, attempts, "challenge won");
            }
            GameEvent::Lost { answer } => {
                info!(%answer, "challenge lost");
            }
            GameEvent::AwardPoints {
                points,
                attempts,
                max_attempts,
                date,
            } => {
                info!(points, attempts, max_attempts, %date, "awarding points");
            }
            GameEvent::AwardBadge { streak } => {
                info!(streak, "awarding streak badge");
            }
        }
    }
}

/// Collects events for assertions
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<GameEvent>,
}

#[cfg(test)]
impl EventSink for RecordingSink {
    fn handle(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}
