//! Turn and round status types.

use core::fmt;

use crate::result::GameResult;

/// Whose actions are currently legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The dealer has played out their hand; the round is over.
    DealerTurn,
}

impl Turn {
    /// Returns the snake-case label shown to the player.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PlayerTurn => "player_turn",
            Self::DealerTurn => "dealer_turn",
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the status line of a table should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    /// No result yet; shows the turn marker.
    InProgress(Turn),
    /// The round has a result.
    Finished(GameResult),
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress(turn) => turn.fmt(f),
            Self::Finished(result) => result.fmt(f),
        }
    }
}
