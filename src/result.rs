//! Round outcome classification.

use core::cmp::Ordering;
use core::fmt;

use crate::hand::{BLACKJACK, Hand};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// Player wins (dealer busts, player has the higher score, or player has a natural).
    PlayerWin,
    /// Dealer wins (player busts or dealer has the higher score).
    DealerWin,
    /// Equal scores.
    Draw,
    /// The round has not reached the dealer's turn.
    NoResult,
}

impl GameResult {
    /// Returns the snake-case label shown to the player.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PlayerWin => "player_win",
            Self::DealerWin => "dealer_win",
            Self::Draw => "draw",
            Self::NoResult => "no_result",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compares the final player and dealer hands.
///
/// A bust on either side is settled first: the dealer loses when holding the
/// higher total, and wins otherwise. Without a bust the higher score wins. On
/// equal scores a two-card 21 beats a dealer 21 made from any other number of
/// cards, and every other tie is a draw.
#[must_use]
pub fn determine_result(player: &Hand, dealer: &Hand) -> GameResult {
    let player_score = player.score();
    let dealer_score = dealer.score();

    if player_score > BLACKJACK || dealer_score > BLACKJACK {
        return if dealer_score > player_score {
            GameResult::PlayerWin
        } else {
            GameResult::DealerWin
        };
    }

    match dealer_score.cmp(&player_score) {
        Ordering::Greater => GameResult::DealerWin,
        Ordering::Less => GameResult::PlayerWin,
        Ordering::Equal if player.is_blackjack() && dealer.len() != 2 => GameResult::PlayerWin,
        Ordering::Equal => GameResult::Draw,
    }
}
