//! Error types for deck and round operations.

use thiserror::Error;

/// Errors that can occur when taking a card from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards left.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur when dealing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Fewer cards than the initial deal needs.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round has already passed to the dealer.
    #[error("not the player's turn")]
    NotPlayerTurn,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Empty => Self::NoCards,
        }
    }
}
