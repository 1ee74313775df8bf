use crate::error::ActionError;

use super::{GameState, Turn};

impl GameState {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.turn != Turn::PlayerTurn {
            return Err(ActionError::NotPlayerTurn);
        }

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// Returns the next state with one more card in the player's hand. A bust
    /// does not end the turn; it shows up in [`GameState::result`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&self) -> Result<Self, ActionError> {
        self.ensure_player_turn()?;

        let mut next = self.clone();
        let card = next.deck.draw()?;
        next.player_hand.add_card(card);

        log::trace!(
            "player hits {card:?}, score {}",
            next.player_hand.score()
        );

        Ok(next)
    }

    /// Player action: Stand (hand control to the dealer).
    ///
    /// The dealer plays out their hand before this returns, and the next state
    /// is in [`Turn::DealerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&self) -> Result<Self, ActionError> {
        self.ensure_player_turn()?;

        let mut next = self.clone();
        next.dealer_play();
        next.turn = Turn::DealerTurn;

        Ok(next)
    }
}
