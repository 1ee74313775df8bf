//! Round state and setup.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::Hand;
use crate::result::{GameResult, determine_result};

mod actions;
mod dealer;
pub mod state;

pub use dealer::DEALER_HITS_THROUGH;
pub use state::{RoundStatus, Turn};

/// Number of cards dealt at the start of a round, two per side.
pub const INITIAL_DEAL: usize = 4;

/// A snapshot of one round: both hands, the undealt deck and the turn marker.
///
/// Transitions such as [`GameState::hit`] and [`GameState::stand`] borrow the
/// current snapshot and return the next one, so earlier snapshots stay valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    player_hand: Hand,
    dealer_hand: Hand,
    deck: Deck,
    turn: Turn,
}

impl GameState {
    /// Starts a round from a freshly shuffled standard deck.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{GameState, Turn};
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
    /// let state = GameState::new(&mut rng);
    /// assert_eq!(state.player_hand().len(), 2);
    /// assert_eq!(state.turn(), Turn::PlayerTurn);
    /// ```
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::split_initial(Deck::standard().shuffled(rng))
    }

    /// Starts a round using a deterministic shuffle derived from `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::new(&mut rng)
    }

    /// Starts a round from an already ordered deck.
    ///
    /// The top two cards go to the player and the next two to the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck holds fewer than
    /// [`INITIAL_DEAL`] cards.
    pub fn deal_from(deck: Deck) -> Result<Self, DealError> {
        if deck.len() < INITIAL_DEAL {
            return Err(DealError::NotEnoughCards);
        }

        Ok(Self::split_initial(deck))
    }

    fn split_initial(deck: Deck) -> Self {
        let mut cards = deck.into_cards();
        let player = cards.split_off(cards.len().saturating_sub(2));
        let dealer = cards.split_off(cards.len().saturating_sub(2));

        log::debug!(
            "dealt round: player {:?}, dealer {:?}, {} cards left",
            player,
            dealer,
            cards.len()
        );

        Self {
            player_hand: Hand::from(player),
            dealer_hand: Hand::from(dealer),
            deck: Deck::from(cards),
            turn: Turn::PlayerTurn,
        }
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the undealt cards.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns whose turn it is.
    #[must_use]
    pub const fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns whether the player may still hit or stand.
    #[must_use]
    pub const fn is_player_turn(&self) -> bool {
        matches!(self.turn, Turn::PlayerTurn)
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the player's score.
    #[must_use]
    pub fn player_score(&self) -> u32 {
        self.player_hand.score()
    }

    /// Returns the dealer's full score, including any hidden card.
    #[must_use]
    pub fn dealer_score(&self) -> u32 {
        self.dealer_hand.score()
    }

    /// Returns the dealer's cards as the player sees them.
    ///
    /// During the player's turn the first dealer card is face down and
    /// reported as `None`.
    #[must_use]
    pub fn dealer_view(&self) -> Vec<Option<Card>> {
        let hide_first = self.is_player_turn();
        self.dealer_hand
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (!(hide_first && index == 0)).then_some(*card))
            .collect()
    }

    /// Returns the dealer's score once it may be shown.
    #[must_use]
    pub fn visible_dealer_score(&self) -> Option<u32> {
        (!self.is_player_turn()).then(|| self.dealer_score())
    }

    /// Classifies the round.
    ///
    /// Returns [`GameResult::NoResult`] until the dealer has played.
    #[must_use]
    pub fn result(&self) -> GameResult {
        match self.turn {
            Turn::PlayerTurn => GameResult::NoResult,
            Turn::DealerTurn => determine_result(&self.player_hand, &self.dealer_hand),
        }
    }

    /// Returns what the status line should show.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        match self.result() {
            GameResult::NoResult => RoundStatus::InProgress(self.turn),
            result => RoundStatus::Finished(result),
        }
    }
}
