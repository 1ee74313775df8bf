//! A single-deck blackjack round engine with optional `no_std` support.
//!
//! A round is a [`GameState`] value: the player's hand, the dealer's hand,
//! the undealt [`Deck`] and a [`Turn`] marker. [`GameState::hit`] and
//! [`GameState::stand`] borrow a state and return the next one, running the
//! dealer's fixed strategy on stand. [`GameState::result`] classifies the
//! finished round.
//!
//! # Example
//!
//! ```
//! use bjround::{GameResult, GameState, Turn};
//!
//! let state = GameState::from_seed(42);
//! let state = state.stand().expect("player turn");
//! assert_eq!(state.turn(), Turn::DealerTurn);
//! assert_ne!(state.result(), GameResult::NoResult);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod assets;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;

// Re-export main types
pub use assets::{AssetOptions, CARD_BACK_ASSET};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DeckError};
pub use game::{DEALER_HITS_THROUGH, GameState, INITIAL_DEAL, RoundStatus, Turn};
pub use hand::{BLACKJACK, Hand, score};
pub use result::{GameResult, determine_result};
