use super::GameState;

/// The dealer keeps drawing while their score is at or below this value.
pub const DEALER_HITS_THROUGH: u32 = 16;

impl GameState {
    /// Dealer draws until their score passes [`DEALER_HITS_THROUGH`].
    ///
    /// Stops early if the deck runs out, leaving the dealer on whatever they hold.
    pub(super) fn dealer_play(&mut self) {
        let mut drawn = 0_usize;

        while self.dealer_hand.score() <= DEALER_HITS_THROUGH {
            let Ok(card) = self.deck.draw() else {
                log::debug!(
                    "deck exhausted with dealer on {}",
                    self.dealer_hand.score()
                );
                break;
            };

            log::trace!("dealer draws {card:?}");
            self.dealer_hand.add_card(card);
            drawn += 1;
        }

        log::debug!(
            "dealer stands on {} after drawing {} card(s), {} left in deck",
            self.dealer_hand.score(),
            drawn,
            self.deck.len()
        );
    }
}
