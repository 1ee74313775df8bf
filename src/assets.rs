//! Image asset naming for card faces and backs.
//!
//! Card faces are named `{suit}_{rank}`, where the suit is the plural suit
//! name without its trailing `s` and the rank is its number (ace is `1`) or,
//! for face cards, its name: `heart_1`, `spade_10`, `club_queen`.

use alloc::format;
use alloc::string::String;

use crate::card::Card;

/// Asset name of the card back, used for face-down cards.
pub const CARD_BACK_ASSET: &str = "back";

/// Default directory holding the card images.
pub const DEFAULT_BASE_PATH: &str = "SVG-cards/png/1x";

/// Default image file extension.
pub const DEFAULT_EXTENSION: &str = "png";

impl Card {
    /// Returns the asset name of the card face.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Hearts, Rank::Ace).asset_name(), "heart_1");
    /// assert_eq!(Card::new(Suit::Clubs, Rank::Queen).asset_name(), "club_queen");
    /// ```
    #[must_use]
    pub fn asset_name(&self) -> String {
        let suit = self.suit.name();
        let suit = suit.strip_suffix('s').unwrap_or(suit);

        if self.rank.is_face() {
            format!("{suit}_{}", self.rank)
        } else {
            format!("{suit}_{}", self.rank.number())
        }
    }
}

/// Where card images live.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::AssetOptions;
///
/// let options = AssetOptions::default()
///     .with_base_path("/static/cards")
///     .with_extension("svg");
/// assert_eq!(options.back_path(), "/static/cards/back.svg");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetOptions {
    /// Directory prefix, without a trailing slash.
    pub base_path: String,
    /// File extension, without the leading dot.
    pub extension: String,
}

impl Default for AssetOptions {
    fn default() -> Self {
        Self {
            base_path: String::from(DEFAULT_BASE_PATH),
            extension: String::from(DEFAULT_EXTENSION),
        }
    }
}

impl AssetOptions {
    /// Sets the directory prefix.
    ///
    /// A trailing `/` is dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::AssetOptions;
    ///
    /// let options = AssetOptions::default().with_base_path("public/cards/");
    /// assert_eq!(options.base_path, "public/cards");
    /// ```
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        let mut base_path = base_path.into();
        while base_path.ends_with('/') {
            base_path.pop();
        }
        self.base_path = base_path;
        self
    }

    /// Sets the file extension.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::AssetOptions;
    ///
    /// let options = AssetOptions::default().with_extension("svg");
    /// assert_eq!(options.extension, "svg");
    /// ```
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Returns the image path of a card face.
    #[must_use]
    pub fn card_path(&self, card: &Card) -> String {
        self.path_for(&card.asset_name())
    }

    /// Returns the image path of the card back.
    #[must_use]
    pub fn back_path(&self) -> String {
        self.path_for(CARD_BACK_ASSET)
    }

    /// Returns the image path of a dealer-view slot, using the back for `None`.
    #[must_use]
    pub fn slot_path(&self, slot: Option<&Card>) -> String {
        slot.map_or_else(|| self.back_path(), |card| self.card_path(card))
    }

    fn path_for(&self, name: &str) -> String {
        if self.base_path.is_empty() {
            format!("{name}.{}", self.extension)
        } else {
            format!("{}/{name}.{}", self.base_path, self.extension)
        }
    }
}
