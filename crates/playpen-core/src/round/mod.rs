pub mod color_match;
pub mod color_pick;
pub mod letter_match;
pub mod matching;
pub mod quantity;

use crate::catalog::{CatalogItem, ItemColor};
use crate::game_registry::GameId;
use crate::session::SessionState;

pub use matching::{MatchBoard, MatchRound};

/// What the session store should do after a round is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persist {
    /// Fresh restorable round: write its parameters.
    Save(SessionState),
    /// Restored round: the stored record already describes it.
    Keep,
    /// Round cannot be restored: drop any stale record.
    Clear,
}

/// Output of a round generator.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub round: Round,
    pub persist: Persist,
}

/// One playable round.
#[derive(Debug, Clone, PartialEq)]
pub enum Round {
    /// Pick the right button (counting, color recognition).
    Choice(ChoiceRound),
    /// Pair tiles across two columns.
    Match(MatchRound),
}

impl Round {
    pub fn game(&self) -> GameId {
        match self {
            Self::Choice(r) => r.game,
            Self::Match(r) => r.game,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Self::Choice(r) => &r.prompt,
            Self::Match(r) => &r.prompt,
        }
    }
}

/// Visual status of a choice button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OptionStatus {
    #[default]
    Idle,
    Correct,
    Shaking,
}

/// A button in a choice round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Encoded answer compared against [`ChoiceRound::answer`].
    pub value: String,
    pub label: String,
    pub swatch: Option<ItemColor>,
    pub status: OptionStatus,
}

/// A round with a single correct button among a few.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceRound {
    pub game: GameId,
    pub prompt: String,
    pub subject: CatalogItem,
    /// How many copies of the subject's pictogram are drawn.
    pub repeat: usize,
    pub options: Vec<ChoiceOption>,
    pub answer: String,
}

impl ChoiceRound {
    /// Index of the option whose encoded value equals `value`.
    pub fn option_index(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|opt| opt.value == value)
    }
}
