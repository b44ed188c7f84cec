use rand::RngCore;
use rand::seq::IndexedRandom;

use crate::catalog::Catalog;
use crate::config::PlayConfig;
use crate::error::RoundError;
use crate::round::{Generated, color_match, color_pick, letter_match, quantity};
use crate::session::SessionState;

/// Unique identifier for a game type. Its URL key is stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameId {
    Count,
    Colour,
    Match,
    ColorMatch,
}

/// Builds a round, fresh when `restore` is `None`.
pub type RoundGenerator = fn(
    catalog: &Catalog,
    config: &PlayConfig,
    restore: Option<&SessionState>,
    rng: &mut dyn RngCore,
) -> Result<Generated, RoundError>;

/// A registered game entry in the game catalog.
pub struct GameEntry {
    pub id: GameId,
    pub url_key: &'static str,
    pub display_name: &'static str,
    /// Whether the round's parameters are saved so a reload can rebuild it.
    pub restorable: bool,
    pub generate: RoundGenerator,
}

static REGISTRY: [GameEntry; 4] = [
    GameEntry {
        id: GameId::Count,
        url_key: "count",
        display_name: "Count The Items",
        restorable: true,
        generate: quantity::generate,
    },
    GameEntry {
        id: GameId::Colour,
        url_key: "colour",
        display_name: "Color Recognition",
        restorable: true,
        generate: color_pick::generate,
    },
    GameEntry {
        id: GameId::Match,
        url_key: "match",
        display_name: "Alphabet Match",
        restorable: false,
        generate: letter_match::generate,
    },
    GameEntry {
        id: GameId::ColorMatch,
        url_key: "colormatch",
        display_name: "Match the Colour",
        restorable: false,
        generate: color_match::generate,
    },
];

impl GameId {
    pub const ALL: [GameId; 4] = [
        GameId::Count,
        GameId::Colour,
        GameId::Match,
        GameId::ColorMatch,
    ];

    pub fn entry(self) -> &'static GameEntry {
        let index = match self {
            Self::Count => 0,
            Self::Colour => 1,
            Self::Match => 2,
            Self::ColorMatch => 3,
        };
        &REGISTRY[index]
    }

    /// Look up a game by its URL key. Unknown keys yield `None`.
    pub fn from_url_key(key: &str) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|entry| entry.url_key == key)
            .map(|entry| entry.id)
    }

    pub fn url_key(self) -> &'static str {
        self.entry().url_key
    }

    pub fn display_name(self) -> &'static str {
        self.entry().display_name
    }

    pub fn is_restorable(self) -> bool {
        self.entry().restorable
    }

    /// Generate a round of this game.
    pub fn generate(
        self,
        catalog: &Catalog,
        config: &PlayConfig,
        restore: Option<&SessionState>,
        rng: &mut dyn RngCore,
    ) -> Result<Generated, RoundError> {
        (self.entry().generate)(catalog, config, restore, rng)
    }

    /// Whether `catalog` can supply a round of this game.
    ///
    /// Matching games need `match_pairs` items with distinct initials
    /// (letters) or distinct colors (colour matching).
    pub fn is_playable(self, catalog: &Catalog, config: &PlayConfig) -> bool {
        match self {
            Self::Count => !catalog.is_empty(),
            Self::Colour => catalog.colored().next().is_some(),
            Self::Match => catalog.distinct_initials() >= config.match_pairs,
            Self::ColorMatch => catalog.palette().len() >= config.match_pairs,
        }
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Games the catalog can supply rounds for, in registry order.
pub fn playable_games(catalog: &Catalog, config: &PlayConfig) -> Vec<GameId> {
    GameId::ALL
        .into_iter()
        .filter(|game| game.is_playable(catalog, config))
        .collect()
}

/// Pick a random playable game, or `None` if the catalog supports none.
pub fn random_game(catalog: &Catalog, config: &PlayConfig, rng: &mut dyn RngCore) -> Option<GameId> {
    playable_games(catalog, config).choose(rng).copied()
}
