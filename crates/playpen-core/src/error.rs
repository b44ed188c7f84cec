use crate::game_registry::GameId;

/// Errors raised while loading or validating the item catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Parse(String),
    DuplicateName(String),
    EmptyField { index: usize, field: &'static str },
    Empty,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(m) => write!(f, "catalog parse error: {m}"),
            Self::DuplicateName(name) => write!(f, "catalog item name {name:?} is not unique"),
            Self::EmptyField { index, field } => {
                write!(f, "catalog item #{index} has an empty {field}")
            },
            Self::Empty => write!(f, "catalog has no items"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Errors raised while generating or restoring a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// The catalog has no item this game can use.
    NoItems(GameId),
    /// The catalog cannot supply enough distinct pairs for a matching game.
    TooFewPairs {
        game: GameId,
        found: usize,
        needed: usize,
    },
    /// Restored state references an item missing from the catalog.
    UnknownItem(String),
    /// Restored quantity lies outside the configured range.
    InvalidCount(u8),
    /// No registered game can be built from the catalog.
    NothingPlayable,
}

impl std::fmt::Display for RoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoItems(game) => write!(f, "no catalog items usable for {game}"),
            Self::TooFewPairs {
                game,
                found,
                needed,
            } => write!(f, "{game} needs {needed} distinct pairs, catalog has {found}"),
            Self::UnknownItem(name) => write!(f, "restored item {name:?} is not in the catalog"),
            Self::InvalidCount(count) => write!(f, "restored count {count} is out of range"),
            Self::NothingPlayable => write!(f, "the catalog cannot supply any game"),
        }
    }
}

impl std::error::Error for RoundError {}

/// Errors raised while loading tunables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(m) => write!(f, "config parse error: {m}"),
            Self::Invalid(m) => write!(f, "invalid config: {m}"),
        }
    }
}

impl std::error::Error for ConfigError {}
