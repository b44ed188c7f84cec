use std::collections::HashSet;

use rand::RngCore;
use rand::seq::SliceRandom;

use super::matching::{MatchBoard, MatchRound, SelectionRule, Tile, TileFace};
use super::{Generated, Persist, Round};
use crate::catalog::{Catalog, CatalogItem, ItemColor};
use crate::config::PlayConfig;
use crate::error::RoundError;
use crate::game_registry::GameId;
use crate::session::SessionState;

/// "Match the object to its colour!"
///
/// Pictograms sit in the left column, swatches in the right. Either side can
/// start a selection. Not restorable.
pub fn generate(
    catalog: &Catalog,
    config: &PlayConfig,
    _restore: Option<&SessionState>,
    rng: &mut dyn RngCore,
) -> Result<Generated, RoundError> {
    let mut pool: Vec<&CatalogItem> = catalog.colored().collect();
    pool.shuffle(rng);

    let mut seen = HashSet::new();
    let mut picked: Vec<(ItemColor, &CatalogItem)> = Vec::with_capacity(config.match_pairs);
    for item in pool {
        let Some(color) = item.color else {
            continue;
        };
        if seen.insert(color) {
            picked.push((color, item));
            if picked.len() == config.match_pairs {
                break;
            }
        }
    }
    if picked.len() < config.match_pairs {
        return Err(RoundError::TooFewPairs {
            game: GameId::ColorMatch,
            found: picked.len(),
            needed: config.match_pairs,
        });
    }

    let mut pictures: Vec<Tile> = picked
        .iter()
        .map(|&(color, item)| {
            Tile::new(
                color.css_value(),
                TileFace::Pictogram(item.pictogram.clone()),
                Some(item.name.clone()),
            )
        })
        .collect();
    let mut swatches: Vec<Tile> = picked
        .iter()
        .map(|&(color, _)| {
            Tile::new(
                color.css_value(),
                TileFace::Swatch(color),
                Some(color.label().to_string()),
            )
        })
        .collect();
    pictures.shuffle(rng);
    swatches.shuffle(rng);

    let round = MatchRound {
        game: GameId::ColorMatch,
        prompt: "Match the object to its colour!".to_string(),
        board: MatchBoard::new(pictures, swatches, SelectionRule::EitherColumn),
    };
    Ok(Generated {
        round: Round::Match(round),
        persist: Persist::Clear,
    })
}
