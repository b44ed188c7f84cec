use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use super::matching::{MatchBoard, MatchRound, SelectionRule, Tile, TileFace};
use super::{Generated, Persist, Round};
use crate::catalog::{Catalog, CatalogItem};
use crate::config::PlayConfig;
use crate::error::RoundError;
use crate::game_registry::GameId;
use crate::session::SessionState;

/// "Match the letter to the object!"
///
/// Not restorable: any stored round is dropped and a new board is drawn.
pub fn generate(
    catalog: &Catalog,
    config: &PlayConfig,
    _restore: Option<&SessionState>,
    rng: &mut dyn RngCore,
) -> Result<Generated, RoundError> {
    let picked = pick_distinct_initials(catalog, config.match_pairs, rng);
    if picked.len() < config.match_pairs {
        return Err(RoundError::TooFewPairs {
            game: GameId::Match,
            found: picked.len(),
            needed: config.match_pairs,
        });
    }

    let mut letters: Vec<Tile> = picked
        .iter()
        .map(|&(initial, _)| {
            let glyph = if rng.random_bool(0.5) {
                initial.to_uppercase().next().unwrap_or(initial)
            } else {
                initial
            };
            Tile::new(initial.to_string(), TileFace::Letter(glyph), None)
        })
        .collect();
    let mut pictures: Vec<Tile> = picked
        .iter()
        .map(|&(initial, item)| {
            Tile::new(
                initial.to_string(),
                TileFace::Pictogram(item.pictogram.clone()),
                Some(item.name.clone()),
            )
        })
        .collect();
    letters.shuffle(rng);
    pictures.shuffle(rng);

    let round = MatchRound {
        game: GameId::Match,
        prompt: "Match the letter to the object!".to_string(),
        board: MatchBoard::new(letters, pictures, SelectionRule::LeftFirst),
    };
    Ok(Generated {
        round: Round::Match(round),
        persist: Persist::Clear,
    })
}

/// Shuffle the catalog and greedily keep items whose initial is new, up to
/// `wanted` items.
fn pick_distinct_initials<'a>(
    catalog: &'a Catalog,
    wanted: usize,
    rng: &mut dyn RngCore,
) -> Vec<(char, &'a CatalogItem)> {
    let mut pool: Vec<&CatalogItem> = catalog.items().iter().collect();
    pool.shuffle(rng);

    let mut seen = HashSet::new();
    let mut picked = Vec::with_capacity(wanted);
    for item in pool {
        let Some(initial) = item.initial() else {
            continue;
        };
        if seen.insert(initial) {
            picked.push((initial, item));
            if picked.len() == wanted {
                break;
            }
        }
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::matching::Column;
    use crate::test_helpers::{sample_catalog, seeded_rng};
    use std::collections::HashMap;

    fn board(generated: Generated) -> MatchBoard {
        match generated.round {
            Round::Match(r) => r.board,
            Round::Choice(_) => panic!("expected a match round"),
        }
    }

    #[test]
    fn always_clears_stored_state() {
        let state = SessionState::Count {
            item_name: "apple".into(),
            count: 2,
        };
        let generated = generate(
            &sample_catalog(),
            &PlayConfig::default(),
            Some(&state),
            &mut seeded_rng(20),
        )
        .unwrap();
        assert_eq!(generated.persist, Persist::Clear);
    }

    #[test]
    fn pictures_carry_item_names() {
        let catalog = sample_catalog();
        let b = board(generate(&catalog, &PlayConfig::default(), None, &mut seeded_rng(21)).unwrap());
        for tile in b.column(Column::Right) {
            let name = tile.name.as_deref().unwrap();
            let item = catalog.find(name).unwrap();
            assert_eq!(item.initial().map(String::from), Some(tile.tag.clone()));
        }
        assert!(b.column(Column::Left).iter().all(|t| t.name.is_none()));
    }

    #[test]
    fn letter_glyph_matches_tag_ignoring_case() {
        let b = board(
            generate(&sample_catalog(), &PlayConfig::default(), None, &mut seeded_rng(22)).unwrap(),
        );
        for tile in b.column(Column::Left) {
            let TileFace::Letter(glyph) = &tile.face else {
                panic!("left column holds letters");
            };
            assert_eq!(glyph.to_lowercase().to_string(), tile.tag);
        }
    }

    #[test]
    fn too_few_initials_is_an_error() {
        let catalog = Catalog::new(vec![
            CatalogItem {
                name: "apple".into(),
                pictogram: "🍎".into(),
                color: None,
            },
            CatalogItem {
                name: "avocado".into(),
                pictogram: "🥑".into(),
                color: None,
            },
            CatalogItem {
                name: "bee".into(),
                pictogram: "🐝".into(),
                color: None,
            },
        ])
        .unwrap();
        let err = generate(&catalog, &PlayConfig::default(), None, &mut seeded_rng(23)).unwrap_err();
        assert_eq!(
            err,
            RoundError::TooFewPairs {
                game: GameId::Match,
                found: 2,
                needed: 4
            }
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn four_pairs_each_tag_twice(seed in 0u64..1000) {
                let b = board(
                    generate(&sample_catalog(), &PlayConfig::default(), None, &mut seeded_rng(seed))
                        .unwrap(),
                );
                prop_assert_eq!(b.total_pairs(), 4);
                prop_assert_eq!(b.column(Column::Left).len(), 4);
                prop_assert_eq!(b.column(Column::Right).len(), 4);

                let mut counts: HashMap<&str, usize> = HashMap::new();
                for column in [Column::Left, Column::Right] {
                    for tile in b.column(column) {
                        *counts.entry(tile.tag.as_str()).or_default() += 1;
                    }
                }
                prop_assert_eq!(counts.len(), 4);
                prop_assert!(counts.values().all(|&n| n == 2));
            }
        }
    }
}
