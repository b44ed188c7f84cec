use rand::RngCore;
use rand::seq::{IndexedRandom, SliceRandom};

use super::{ChoiceOption, ChoiceRound, Generated, OptionStatus, Persist, Round};
use crate::catalog::{Catalog, CatalogItem, ItemColor};
use crate::config::PlayConfig;
use crate::error::RoundError;
use crate::game_registry::GameId;
use crate::session::SessionState;

/// "What color is the {pictogram}?"
///
/// Only colored items are eligible. Decoys come from the colors actually
/// present in the catalog, so small catalogs produce fewer buttons.
pub fn generate(
    catalog: &Catalog,
    config: &PlayConfig,
    restore: Option<&SessionState>,
    rng: &mut dyn RngCore,
) -> Result<Generated, RoundError> {
    let colored: Vec<&CatalogItem> = catalog.colored().collect();

    let (item, persist) = match restore {
        Some(SessionState::Colour { item_name }) => {
            let item = colored
                .iter()
                .copied()
                .find(|item| &item.name == item_name)
                .ok_or_else(|| RoundError::UnknownItem(item_name.clone()))?;
            (item, Persist::Keep)
        },
        _ => {
            let item = colored
                .choose(rng)
                .copied()
                .ok_or(RoundError::NoItems(GameId::Colour))?;
            let state = SessionState::Colour {
                item_name: item.name.clone(),
            };
            (item, Persist::Save(state))
        },
    };
    let Some(correct) = item.color else {
        return Err(RoundError::NoItems(GameId::Colour));
    };

    let options = color_options(correct, catalog, config, rng)
        .into_iter()
        .map(|color| ChoiceOption {
            value: color.css_value().to_string(),
            label: color.label().to_string(),
            swatch: Some(color),
            status: OptionStatus::Idle,
        })
        .collect();

    let round = ChoiceRound {
        game: GameId::Colour,
        prompt: format!("What color is the {}?", item.pictogram),
        subject: item.clone(),
        repeat: 1,
        options,
        answer: correct.css_value().to_string(),
    };
    Ok(Generated {
        round: Round::Choice(round),
        persist,
    })
}

fn color_options(
    correct: ItemColor,
    catalog: &Catalog,
    config: &PlayConfig,
    rng: &mut dyn RngCore,
) -> Vec<ItemColor> {
    let mut decoys: Vec<ItemColor> = catalog
        .palette()
        .into_iter()
        .filter(|&c| c != correct)
        .collect();
    decoys.shuffle(rng);
    decoys.truncate(config.color_options.saturating_sub(1));
    decoys.push(correct);
    decoys.shuffle(rng);
    decoys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{sample_catalog, seeded_rng};
    use std::collections::HashSet;

    fn choice(generated: Generated) -> ChoiceRound {
        match generated.round {
            Round::Choice(r) => r,
            Round::Match(_) => panic!("expected a choice round"),
        }
    }

    #[test]
    fn restores_item_and_answer() {
        let state = SessionState::Colour {
            item_name: "banana".into(),
        };
        let generated = generate(
            &sample_catalog(),
            &PlayConfig::default(),
            Some(&state),
            &mut seeded_rng(10),
        )
        .unwrap();
        assert_eq!(generated.persist, Persist::Keep);
        let round = choice(generated);
        assert_eq!(round.prompt, "What color is the 🍌?");
        assert_eq!(round.answer, "yellow");
        assert!(round.options.iter().any(|o| o.label == "Yellow"));
    }

    #[test]
    fn restoring_colorless_item_fails() {
        let state = SessionState::Colour {
            item_name: "cloud".into(),
        };
        let err = generate(
            &sample_catalog(),
            &PlayConfig::default(),
            Some(&state),
            &mut seeded_rng(11),
        )
        .unwrap_err();
        assert_eq!(err, RoundError::UnknownItem("cloud".into()));
    }

    #[test]
    fn fresh_round_never_picks_colorless_items() {
        let catalog = sample_catalog();
        let config = PlayConfig::default();
        for seed in 0..200 {
            let round = choice(generate(&catalog, &config, None, &mut seeded_rng(seed)).unwrap());
            assert!(round.subject.color.is_some());
        }
    }

    #[test]
    fn two_color_catalog_yields_two_options() {
        let catalog = Catalog::new(vec![
            CatalogItem {
                name: "apple".into(),
                pictogram: "🍎".into(),
                color: Some(ItemColor::Red),
            },
            CatalogItem {
                name: "leaf".into(),
                pictogram: "🍃".into(),
                color: Some(ItemColor::Green),
            },
        ])
        .unwrap();
        let round = choice(
            generate(&catalog, &PlayConfig::default(), None, &mut seeded_rng(12)).unwrap(),
        );
        assert_eq!(round.options.len(), 2);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn answer_present_once_without_duplicates(seed in 0u64..2000) {
                let catalog = sample_catalog();
                let config = PlayConfig::default();
                let round = choice(generate(&catalog, &config, None, &mut seeded_rng(seed)).unwrap());

                let values: Vec<&str> = round.options.iter().map(|o| o.value.as_str()).collect();
                let distinct: HashSet<&str> = values.iter().copied().collect();
                prop_assert_eq!(values.len(), distinct.len());
                prop_assert_eq!(values.len(), 4);
                prop_assert_eq!(values.iter().filter(|v| **v == round.answer).count(), 1);
                prop_assert!(round.options.iter().all(|o| o.swatch.is_some()));
            }

            #[test]
            fn restore_round_trip_reproduces_prompt(seed in 0u64..500) {
                let catalog = sample_catalog();
                let config = PlayConfig::default();
                let fresh = generate(&catalog, &config, None, &mut seeded_rng(seed)).unwrap();
                let Persist::Save(state) = fresh.persist.clone() else {
                    panic!("fresh round must save");
                };
                let fresh = choice(fresh);
                let restored = choice(
                    generate(&catalog, &config, Some(&state), &mut seeded_rng(seed + 7)).unwrap(),
                );
                prop_assert_eq!(&fresh.prompt, &restored.prompt);
                prop_assert_eq!(&fresh.answer, &restored.answer);
            }
        }
    }
}
