use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, RngCore};

use super::{ChoiceOption, ChoiceRound, Generated, OptionStatus, Persist, Round};
use crate::catalog::Catalog;
use crate::config::PlayConfig;
use crate::error::RoundError;
use crate::game_registry::GameId;
use crate::session::SessionState;

/// "How many {pictogram} are there?"
///
/// Restores from [`SessionState::Count`]; any other restore record is
/// treated as absent and a fresh round is drawn.
pub fn generate(
    catalog: &Catalog,
    config: &PlayConfig,
    restore: Option<&SessionState>,
    rng: &mut dyn RngCore,
) -> Result<Generated, RoundError> {
    let (item, count, persist) = match restore {
        Some(SessionState::Count { item_name, count }) => {
            let item = catalog
                .find(item_name)
                .ok_or_else(|| RoundError::UnknownItem(item_name.clone()))?;
            if *count == 0 || *count > config.max_count {
                return Err(RoundError::InvalidCount(*count));
            }
            (item, *count, Persist::Keep)
        },
        _ => {
            let item = catalog
                .items()
                .choose(rng)
                .ok_or(RoundError::NoItems(GameId::Count))?;
            let count = rng.random_range(1..=config.max_count);
            let state = SessionState::Count {
                item_name: item.name.clone(),
                count,
            };
            (item, count, Persist::Save(state))
        },
    };

    let options = count_options(count, config, rng)
        .into_iter()
        .map(|n| ChoiceOption {
            value: n.to_string(),
            label: n.to_string(),
            swatch: None,
            status: OptionStatus::Idle,
        })
        .collect();

    let round = ChoiceRound {
        game: GameId::Count,
        prompt: format!("How many {} are there?", item.pictogram),
        subject: item.clone(),
        repeat: count as usize,
        options,
        answer: count.to_string(),
    };
    Ok(Generated {
        round: Round::Choice(round),
        persist,
    })
}

/// `quantity_options` distinct values in `1..=max_count`, `count` among them,
/// in random order.
fn count_options(count: u8, config: &PlayConfig, rng: &mut dyn RngCore) -> Vec<u8> {
    let decoys: Vec<u8> = (1..=config.max_count).filter(|&n| n != count).collect();
    let wanted = config.quantity_options.saturating_sub(1);
    let mut options: Vec<u8> = decoys.choose_multiple(rng, wanted).copied().collect();
    options.push(count);
    options.shuffle(rng);
    options
}
