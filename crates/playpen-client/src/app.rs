use std::collections::HashMap;

use rand::rngs::StdRng;

use playpen_core::answer::Verdict;
use playpen_core::catalog::Catalog;
use playpen_core::config::PlayConfig;
use playpen_core::controller::{Session, Start};
use playpen_core::error::CatalogError;
use playpen_core::round::matching::{Column, PickOutcome, TileRef};
use playpen_core::tasks::TaskId;

use crate::diag;
use crate::storage::TabStorage;

/// How much of the page an event invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    Nothing,
    /// Feedback line, next button and tooltip.
    Chrome,
    /// The round markup as well as the chrome.
    Everything,
}

/// Top-level page state shared by the event listeners.
pub struct App {
    pub session: Session,
    pub store: TabStorage,
    pub rng: StdRng,
    /// Browser timeout handles of started tasks.
    pub timeouts: HashMap<TaskId, i32>,
}

impl App {
    pub fn new(session: Session, rng: StdRng) -> Self {
        Self {
            session,
            store: TabStorage,
            rng,
            timeouts: HashMap::new(),
        }
    }

    /// Build the app from catalog and config TOML sources. Unreadable
    /// tunables fall back to the defaults.
    pub fn load(catalog_toml: &str, config_toml: &str, rng: StdRng) -> Result<Self, CatalogError> {
        let catalog = Catalog::from_toml_str(catalog_toml)?;
        let config = PlayConfig::from_toml_str(config_toml).unwrap_or_else(|e| {
            diag::console_warn!("Using default tunables: {e}");
            PlayConfig::default()
        });
        Ok(Self::new(Session::new(catalog, config), rng))
    }

    pub fn config(&self) -> &PlayConfig {
        self.session.config()
    }

    /// Start the first round of the page load.
    pub fn start(&mut self, url_game: Option<&str>) -> Redraw {
        match self
            .session
            .initialize(url_game, &mut self.store, &mut self.rng)
        {
            Ok(Start::Restored(game)) => diag::console_log!("Restored {game}"),
            Ok(Start::Pinned(game)) => diag::console_log!("Playing only {game}"),
            Ok(Start::Fresh(game)) => diag::console_log!("Starting with {game}"),
            Err(e) => diag::console_warn!("Could not start a round: {e}"),
        }
        Redraw::Everything
    }

    pub fn next(&mut self) -> Redraw {
        if let Err(e) = self.session.next_round(&mut self.store, &mut self.rng) {
            diag::console_warn!("Could not start the next round: {e}");
        }
        Redraw::Everything
    }

    /// A click landed on a choice button carrying `value`.
    pub fn choose(&mut self, value: &str) -> Redraw {
        match self.session.choose(value) {
            Verdict::Ignored => Redraw::Nothing,
            Verdict::Correct(_) | Verdict::Incorrect(_) => Redraw::Everything,
        }
    }

    /// A click landed on a matching tile with the given data attributes.
    pub fn pick_tile(&mut self, column: &str, index: &str) -> Redraw {
        let Some(at) = parse_tile_ref(column, index) else {
            return Redraw::Nothing;
        };
        match self.session.pick_tile(at) {
            PickOutcome::Ignored => Redraw::Nothing,
            _ => Redraw::Everything,
        }
    }

    pub fn hover(&mut self, name: &str, x: f64, y: f64) -> Redraw {
        self.session.show_tooltip(name, x, y);
        Redraw::Chrome
    }

    /// A browser timeout for task `id` went off.
    pub fn timer_fired(&mut self, id: TaskId) -> Redraw {
        self.timeouts.remove(&id);
        if self.session.fire(id) {
            Redraw::Everything
        } else {
            Redraw::Nothing
        }
    }
}

/// Decode the `data-column` / `data-index` pair of a tile element.
pub fn parse_tile_ref(column: &str, index: &str) -> Option<TileRef> {
    let column = Column::parse(column)?;
    let index = index.trim().parse().ok()?;
    Some(TileRef::new(column, index))
}
