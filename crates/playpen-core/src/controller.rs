use rand::RngCore;

use crate::answer::{Feedback, Verdict, judge};
use crate::catalog::Catalog;
use crate::config::PlayConfig;
use crate::error::RoundError;
use crate::game_registry::{GameId, random_game};
use crate::round::matching::{PickOutcome, TileRef};
use crate::round::{Generated, OptionStatus, Persist, Round};
use crate::session::{SessionStore, clear_state, load_state, save_state};
use crate::tasks::{TaskCommand, TaskId, TaskKind, TaskQueue};
use crate::tooltip::Tooltip;

/// How the first round of a page load was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Start {
    /// Rebuilt from the saved session record.
    Restored(GameId),
    /// Requested through the URL; later rounds stay on this game.
    Pinned(GameId),
    /// Freshly drawn, session left unpinned.
    Fresh(GameId),
}

/// Everything the page needs to draw the current moment of play.
#[derive(Debug, Default)]
pub struct SessionContext {
    active: bool,
    pinned: Option<GameId>,
    round: Option<Round>,
    feedback: Feedback,
    next_visible: bool,
    tooltip: Tooltip,
    tasks: TaskQueue,
}

impl SessionContext {
    /// Whether clicks on the round are accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pinned(&self) -> Option<GameId> {
        self.pinned
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn next_visible(&self) -> bool {
        self.next_visible
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.pending_len()
    }
}

/// Drives rounds for one browser tab.
pub struct Session {
    catalog: Catalog,
    config: PlayConfig,
    ctx: SessionContext,
}

impl Session {
    pub fn new(catalog: Catalog, config: PlayConfig) -> Self {
        Self {
            catalog,
            config,
            ctx: SessionContext::default(),
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    pub fn config(&self) -> &PlayConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Choose the first round of a page load.
    ///
    /// With no `url_game` at all, a saved round is restored. A known
    /// `url_game` pins the session and replaces any saved round. Otherwise,
    /// including for an unknown `url_game`, any saved round is dropped and a
    /// random game is started.
    pub fn initialize(
        &mut self,
        url_game: Option<&str>,
        store: &mut dyn SessionStore,
        rng: &mut dyn RngCore,
    ) -> Result<Start, RoundError> {
        let requested = url_game.and_then(|key| {
            let game = GameId::from_url_key(key);
            if game.is_none() {
                tracing::debug!(key, "Ignoring unknown game id");
            }
            game
        });

        if url_game.is_none()
            && let Some(saved) = load_state(store, &self.config.storage_key)
        {
            let game = saved.game();
            return match game.generate(&self.catalog, &self.config, Some(&saved), rng) {
                Ok(generated) => {
                    self.begin(generated, store);
                    Ok(Start::Restored(game))
                },
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding saved round");
                    clear_state(store, &self.config.storage_key);
                    self.fresh(game, store, rng).map(Start::Fresh)
                },
            };
        }

        if let Some(game) = requested {
            self.ctx.pinned = Some(game);
            clear_state(store, &self.config.storage_key);
            return self.fresh(game, store, rng).map(Start::Pinned);
        }

        self.next_round(store, rng).map(Start::Fresh)
    }

    /// Tear down the current round and start another: the pinned game if
    /// there is one, otherwise a random playable game.
    pub fn next_round(
        &mut self,
        store: &mut dyn SessionStore,
        rng: &mut dyn RngCore,
    ) -> Result<GameId, RoundError> {
        clear_state(store, &self.config.storage_key);
        self.ctx.tasks.cancel_all();
        self.ctx.tooltip.hide();
        self.ctx.round = None;
        self.ctx.feedback = Feedback::Empty;
        self.ctx.next_visible = false;
        self.ctx.active = false;

        let game = match self.ctx.pinned {
            Some(game) => game,
            None => random_game(&self.catalog, &self.config, rng)
                .ok_or(RoundError::NothingPlayable)?,
        };
        self.fresh(game, store, rng)
    }

    fn fresh(
        &mut self,
        game: GameId,
        store: &mut dyn SessionStore,
        rng: &mut dyn RngCore,
    ) -> Result<GameId, RoundError> {
        let game = if game.is_playable(&self.catalog, &self.config) {
            game
        } else {
            tracing::warn!(%game, "Catalog cannot supply this game, picking another");
            random_game(&self.catalog, &self.config, rng).ok_or(RoundError::NothingPlayable)?
        };
        let generated = game.generate(&self.catalog, &self.config, None, rng)?;
        self.begin(generated, store);
        Ok(game)
    }

    fn begin(&mut self, generated: Generated, store: &mut dyn SessionStore) {
        let key = &self.config.storage_key;
        match &generated.persist {
            Persist::Save(state) => save_state(store, key, state),
            Persist::Keep => {},
            Persist::Clear => clear_state(store, key),
        }
        tracing::info!(game = %generated.round.game(), "Round started");
        self.ctx.round = Some(generated.round);
        self.ctx.active = true;
    }

    /// Handle a click on a choice button carrying `value`.
    pub fn choose(&mut self, value: &str) -> Verdict {
        if !self.ctx.active {
            return Verdict::Ignored;
        }
        let Some(Round::Choice(round)) = self.ctx.round.as_mut() else {
            return Verdict::Ignored;
        };

        let verdict = judge(round, value);
        match verdict {
            Verdict::Correct(_) => {
                self.ctx.active = false;
                self.ctx.feedback = Feedback::Correct;
                self.ctx.next_visible = true;
            },
            Verdict::Incorrect(index) => {
                self.ctx.feedback = Feedback::TryAgain;
                let kind = TaskKind::ClearOptionShake(index);
                self.ctx.tasks.cancel_kind(kind);
                self.ctx.tasks.schedule(kind, self.config.shake_ms);
            },
            Verdict::Ignored => {},
        }
        verdict
    }

    /// Handle a click on a matching-board tile.
    pub fn pick_tile(&mut self, at: TileRef) -> PickOutcome {
        if !self.ctx.active {
            return PickOutcome::Ignored;
        }
        let Some(Round::Match(round)) = self.ctx.round.as_mut() else {
            return PickOutcome::Ignored;
        };

        let outcome = round.board.pick(at);
        match outcome {
            PickOutcome::Matched { complete, .. } => {
                if complete {
                    self.ctx.feedback = Feedback::AllDone;
                    self.ctx.active = false;
                    self.ctx.next_visible = true;
                } else {
                    self.ctx.feedback = Feedback::PairFound;
                }
            },
            PickOutcome::Mismatched { pair } => {
                self.ctx.feedback = Feedback::NotAPair;
                self.ctx
                    .tasks
                    .schedule(TaskKind::ClearTileShake(pair), self.config.shake_ms);
            },
            PickOutcome::Selected(_) | PickOutcome::Ignored => {},
        }
        outcome
    }

    /// Show the name tooltip at the pointer and restart its hide timer.
    pub fn show_tooltip(&mut self, name: &str, x: f64, y: f64) {
        if self.ctx.tooltip.show(name, x, y) {
            self.ctx.tasks.cancel_kind(TaskKind::HideTooltip);
            self.ctx
                .tasks
                .schedule(TaskKind::HideTooltip, self.config.tooltip_ms);
        }
    }

    /// Run a fired timer. Returns false for cancelled or unknown tasks.
    pub fn fire(&mut self, id: TaskId) -> bool {
        let Some(kind) = self.ctx.tasks.take(id) else {
            return false;
        };
        match (kind, self.ctx.round.as_mut()) {
            (TaskKind::ClearOptionShake(index), Some(Round::Choice(round))) => {
                if let Some(option) = round.options.get_mut(index)
                    && option.status == OptionStatus::Shaking
                {
                    option.status = OptionStatus::Idle;
                }
            },
            (TaskKind::ClearTileShake(pair), Some(Round::Match(round))) => {
                round.board.clear_shake(&pair);
            },
            (TaskKind::HideTooltip, _) => self.ctx.tooltip.hide(),
            _ => {},
        }
        true
    }

    /// Timer starts and cancellations the host must carry out.
    pub fn drain_task_commands(&mut self) -> Vec<TaskCommand> {
        self.ctx.tasks.drain_commands()
    }
}
