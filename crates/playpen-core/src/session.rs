use serde::{Deserialize, Serialize};

use crate::game_registry::GameId;

/// Key/value storage scoped to one browser tab session.
///
/// The browser client backs this with `sessionStorage`. Writes are
/// best-effort: a full or unavailable store simply loses the saved round.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// The minimal data needed to rebuild a restorable round after a reload.
///
/// Serialized as JSON tagged by the game's display name, e.g.
/// `{"gameName":"Count The Items","itemName":"apple","count":3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "gameName")]
pub enum SessionState {
    #[serde(rename = "Count The Items", rename_all = "camelCase")]
    Count { item_name: String, count: u8 },
    #[serde(rename = "Color Recognition", rename_all = "camelCase")]
    Colour { item_name: String },
}

impl SessionState {
    pub fn game(&self) -> GameId {
        match self {
            Self::Count { .. } => GameId::Count,
            Self::Colour { .. } => GameId::Colour,
        }
    }

    pub fn item_name(&self) -> &str {
        match self {
            Self::Count { item_name, .. } | Self::Colour { item_name } => item_name,
        }
    }
}

/// Persist `state` under `key`, replacing whatever was there.
pub fn save_state(store: &mut dyn SessionStore, key: &str, state: &SessionState) {
    match serde_json::to_string(state) {
        Ok(json) => store.set(key, &json),
        Err(e) => tracing::warn!(error = %e, "Failed to serialize session state"),
    }
}

/// Read the saved round, if any.
///
/// Missing records, malformed JSON and unknown game names all read as
/// "no saved state".
pub fn load_state(store: &dyn SessionStore, key: &str) -> Option<SessionState> {
    let raw = store.get(key)?;
    match serde_json::from_str::<SessionState>(&raw) {
        Ok(state) => Some(state),
        Err(e) => {
            tracing::debug!(error = %e, "Ignoring unreadable session state");
            None
        },
    }
}

pub fn clear_state(store: &mut dyn SessionStore, key: &str) {
    store.remove(key);
}
