//! Cancelable delayed tasks.
//!
//! The core never touches a clock. It records what should happen later and
//! emits [`TaskCommand`]s; the host starts or clears real timers and reports
//! back with [`TaskQueue::take`] when one fires. A firing whose id was
//! cancelled in the meantime finds nothing and is dropped.

use std::collections::BTreeMap;

use crate::round::matching::TileRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u32);

/// Work to run when a task fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Stop shaking a choice button.
    ClearOptionShake(usize),
    /// Stop shaking a mismatched pair of tiles.
    ClearTileShake([TileRef; 2]),
    HideTooltip,
}

/// Instruction for the host's timer facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskCommand {
    Start { id: TaskId, delay_ms: u32 },
    Cancel { id: TaskId },
}

#[derive(Debug, Default)]
pub struct TaskQueue {
    next_id: u32,
    pending: BTreeMap<TaskId, TaskKind>,
    commands: Vec<TaskCommand>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, kind: TaskKind, delay_ms: u32) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.insert(id, kind);
        self.commands.push(TaskCommand::Start { id, delay_ms });
        id
    }

    /// Cancel one task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        if self.pending.remove(&id).is_some() {
            self.commands.push(TaskCommand::Cancel { id });
            true
        } else {
            false
        }
    }

    /// Cancel every pending task of the given kind.
    pub fn cancel_kind(&mut self, kind: TaskKind) {
        let ids: Vec<TaskId> = self
            .pending
            .iter()
            .filter(|(_, k)| **k == kind)
            .map(|(id, _)| *id)
            .collect();
        for id in ids {
            self.cancel(id);
        }
    }

    pub fn cancel_all(&mut self) {
        let ids: Vec<TaskId> = self.pending.keys().copied().collect();
        for id in ids {
            self.cancel(id);
        }
    }

    /// Claim a fired task. `None` for stale or unknown ids.
    pub fn take(&mut self, id: TaskId) -> Option<TaskKind> {
        self.pending.remove(&id)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Commands accumulated since the last drain, in issue order.
    pub fn drain_commands(&mut self) -> Vec<TaskCommand> {
        std::mem::take(&mut self.commands)
    }
}
