//! Command channel - the one piece of state shared between the two actors.
//!
//! The input reader enqueues, the game loop dequeues at most one command per
//! tick. A single mutex guards the queue, the fast-repeat multiplier and the
//! de-duplication memory; it is held only for the brief enqueue, dequeue and
//! reset operations, never across simulation or render work.
//!
//! The channel is a plain value constructed once by the driver and shared by
//! `Arc`, so several independent games can run side by side and unit tests
//! need no global setup.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::types::Command;

#[derive(Debug)]
struct ChannelState {
    queue: VecDeque<Command>,
    multiplier: i16,
    /// Last distinct command enqueued, for repeat collapsing.
    last: Option<Command>,
}

/// A dequeued command together with the state captured under the same lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakenCommand {
    pub command: Command,
    /// Movement step factor; consumed by the dequeue, which resets it to 1.
    pub multiplier: i16,
    /// Commands still waiting, for the `Commands queued:` status line.
    pub queued: Vec<Command>,
}

#[derive(Debug)]
pub struct CommandChannel {
    inner: Mutex<ChannelState>,
}

impl CommandChannel {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ChannelState {
                queue: VecDeque::new(),
                multiplier: 1,
                last: None,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, ChannelState> {
        // A panic while holding this lock cannot leave the queue in a
        // half-updated state, so a poisoned mutex is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enqueue a command, collapsing rapid repeats.
    ///
    /// A command equal to the last distinct one enqueued, arriving while
    /// more than one entry is already waiting, is not enqueued; it becomes
    /// a doubled step on the next dequeue instead, and the repeat memory
    /// resets so the following identical key starts a fresh entry.
    pub fn push(&self, command: Command) {
        let mut state = self.state();
        if state.last == Some(command) && state.queue.len() > 1 {
            state.multiplier = 2;
            state.last = None;
        } else {
            state.queue.push_back(command);
            state.last = Some(command);
        }
    }

    /// Dequeue one command, if any, with the multiplier and a snapshot of
    /// the remaining queue. The multiplier resets to 1 on every dequeue.
    pub fn take_one(&self) -> Option<TakenCommand> {
        let mut state = self.state();
        let command = state.queue.pop_front()?;
        let multiplier = state.multiplier;
        state.multiplier = 1;
        let queued = state.queue.iter().copied().collect();
        Some(TakenCommand {
            command,
            multiplier,
            queued,
        })
    }

    /// Discard queued commands and the repeat memory.
    ///
    /// Called at touchdown so input aimed at the old piece is never applied
    /// to the newly spawned one.
    pub fn reset(&self) {
        let mut state = self.state();
        state.queue.clear();
        state.last = None;
    }

    /// Full reset: queue, multiplier and repeat memory. Used by the `Reset`
    /// command when the whole session restarts.
    pub fn reset_all(&self) {
        let mut state = self.state();
        state.queue.clear();
        state.multiplier = 1;
        state.last = None;
    }

    pub fn len(&self) -> usize {
        self.state().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().queue.is_empty()
    }

    /// Current multiplier, without consuming it.
    pub fn multiplier(&self) -> i16 {
        self.state().multiplier
    }
}

impl Default for CommandChannel {
    fn default() -> Self {
        Self::new()
    }
}
