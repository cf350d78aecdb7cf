//! Task scheduler
//!
//! A single-threaded queue of delayed tasks on a virtual millisecond clock.
//! Nothing runs on its own: the owner advances the clock and pops tasks as
//! they come due, so every task executes on the caller's thread in a
//! deterministic order (due time first, posting order second).

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a pending task, used to cancel it
    pub struct TaskId;
}

struct PendingTask<T> {
    due_ms: u64,
    seq: u64,
    task: T,
}

/// Queue of delayed tasks keyed by cancellable handles
pub struct TaskScheduler<T> {
    pending: SlotMap<TaskId, PendingTask<T>>,
    now_ms: u64,
    next_seq: u64,
}

impl<T> TaskScheduler<T> {
    pub fn new() -> Self {
        Self {
            pending: SlotMap::with_key(),
            now_ms: 0,
            next_seq: 0,
        }
    }

    /// Current clock value in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Run `task` once `delay_ms` has elapsed. A zero delay makes the task
    /// due on the next pop.
    pub fn post_delayed(&mut self, task: T, delay_ms: u64) -> TaskId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert(PendingTask {
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq,
            task,
        })
    }

    /// Run `task` on the next pop
    pub fn post(&mut self, task: T) -> TaskId {
        self.post_delayed(task, 0)
    }

    /// Cancel a pending task. Returns the task if it had not run yet.
    pub fn cancel(&mut self, id: TaskId) -> Option<T> {
        self.pending.remove(id).map(|p| p.task)
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.contains_key(id)
    }

    /// Due time of the earliest pending task
    pub fn next_due_ms(&self) -> Option<u64> {
        self.pending.values().map(|p| p.due_ms).min()
    }

    /// Remove and return the earliest task due at or before `limit_ms`,
    /// moving the clock forward to its due time.
    pub fn pop_due(&mut self, limit_ms: u64) -> Option<(TaskId, T)> {
        let (id, due_ms) = self
            .pending
            .iter()
            .filter(|(_, p)| p.due_ms <= limit_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(id, p)| (id, p.due_ms))?;

        let task = self.pending.remove(id)?.task;
        tracing::trace!("task due at {}ms runs at clock {}ms", due_ms, self.now_ms);
        self.now_ms = self.now_ms.max(due_ms);
        Some((id, task))
    }

    /// Move the clock forward without running anything
    pub fn advance_to(&mut self, now_ms: u64) {
        if now_ms > self.now_ms {
            self.now_ms = now_ms;
        }
    }

    /// Get the number of pending tasks
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<T> Default for TaskScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
