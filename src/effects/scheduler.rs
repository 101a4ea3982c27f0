//! Deterministic timer queue.
//!
//! Browser effects are chains of `setTimeout` / `requestAnimationFrame`
//! callbacks. Here they are modelled as tasks queued at a due time on a
//! virtual clock that only moves when the caller advances it, so tests can
//! step through seconds of animation instantly and exactly.
//!
//! Tasks due at the same instant run in the order they were scheduled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

struct Entry<T> {
    due: Duration,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed: BinaryHeap is a max-heap and we want the earliest entry on top.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A virtual-time task queue.
pub struct VirtualScheduler<T> {
    now: Duration,
    seq: u64,
    queue: BinaryHeap<Entry<T>>,
}

impl<T> Default for VirtualScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VirtualScheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `task` to run `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, task: T) {
        let entry = Entry {
            due: self.now.saturating_add(delay),
            seq: self.seq,
            task,
        };
        self.seq += 1;
        self.queue.push(entry);
    }

    /// Due time of the earliest pending task.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.peek().map(|e| e.due)
    }

    /// Pop the earliest task if it is due at or before `deadline`.
    ///
    /// The clock moves to the task's due time, so anything the caller
    /// schedules while handling it is relative to that instant.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<(Duration, T)> {
        if self.next_due()? > deadline {
            return None;
        }
        let entry = self.queue.pop()?;
        self.now = self.now.max(entry.due);
        Some((entry.due, entry.task))
    }

    /// Move the clock forward to `deadline` (never backwards).
    pub fn advance_to(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
