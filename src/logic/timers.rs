// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! One-shot deferred tasks driven by an injected clock.
//!
//! The queue never reads the system time itself: callers pass `now` when
//! scheduling and when draining, so frame ticks and tests share one code path.

use std::time::{Duration, Instant};

/// Cancellable reference to a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

struct Scheduled<T> {
    handle: TimerHandle,
    deadline: Instant,
    task: T,
}

/// Pending tasks ordered by deadline, ties broken by scheduling order.
pub struct TimerQueue<T> {
    pending: Vec<Scheduled<T>>,
    next_handle: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_handle: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to fire once, `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        let deadline = now + delay;
        // Keep sorted; equal deadlines stay in insertion order.
        let pos = self.pending.partition_point(|s| s.deadline <= deadline);
        self.pending.insert(
            pos,
            Scheduled {
                handle,
                deadline,
                task,
            },
        );
        handle
    }

    /// Drop a pending task. Returns it if it had not fired yet.
    pub fn cancel(&mut self, handle: TimerHandle) -> Option<T> {
        let pos = self.pending.iter().position(|s| s.handle == handle)?;
        Some(self.pending.remove(pos).task)
    }

    /// Remove and return every task whose deadline is at or before `now`.
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let due = self.pending.partition_point(|s| s.deadline <= now);
        self.pending.drain(..due).map(|s| s.task).collect()
    }

    /// Earliest pending deadline, used to schedule the next repaint.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.first().map(|s| s.deadline)
    }

    #[allow(dead_code)]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|s| s.handle == handle)
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_fires_at_deadline_not_before() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(start, Duration::from_millis(3000), "remove");

        assert!(queue.take_due(start + Duration::from_millis(2999)).is_empty());
        assert_eq!(
            queue.take_due(start + Duration::from_millis(3000)),
            vec!["remove"]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn due_tasks_come_out_in_deadline_order() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(start, Duration::from_millis(300), 2);
        queue.schedule(start, Duration::from_millis(100), 1);
        queue.schedule(start, Duration::from_millis(300), 3);

        assert_eq!(queue.next_deadline(), Some(start + Duration::from_millis(100)));
        assert_eq!(queue.take_due(start + Duration::from_secs(1)), vec![1, 2, 3]);
    }

    #[test]
    fn cancelled_task_never_fires() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        let keep = queue.schedule(start, Duration::from_millis(10), "keep");
        let drop = queue.schedule(start, Duration::from_millis(10), "drop");

        assert_eq!(queue.cancel(drop), Some("drop"));
        assert_eq!(queue.cancel(drop), None);
        assert!(queue.is_pending(keep));
        assert_eq!(queue.take_due(start + Duration::from_millis(10)), vec!["keep"]);
        assert_eq!(queue.cancel(keep), None);
    }
}
