//! Cooperative virtual-time scheduler.
//!
//! All timed behavior (typewriter ticks, notification dismissal, particle
//! refresh, smooth scroll frames) is queued here as plain task values. The
//! owner drains due tasks with [`Scheduler::pop_due`] while advancing the
//! clock, so tests control time exactly and the desktop shell feeds it real
//! elapsed time.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::time::Duration;

/// Handle returned by [`Scheduler::schedule_after`], used to cancel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct ScheduledTask<T> {
    run_at: Duration,
    id: u64,
    task: T,
}

impl<T> PartialEq for ScheduledTask<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for ScheduledTask<T> {}

impl<T> PartialOrd for ScheduledTask<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ScheduledTask<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first, then FIFO)
        other
            .run_at
            .cmp(&self.run_at)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// One-shot timer queue over a virtual clock
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    tasks: BinaryHeap<ScheduledTask<T>>,
    cancelled: HashSet<u64>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            tasks: BinaryHeap::new(),
            cancelled: HashSet::new(),
        }
    }

    /// Current virtual time since the scheduler was created
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `task` to run `delay` after the current time
    pub fn schedule_after(&mut self, delay: Duration, task: T) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;

        self.tasks.push(ScheduledTask {
            run_at: self.now + delay,
            id,
            task,
        });

        TimerId(id)
    }

    /// Cancel a pending task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, timer: TimerId) -> bool {
        if self.tasks.iter().any(|t| t.id == timer.0) {
            self.cancelled.insert(timer.0)
        } else {
            false
        }
    }

    /// Pop the earliest task due at or before `until`, moving the clock to its deadline
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        loop {
            let due = self.tasks.peek().is_some_and(|t| t.run_at <= until);
            if !due {
                return None;
            }
            let scheduled = self.tasks.pop()?;
            if self.cancelled.remove(&scheduled.id) {
                continue;
            }
            if scheduled.run_at > self.now {
                self.now = scheduled.run_at;
            }
            return Some(scheduled.task);
        }
    }

    /// Move the clock forward without running anything
    pub fn advance_to(&mut self, time: Duration) {
        if time > self.now {
            self.now = time;
        }
    }

    /// Time until the next live task, if any
    pub fn time_until_next(&self) -> Option<Duration> {
        self.tasks
            .iter()
            .filter(|t| !self.cancelled.contains(&t.id))
            .map(|t| t.run_at.saturating_sub(self.now))
            .min()
    }

    /// Number of live (not cancelled) tasks
    pub fn pending(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| !self.cancelled.contains(&t.id))
            .count()
    }

    /// Whether any live task satisfies `predicate`
    pub fn has_pending(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.tasks
            .iter()
            .filter(|t| !self.cancelled.contains(&t.id))
            .any(|t| predicate(&t.task))
    }
}

/// Caps an action to at most once per interval.
///
/// The first call passes and opens a quiet window of `interval`; calls
/// inside the window are dropped rather than deferred.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last: Option<Duration>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self { interval, last: None }
    }

    /// Returns true if the action may run at `now`
    pub fn try_acquire(&mut self, now: Duration) -> bool {
        match self.last {
            Some(last) if now < last + self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

/// Defers an action until input stops for a quiet period
#[derive(Debug, Clone)]
pub struct Debounce {
    wait: Duration,
    pending: Option<TimerId>,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self { wait, pending: None }
    }

    /// Cancel any pending run and schedule `task` after the quiet period
    pub fn trigger<T>(&mut self, scheduler: &mut Scheduler<T>, task: T) -> TimerId {
        if let Some(previous) = self.pending.take() {
            scheduler.cancel(previous);
        }
        let id = scheduler.schedule_after(self.wait, task);
        self.pending = Some(id);
        id
    }

    /// Mark the pending run as fired
    pub fn fired(&mut self) {
        self.pending = None;
    }
}
