//! Virtual-time scheduler for cosmetic timers
//!
//! The host drives time explicitly; nothing here sleeps or spawns. Due timers
//! are handed back one at a time so that a handler may schedule follow-up
//! timers relative to the instant its own timer fired.
//!
//! A repeating timer with nothing else due in between is handed back once for
//! a whole run of firings, so advancing by a long stretch costs one pop per
//! interleaved timer rather than one per interval.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Shortest interval a repeating timer may use
const MIN_INTERVAL: Duration = Duration::from_millis(1);

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Identifies a scheduled timer so it can be cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimerHandle(u64);

/// A timer that came due
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    pub handle: TimerHandle,
    pub task: T,
    /// Instant the timer was (last) due, which may be earlier than the advance target
    pub at: Duration,
    /// How many consecutive firings this stands for; always 1 for one-shot timers
    pub times: u128,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    task: T,
    interval: Option<Duration>,
}

/// Timers ordered by deadline, ties broken by handle (scheduling order)
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<(Duration, TimerHandle), Entry<T>>,
    deadlines: HashMap<TimerHandle, Duration>,
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            timers: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending timers
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Whether a handle still refers to a pending timer
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle)
    }

    /// Deadline of a pending timer
    pub fn deadline(&self, handle: TimerHandle) -> Option<Duration> {
        self.deadlines.get(&handle).copied()
    }

    /// Run `task` once, `delay` from now
    pub fn schedule_once(&mut self, delay: Duration, task: T) -> TimerHandle {
        self.insert(self.now.saturating_add(delay), task, None)
    }

    /// Run `task` every `interval`, first time one interval from now
    pub fn schedule_repeating(&mut self, interval: Duration, task: T) -> TimerHandle {
        let interval = interval.max(MIN_INTERVAL);
        self.insert(self.now.saturating_add(interval), task, Some(interval))
    }

    /// Cancel a pending timer; returns false if it already fired or was cancelled
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle) {
            Some(deadline) => self.timers.remove(&(deadline, handle)).is_some(),
            None => false,
        }
    }

    /// Replace the timer held in `slot`: cancel the old one, schedule the new one
    pub fn reschedule(&mut self, slot: &mut Option<TimerHandle>, delay: Duration, task: T) {
        if let Some(previous) = slot.take() {
            self.cancel(previous);
        }
        *slot = Some(self.schedule_once(delay, task));
    }

    /// Cancel the timer held in `slot`, if any
    pub fn clear(&mut self, slot: &mut Option<TimerHandle>) -> bool {
        slot.take().is_some_and(|handle| self.cancel(handle))
    }

    /// Pop the earliest timer due at or before `until`
    ///
    /// Moves the clock to the timer's deadline. A repeating timer fires for
    /// every interval that ends before the next other timer and no later than
    /// `until`; those firings come back as one [`Fired`] with `times` set. It
    /// is then put back one interval after its last firing under the same
    /// handle.
    pub fn pop_due(&mut self, until: Duration) -> Option<Fired<T>> {
        let (&(first, handle), _) = self.timers.first_key_value()?;
        if first > until {
            return None;
        }

        let entry = self.timers.remove(&(first, handle))?;
        self.deadlines.remove(&handle);

        let (at, times) = match entry.interval {
            Some(interval) => {
                let limit = self.timers.first_key_value().map(|(&(next, _), _)| next);
                let times = run_length(first, interval, until, limit);
                let last = offset(first, interval, times - 1).unwrap_or(until);
                // Past the end of representable time the timer never fires again
                if let Some(next) = last.checked_add(interval) {
                    self.timers.insert(
                        (next, handle),
                        Entry {
                            task: entry.task.clone(),
                            interval: Some(interval),
                        },
                    );
                    self.deadlines.insert(handle, next);
                }
                (last, times)
            }
            None => (first, 1),
        };
        self.now = self.now.max(at);

        Some(Fired {
            handle,
            task: entry.task,
            at,
            times,
        })
    }

    /// Move the clock forward without firing anything still pending
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Fire everything due up to `until` and move the clock there
    pub fn advance_to(&mut self, until: Duration) -> Vec<Fired<T>> {
        let mut fired = Vec::new();
        while let Some(timer) = self.pop_due(until) {
            fired.push(timer);
        }
        self.settle(until);
        fired
    }

    fn insert(&mut self, deadline: Duration, task: T, interval: Option<Duration>) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.timers.insert((deadline, handle), Entry { task, interval });
        self.deadlines.insert(handle, deadline);
        handle
    }
}

/// Firings at `first + k * interval` that are `<= until` and, when another
/// timer is pending at `limit`, strictly before it; the first always counts
fn run_length(first: Duration, interval: Duration, until: Duration, limit: Option<Duration>) -> u128 {
    let step = interval.as_nanos();
    let mut last = (until - first).as_nanos() / step;
    if let Some(limit) = limit {
        // ties at `limit` go back through the queue so handle order is kept
        let gap = (limit - first).as_nanos();
        last = last.min(gap.div_ceil(step).saturating_sub(1));
    }
    last + 1
}

/// `first + k * interval`, if representable
fn offset(first: Duration, interval: Duration, k: u128) -> Option<Duration> {
    let nanos = first
        .as_nanos()
        .checked_add(interval.as_nanos().checked_mul(k)?)?;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).ok()?;
    Some(Duration::new(secs, (nanos % NANOS_PER_SEC) as u32))
}

impl<T: Clone> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
