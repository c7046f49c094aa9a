//! Fire-and-forget delayed tasks for the event loop.
//!
//! Tasks are ordered by deadline, then by scheduling order. There is no
//! cancellation token: once scheduled a task fires unless the owner drops
//! it explicitly with [`Scheduler::retain_run`].

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use crate::app::RunId;

#[derive(Debug)]
pub struct Scheduled<T> {
    pub run: RunId,
    pub due: Instant,
    seq: u64,
    pub task: T,
}

impl<T> PartialEq for Scheduled<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Scheduled<T> {}

impl<T> PartialOrd for Scheduled<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Scheduled<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due).then(self.seq.cmp(&other.seq))
    }
}

#[derive(Debug)]
pub struct Scheduler<T> {
    queue: BinaryHeap<Reverse<Scheduled<T>>>,
    seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            queue: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl<T> Scheduler<T> {
    /// Schedule `task` to fire `delay` after `start`.
    pub fn schedule(&mut self, run: RunId, start: Instant, delay: Duration, task: T) {
        let seq = self.seq;
        self.seq += 1;
        self.queue.push(Reverse(Scheduled {
            run,
            due: start + delay,
            seq,
            task,
        }));
    }

    /// Earliest pending deadline.
    pub fn next_due(&self) -> Option<Instant> {
        self.queue.peek().map(|Reverse(s)| s.due)
    }

    /// Pop the earliest task if its deadline is at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<Scheduled<T>> {
        if self.next_due()? <= now {
            self.queue.pop().map(|Reverse(s)| s)
        } else {
            None
        }
    }

    /// Keep only the tasks of `run`; returns how many were dropped.
    pub fn retain_run(&mut self, run: RunId) -> usize {
        let before = self.queue.len();
        self.queue.retain(|Reverse(s)| s.run == run);
        before - self.queue.len()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn pops_in_deadline_order_regardless_of_insertion() {
        let t0 = Instant::now();
        let mut s = Scheduler::default();
        s.schedule(RunId(1), t0, ms(900), "b");
        s.schedule(RunId(1), t0, ms(400), "a");
        s.schedule(RunId(1), t0, ms(1600), "c");

        assert!(s.pop_due(t0 + ms(399)).is_none());
        let fired: Vec<&str> = std::iter::from_fn(|| s.pop_due(t0 + ms(2000)))
            .map(|t| t.task)
            .collect();
        assert_eq!(fired, vec!["a", "b", "c"]);
        assert!(s.is_empty());
    }

    #[test]
    fn equal_deadlines_fire_in_scheduling_order() {
        let t0 = Instant::now();
        let mut s = Scheduler::default();
        for i in 0..5 {
            s.schedule(RunId(1), t0, ms(10), i);
        }
        let fired: Vec<i32> = std::iter::from_fn(|| s.pop_due(t0 + ms(10)))
            .map(|t| t.task)
            .collect();
        assert_eq!(fired, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn retain_run_drops_other_runs() {
        let t0 = Instant::now();
        let mut s = Scheduler::default();
        s.schedule(RunId(1), t0, ms(5), ());
        s.schedule(RunId(1), t0, ms(6), ());
        s.schedule(RunId(2), t0, ms(7), ());
        assert_eq!(s.retain_run(RunId(2)), 2);
        assert_eq!(s.len(), 1);
        assert_eq!(s.next_due(), Some(t0 + ms(7)));
    }
}
