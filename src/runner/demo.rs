//! Mock run: a fixed set of log lines emitted on fixed delays.
//!
//! Nothing is planned or executed. A valid run clears the log, posts the
//! planning pulse and schedules three independent steps measured from the
//! run start. Steps from an earlier run still fire into the current state
//! unless `invalidate_stale` is set; that is the historical behaviour and
//! is kept as the default.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::schedule::Scheduler;
use crate::app::{PulseStyle, RunId, UIState};
use crate::errors::RunError;

pub const EMPTY_INTENT_MESSAGE: &str = "Enter an intent to run the demo.";
pub const PLANNING_MESSAGE: &str = "Planning in demo mode…";
pub const COMPLETED_MESSAGE: &str = "Demo completed — UI is live.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoStep {
    PlanCreated,
    ExecutingSteps,
    AllSucceeded,
}

impl DemoStep {
    pub const SEQUENCE: [DemoStep; 3] = [
        DemoStep::PlanCreated,
        DemoStep::ExecutingSteps,
        DemoStep::AllSucceeded,
    ];

    /// Delay from the start of the run, not from the previous step.
    pub fn delay(self) -> Duration {
        match self {
            DemoStep::PlanCreated => Duration::from_millis(400),
            DemoStep::ExecutingSteps => Duration::from_millis(900),
            DemoStep::AllSucceeded => Duration::from_millis(1600),
        }
    }

    pub fn log_line(self) -> &'static str {
        match self {
            DemoStep::PlanCreated => "• Plan created (mock)",
            DemoStep::ExecutingSteps => "• Executing steps (mock)",
            DemoStep::AllSucceeded => "• All steps succeeded (mock)",
        }
    }

    fn apply(self, state: &mut UIState) {
        state.log.append(self.log_line());
        if self == DemoStep::AllSucceeded {
            state.set_status(COMPLETED_MESSAGE, PulseStyle::Ok);
        }
    }
}

#[derive(Debug, Default)]
pub struct DemoRunner {
    schedule: Scheduler<DemoStep>,
    last_run: Option<RunId>,
    invalidate_stale: bool,
}

impl DemoRunner {
    pub fn new(invalidate_stale: bool) -> Self {
        Self {
            invalidate_stale,
            ..Self::default()
        }
    }

    /// Start a run for `intent` at `now`.
    ///
    /// Empty or whitespace-only input only sets the warning pulse; the log
    /// and any pending steps are left alone.
    pub fn run(
        &mut self,
        state: &mut UIState,
        intent: &str,
        now: Instant,
    ) -> Result<RunId, RunError> {
        let intent = intent.trim();
        if intent.is_empty() {
            debug!("run rejected: empty intent");
            state.set_status(EMPTY_INTENT_MESSAGE, PulseStyle::Warn);
            return Err(RunError::EmptyIntent);
        }

        let run = RunId(self.last_run.map_or(1, |r| r.0 + 1));
        self.last_run = Some(run);

        if self.invalidate_stale {
            let dropped = self.schedule.retain_run(run);
            if dropped > 0 {
                debug!(%run, dropped, "dropped pending steps of earlier runs");
            }
        } else if !self.schedule.is_empty() {
            warn!(
                %run,
                pending = self.schedule.len(),
                "new run started while earlier steps are pending"
            );
        }

        state.log.clear();
        state.set_status(PLANNING_MESSAGE, PulseStyle::Warn);
        state.log.append(format!("Intent: {intent}"));
        for step in DemoStep::SEQUENCE {
            self.schedule.schedule(run, now, step.delay(), step);
        }
        info!(%run, intent, "demo run started");
        Ok(run)
    }

    /// Apply every step whose deadline is at or before `now`, in deadline
    /// order. Returns the number of steps applied.
    pub fn fire_due(&mut self, state: &mut UIState, now: Instant) -> usize {
        let mut fired = 0;
        while let Some(entry) = self.schedule.pop_due(now) {
            if Some(entry.run) != self.last_run {
                warn!(
                    step_run = %entry.run,
                    current_run = ?self.last_run,
                    step = ?entry.task,
                    "stale demo step firing into a newer run"
                );
            }
            debug!(run = %entry.run, step = ?entry.task, "demo step");
            entry.task.apply(state);
            fired += 1;
        }
        fired
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.schedule.next_due()
    }

    pub fn pending(&self) -> usize {
        self.schedule.len()
    }

    pub fn current_run(&self) -> Option<RunId> {
        self.last_run
    }

    pub fn invalidates_stale(&self) -> bool {
        self.invalidate_stale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::catalog::catalog;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn steps_are_ordered_and_spaced_from_start() {
        let delays: Vec<u64> = DemoStep::SEQUENCE
            .iter()
            .map(|s| s.delay().as_millis() as u64)
            .collect();
        assert_eq!(delays, vec![400, 900, 1600]);
    }

    #[test]
    fn nothing_fires_before_first_deadline() {
        let mut state = UIState::new(catalog());
        let mut runner = DemoRunner::default();
        let t0 = Instant::now();
        runner.run(&mut state, "x", t0).unwrap();
        assert_eq!(runner.fire_due(&mut state, t0 + ms(399)), 0);
        assert_eq!(state.log.len(), 1);
        assert_eq!(runner.fire_due(&mut state, t0 + ms(400)), 1);
        assert_eq!(runner.next_deadline(), Some(t0 + ms(900)));
    }

    #[test]
    fn late_tick_fires_all_due_steps_in_order() {
        let mut state = UIState::new(catalog());
        let mut runner = DemoRunner::default();
        let t0 = Instant::now();
        runner.run(&mut state, "  deploy  ", t0).unwrap();
        assert_eq!(runner.fire_due(&mut state, t0 + ms(5000)), 3);
        assert_eq!(
            state.log.lines(),
            &[
                "Intent: deploy",
                "• Plan created (mock)",
                "• Executing steps (mock)",
                "• All steps succeeded (mock)",
            ]
        );
        assert_eq!(runner.pending(), 0);
    }

    #[test]
    fn run_ids_increase_only_for_accepted_runs() {
        let mut state = UIState::new(catalog());
        let mut runner = DemoRunner::default();
        let t0 = Instant::now();
        assert_eq!(runner.run(&mut state, "a", t0), Ok(RunId(1)));
        assert_eq!(runner.run(&mut state, "   ", t0), Err(RunError::EmptyIntent));
        assert_eq!(runner.run(&mut state, "b", t0), Ok(RunId(2)));
        assert_eq!(runner.current_run(), Some(RunId(2)));
    }
}
