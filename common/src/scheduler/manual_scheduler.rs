use std::collections::VecDeque;
use std::time::Duration;

use super::{AutomatedMoveTask, Scheduler, TaskHandle};

/// Virtual-clock scheduler: nothing fires on its own. The caller pops due
/// tasks and hands them back to the game.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: VecDeque<(Duration, AutomatedMoveTask)>,
    submitted: usize,
    cancellations: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn submitted_count(&self) -> usize {
        self.submitted
    }

    pub fn cancellation_count(&self) -> usize {
        self.cancellations
    }

    pub fn next_delay(&self) -> Option<Duration> {
        self.pending.front().map(|(delay, _)| *delay)
    }

    pub fn pop_due(&mut self) -> Option<AutomatedMoveTask> {
        self.pending.pop_front().map(|(_, task)| task)
    }
}

impl Scheduler for ManualScheduler {
    fn submit(&mut self, delay: Duration, task: AutomatedMoveTask) -> TaskHandle {
        self.submitted += 1;
        self.pending.push_back((delay, task));
        TaskHandle::from(&task)
    }

    fn cancel_all(&mut self) {
        self.cancellations += 1;
        self.pending.clear();
    }
}
