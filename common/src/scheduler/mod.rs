mod manual_scheduler;
mod tokio_scheduler;

use std::time::Duration;

use crate::games::tictactoe::Mark;

pub use manual_scheduler::ManualScheduler;
pub use tokio_scheduler::TokioScheduler;

/// A pending automated move. Scheduled work is plain data so that whoever
/// owns the game can check `ticket` before acting on a task that fired late.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutomatedMoveTask {
    pub ticket: u64,
    pub mark: Mark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

impl TaskHandle {
    pub fn ticket(&self) -> u64 {
        self.0
    }
}

impl From<&AutomatedMoveTask> for TaskHandle {
    fn from(task: &AutomatedMoveTask) -> Self {
        Self(task.ticket)
    }
}

/// Delivers automated move tasks after a delay.
pub trait Scheduler {
    fn submit(&mut self, delay: Duration, task: AutomatedMoveTask) -> TaskHandle;

    /// Drops every task that has not been delivered yet.
    fn cancel_all(&mut self);
}
