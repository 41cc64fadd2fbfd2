use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::debug_log;
use super::{AutomatedMoveTask, Scheduler, TaskHandle};

/// Timer-backed scheduler. Due tasks arrive on the receiver returned by
/// [`TokioScheduler::new`]; the game's event loop drains it.
///
/// `submit` spawns onto the current tokio runtime and panics outside one.
pub struct TokioScheduler {
    sender: mpsc::UnboundedSender<AutomatedMoveTask>,
    timers: Vec<JoinHandle<()>>,
}

impl TokioScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<AutomatedMoveTask>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let scheduler = Self {
            sender,
            timers: Vec::new(),
        };
        (scheduler, receiver)
    }

    pub fn active_timers(&self) -> usize {
        self.timers.iter().filter(|timer| !timer.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    fn submit(&mut self, delay: Duration, task: AutomatedMoveTask) -> TaskHandle {
        self.timers.retain(|timer| !timer.is_finished());

        let sender = self.sender.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if sender.send(task).is_err() {
                debug_log!("Dropping automated move {} for {}: receiver closed", task.ticket, task.mark);
            }
        });
        self.timers.push(timer);

        TaskHandle::from(&task)
    }

    fn cancel_all(&mut self) {
        for timer in self.timers.drain(..) {
            timer.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
