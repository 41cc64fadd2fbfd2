use std::time::Duration;

use crate::{debug_log, log};
use crate::games::GameBroadcaster;
use crate::scheduler::{AutomatedMoveTask, Scheduler, TaskHandle};
use super::board::CELL_COUNT;
use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::types::{GameStatus, Mark, MoveOrigin, MoveRejection, PlayerType, PlayerTypes};

/// Drives one board: applies moves, ends the game, and asks the scheduler for
/// an automated move whenever an automated side is to play.
///
/// Every method takes `&mut self`; on a multi-threaded runtime the session
/// must have a single owner (see the console event loop) or sit behind a lock.
pub struct TicTacToeSession<S: Scheduler, B: GameBroadcaster> {
    game_state: TicTacToeGameState,
    player_types: PlayerTypes,
    active: bool,
    scheduler: S,
    broadcaster: B,
    automated_move_delay: Duration,
    pending_move: Option<TaskHandle>,
    next_ticket: u64,
}

impl<S: Scheduler, B: GameBroadcaster> TicTacToeSession<S, B> {
    /// The session rejects every move until the first [`reset`](Self::reset).
    pub fn new(scheduler: S, broadcaster: B, automated_move_delay: Duration) -> Self {
        Self {
            game_state: TicTacToeGameState::new(),
            player_types: PlayerTypes::default(),
            active: false,
            scheduler,
            broadcaster,
            automated_move_delay,
            pending_move: None,
            next_ticket: 0,
        }
    }

    pub fn reset(&mut self, player_types: PlayerTypes) {
        self.cancel_pending_move();

        self.game_state = TicTacToeGameState::new();
        self.player_types = player_types;
        self.active = true;

        log!(
            "New game: X is {:?}, O is {:?}",
            player_types.x,
            player_types.o
        );

        self.schedule_automated_move_if_needed();
    }

    pub fn apply_move(&mut self, index: usize, origin: MoveOrigin) -> Result<(), MoveRejection> {
        assert!(index < CELL_COUNT, "cell index {} out of range 0..{}", index, CELL_COUNT);

        if let Err(rejection) = self.check_move(index, origin) {
            debug_log!("Rejected {:?} move at {}: {}", origin, index, rejection);
            return Err(rejection);
        }

        // A move on this turn makes any task still queued for it stale.
        if self.pending_move.is_some() {
            self.cancel_pending_move();
        }

        let mark = self.game_state.place_mark(index)?;
        debug_log!("{} ({:?}) placed at {}", mark, origin, index);
        self.broadcaster.broadcast_move(index, mark);

        let status = self.game_state.status();
        if status.is_terminal() {
            self.active = false;
            match status {
                GameStatus::Won(line) => log!("{} wins on {:?}", line.mark, line.cells),
                _ => log!("Game drawn after {} moves", self.game_state.move_count()),
            }
            self.broadcaster.broadcast_game_over(status);
            return Ok(());
        }

        self.schedule_automated_move_if_needed();
        Ok(())
    }

    /// Body of a scheduled automated move. Tasks other than the single pending
    /// one were cancelled or superseded and are ignored. Returns the index played.
    pub fn run_automated_move(&mut self, task: AutomatedMoveTask) -> Option<usize> {
        if self.pending_move != Some(TaskHandle::from(&task)) {
            debug_log!("Ignoring stale automated move {}", task.ticket);
            return None;
        }
        self.pending_move = None;

        if !self.active {
            return None;
        }
        debug_assert_eq!(task.mark, self.game_state.current_mark());

        let Some(index) = calculate_move(BotInput::from_game_state(&self.game_state)) else {
            unreachable!(
                "no automated move on an active board: {:?}",
                self.game_state.board().cells()
            );
        };

        if let Err(rejection) = self.apply_move(index, MoveOrigin::Automated) {
            unreachable!("automated move at {} rejected: {}", index, rejection);
        }
        Some(index)
    }

    /// Leaving the game view: nothing scheduled may land afterwards.
    pub fn on_back_navigation(&mut self) {
        self.cancel_pending_move();
        self.active = false;
        log!("Left game after {} moves", self.game_state.move_count());
    }

    pub fn current_game_state(&self) -> GameStatus {
        self.game_state.status()
    }

    pub fn board_snapshot(&self) -> [Mark; CELL_COUNT] {
        *self.game_state.board().cells()
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn current_mark(&self) -> Mark {
        self.game_state.current_mark()
    }

    pub fn move_count(&self) -> usize {
        self.game_state.move_count()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn player_types(&self) -> PlayerTypes {
        self.player_types
    }

    pub fn player_type(&self, mark: Mark) -> Option<PlayerType> {
        self.player_types.for_mark(mark)
    }

    pub fn is_automated_turn(&self) -> bool {
        self.player_type(self.current_mark()) == Some(PlayerType::Automated)
    }

    pub fn has_pending_move(&self) -> bool {
        self.pending_move.is_some()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn broadcaster(&self) -> &B {
        &self.broadcaster
    }

    fn check_move(&self, index: usize, origin: MoveOrigin) -> Result<(), MoveRejection> {
        if !self.active {
            return Err(MoveRejection::GameInactive);
        }
        if !self.game_state.board().is_empty(index) {
            return Err(MoveRejection::CellOccupied);
        }
        if self.is_automated_turn() && origin == MoveOrigin::Human {
            return Err(MoveRejection::NotYourTurn);
        }
        Ok(())
    }

    fn schedule_automated_move_if_needed(&mut self) {
        if !self.active || !self.is_automated_turn() {
            return;
        }
        if self.pending_move.is_some() {
            self.cancel_pending_move();
        }

        let task = AutomatedMoveTask {
            ticket: self.next_ticket,
            mark: self.current_mark(),
        };
        self.next_ticket += 1;

        let handle = self.scheduler.submit(self.automated_move_delay, task);
        self.pending_move = Some(handle);
        debug_log!(
            "Scheduled automated move {} for {} in {:?}",
            task.ticket,
            task.mark,
            self.automated_move_delay
        );
    }

    fn cancel_pending_move(&mut self) {
        self.scheduler.cancel_all();
        if let Some(handle) = self.pending_move.take() {
            debug_log!("Cancelled automated move {}", handle.ticket());
        }
    }
}
