use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use tictactoe_common::config::GameMode;
use tictactoe_common::games::tictactoe::{MoveOrigin, TicTacToeSession};
use tictactoe_common::log;
use tictactoe_common::scheduler::{AutomatedMoveTask, TokioScheduler};

use crate::broadcaster::ConsoleBroadcaster;
use crate::input::{GAME_HELP, GameCommand, MENU_HELP, MenuCommand, parse_game_command, parse_menu_command};
use crate::render::{describe_turn, render_board};

pub type ConsoleSession = TicTacToeSession<TokioScheduler, ConsoleBroadcaster>;

#[derive(Clone, Copy)]
enum Screen {
    Menu,
    InGame(GameMode),
}

/// Owns the session for its whole life. User input and due automated moves
/// are handled one at a time from this loop.
pub async fn run(
    mut session: ConsoleSession,
    mut due_moves: mpsc::UnboundedReceiver<AutomatedMoveTask>,
    initial_mode: GameMode,
) -> Result<(), String> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut screen = start_game(&mut session, initial_mode);

    loop {
        tokio::select! {
            Some(task) = due_moves.recv() => {
                if session.run_automated_move(task).is_some() {
                    print_board(&session);
                }
            }
            line = lines.next_line() => {
                let line = line.map_err(|e| format!("Failed to read input: {}", e))?;
                let Some(line) = line else {
                    log!("Input closed, exiting");
                    session.on_back_navigation();
                    break;
                };

                match screen {
                    Screen::Menu => match parse_menu_command(&line) {
                        Ok(MenuCommand::Start(mode)) => screen = start_game(&mut session, mode),
                        Ok(MenuCommand::Quit) => break,
                        Err(e) => println!("{}\n{}", e, MENU_HELP),
                    },
                    Screen::InGame(mode) => match parse_game_command(&line) {
                        Ok(GameCommand::Place(index)) => {
                            match session.apply_move(index, MoveOrigin::Human) {
                                Ok(()) => print_board(&session),
                                Err(rejection) => println!("{}", rejection),
                            }
                        }
                        Ok(GameCommand::Reset) => screen = start_game(&mut session, mode),
                        Ok(GameCommand::Back) => {
                            session.on_back_navigation();
                            println!("{}", MENU_HELP);
                            screen = Screen::Menu;
                        }
                        Ok(GameCommand::Quit) => {
                            session.on_back_navigation();
                            break;
                        }
                        Ok(GameCommand::Help) => println!("{}", GAME_HELP),
                        Err(e) => println!("{}\n{}", e, GAME_HELP),
                    },
                }
            }
        }
    }

    Ok(())
}

fn start_game(session: &mut ConsoleSession, mode: GameMode) -> Screen {
    session.reset(mode.player_types());
    println!("{}", GAME_HELP);
    print_board(session);
    Screen::InGame(mode)
}

fn print_board(session: &ConsoleSession) {
    let status = session.current_game_state();
    println!("\n{}\n", render_board(&session.board_snapshot(), &status));
    if session.is_active() {
        println!("{}", describe_turn(session.current_mark(), &session.player_types()));
    } else {
        println!("Enter r to play again, b for the menu, q to quit");
    }
}
