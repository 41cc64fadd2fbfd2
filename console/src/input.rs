use tictactoe_common::config::GameMode;
use tictactoe_common::games::tictactoe::CELL_COUNT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Place(usize),
    Reset,
    Back,
    Quit,
    Help,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    Start(GameMode),
    Quit,
}

pub const GAME_HELP: &str = "Commands: 0-8 place a mark, r restart, b back to menu, q quit";
pub const MENU_HELP: &str = "Choose a mode: pvp, x (play as X), o (play as O), watch, or q to quit";

pub fn parse_game_command(line: &str) -> Result<GameCommand, String> {
    let input = line.trim().to_ascii_lowercase();
    match input.as_str() {
        "r" | "reset" | "restart" => Ok(GameCommand::Reset),
        "b" | "back" => Ok(GameCommand::Back),
        "q" | "quit" => Ok(GameCommand::Quit),
        "h" | "help" | "?" => Ok(GameCommand::Help),
        other => match other.parse::<usize>() {
            Ok(index) if index < CELL_COUNT => Ok(GameCommand::Place(index)),
            Ok(index) => Err(format!("Cell {} is off the board", index)),
            Err(_) => Err(format!("Unknown command '{}'", line.trim())),
        },
    }
}

pub fn parse_menu_command(line: &str) -> Result<MenuCommand, String> {
    let input = line.trim().to_ascii_lowercase();
    match input.as_str() {
        "pvp" | "1" => Ok(MenuCommand::Start(GameMode::PlayerVsPlayer)),
        "x" | "2" => Ok(MenuCommand::Start(GameMode::PlayerAsX)),
        "o" | "3" => Ok(MenuCommand::Start(GameMode::PlayerAsO)),
        "watch" | "4" => Ok(MenuCommand::Start(GameMode::Watch)),
        "q" | "quit" => Ok(MenuCommand::Quit),
        _ => Err(format!("Unknown mode '{}'", line.trim())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cells() {
        assert_eq!(parse_game_command("0"), Ok(GameCommand::Place(0)));
        assert_eq!(parse_game_command(" 8\n"), Ok(GameCommand::Place(8)));
        assert!(parse_game_command("9").is_err());
        assert!(parse_game_command("-1").is_err());
    }

    #[test]
    fn test_parse_game_keywords() {
        assert_eq!(parse_game_command("R"), Ok(GameCommand::Reset));
        assert_eq!(parse_game_command("back"), Ok(GameCommand::Back));
        assert_eq!(parse_game_command("q"), Ok(GameCommand::Quit));
        assert_eq!(parse_game_command("?"), Ok(GameCommand::Help));
        assert!(parse_game_command("").is_err());
    }

    #[test]
    fn test_parse_menu() {
        assert_eq!(parse_menu_command("watch"), Ok(MenuCommand::Start(GameMode::Watch)));
        assert_eq!(parse_menu_command("O"), Ok(MenuCommand::Start(GameMode::PlayerAsO)));
        assert_eq!(parse_menu_command("1"), Ok(MenuCommand::Start(GameMode::PlayerVsPlayer)));
        assert_eq!(parse_menu_command("quit"), Ok(MenuCommand::Quit));
        assert!(parse_menu_command("chess").is_err());
    }
}
