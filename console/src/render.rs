use tictactoe_common::games::tictactoe::{BOARD_SIDE, CELL_COUNT, GameStatus, Mark, PlayerType, PlayerTypes};

/// Three rows of cells. Empty cells show their index, cells of the winning
/// line are wrapped in parentheses.
pub fn render_board(cells: &[Mark; CELL_COUNT], status: &GameStatus) -> String {
    let winning_cells = match status {
        GameStatus::Won(line) => Some(line.cells),
        _ => None,
    };

    let rows: Vec<String> = cells
        .chunks(BOARD_SIDE)
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(column, &mark)| {
                    let index = row * BOARD_SIDE + column;
                    let text = match mark {
                        Mark::Empty => index.to_string(),
                        mark => mark.to_string(),
                    };
                    if winning_cells.is_some_and(|line| line.contains(&index)) {
                        format!("({})", text)
                    } else {
                        format!(" {} ", text)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn describe_result(status: &GameStatus) -> String {
    match status {
        GameStatus::InProgress => "Game in progress".to_string(),
        GameStatus::Won(line) => format!(
            "{} wins! Line {}-{}-{}",
            line.mark, line.cells[0], line.cells[1], line.cells[2]
        ),
        GameStatus::Draw => "Draw!".to_string(),
    }
}

pub fn describe_turn(mark: Mark, player_types: &PlayerTypes) -> String {
    match player_types.for_mark(mark) {
        Some(PlayerType::Automated) => format!("{} is thinking...", mark),
        _ => format!("{} to move, enter a cell 0-8", mark),
    }
}
