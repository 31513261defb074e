use tictactoe_engine::{AI_MARK, BOARD_SIZE, Difficulty, GameMode, GameState, HUMAN_MARK, ScoreBoard};

pub fn render_board(state: &GameState) -> String {
    let winning_line = state.winning_line();
    let mut rows = Vec::with_capacity(BOARD_SIZE);

    for row in 0..BOARD_SIZE {
        let cells: Vec<String> = (0..BOARD_SIZE)
            .map(|col| {
                let index = row * BOARD_SIZE + col;
                match state.board.get(index) {
                    Some(mark) if winning_line.is_some_and(|line| line.contains(index)) => {
                        format!("[{}]", mark)
                    }
                    Some(mark) => format!(" {} ", mark),
                    None => format!(" {} ", index + 1),
                }
            })
            .collect();
        rows.push(cells.join("|"));
    }

    rows.join("\n---+---+---\n")
}

pub fn render_score(mode: GameMode, score: &ScoreBoard) -> String {
    match mode {
        GameMode::Pvai => format!(
            "YOU ({}) {}  -  AI ({}) {}  -  DRAWS {}",
            HUMAN_MARK,
            score.wins(HUMAN_MARK),
            AI_MARK,
            score.wins(AI_MARK),
            score.draws
        ),
        GameMode::Pvp => format!("O {}  -  X {}  -  DRAWS {}", score.o, score.x, score.draws),
    }
}

pub fn render_header(mode: GameMode, difficulty: Difficulty) -> String {
    match mode {
        GameMode::Pvai => format!("{} | {}", mode.title(), difficulty),
        GameMode::Pvp => format!("{} | PVP", mode.title()),
    }
}

pub fn render_screen(
    mode: GameMode,
    difficulty: Difficulty,
    state: &GameState,
    score: &ScoreBoard,
) -> String {
    format!(
        "{}\n{}\n\n{}\n\n{}",
        render_header(mode, difficulty),
        render_score(mode, score),
        render_board(state),
        mode.status_text(state)
    )
}
