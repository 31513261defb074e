use tictactoe_engine::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    /// Zero-based cell index.
    Play(usize),
    NewRound,
    ResetScore,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "1-9: play a cell (1 = top left)   n: new round   r: reset score   h: help   q: quit";

pub fn parse_command(line: &str) -> Result<ClientCommand, String> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => Err("Type a cell number or h for help".to_string()),
        "n" | "new" => Ok(ClientCommand::NewRound),
        "r" | "reset" => Ok(ClientCommand::ResetScore),
        "h" | "help" | "?" => Ok(ClientCommand::Help),
        "q" | "quit" | "exit" => Ok(ClientCommand::Quit),
        other => {
            let cell: usize = other
                .parse()
                .map_err(|_| format!("Unknown command '{}'", trimmed))?;
            if cell == 0 || cell > CELL_COUNT {
                return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
            }
            Ok(ClientCommand::Play(cell - 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_one_based() {
        assert_eq!(parse_command("1"), Ok(ClientCommand::Play(0)));
        assert_eq!(parse_command(" 9 \n"), Ok(ClientCommand::Play(8)));
    }

    #[test]
    fn test_out_of_range_cells_are_rejected() {
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
        assert!(parse_command("-1").is_err());
    }

    #[test]
    fn test_word_commands() {
        assert_eq!(parse_command("N"), Ok(ClientCommand::NewRound));
        assert_eq!(parse_command("reset"), Ok(ClientCommand::ResetScore));
        assert_eq!(parse_command("?"), Ok(ClientCommand::Help));
        assert_eq!(parse_command("q"), Ok(ClientCommand::Quit));
        assert!(parse_command("").is_err());
        assert!(parse_command("undo").is_err());
    }
}
