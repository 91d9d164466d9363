//! Interactive terminal game.

use cross_engine::{CrossAi, GameStatus, Position, Reply, TieBreak};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

const PROMPT: &str = "Your move (row col, 0-8, or a name like 'center'; 'quit' to stop): ";

/// Runs a game reading moves from `input` until it ends or input runs out.
///
/// Returns the status of the board when the loop stopped.
#[instrument(skip_all)]
pub fn run_game<T, R, W>(
    ai: &mut CrossAi<T>,
    input: R,
    output: &mut W,
    show_scores: bool,
) -> anyhow::Result<GameStatus>
where
    T: TieBreak,
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}\n", ai.grid().display())?;
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let entry = line.trim();
        if entry.is_empty() {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
            continue;
        }
        if entry.eq_ignore_ascii_case("quit") || entry.eq_ignore_ascii_case("q") {
            debug!("Player quit");
            break;
        }

        let Some(pos) = Position::parse(entry) else {
            writeln!(output, "Unrecognized cell '{}'", entry)?;
            write!(output, "{}", PROMPT)?;
            output.flush()?;
            continue;
        };

        if show_scores && ai.grid().is_empty(pos) && !ai.is_over() {
            let after = ai.state().play(pos);
            writeln!(output, "{}", crate::scores::render_candidates(ai.engine(), after))?;
        }

        match ai.play_position(pos) {
            Ok(Reply::Moved(answer)) => {
                let (row, col) = answer.coords();
                writeln!(output, "O plays {} ({} {})\n", answer, row, col)?;
            }
            Ok(Reply::HumanEndedGame) | Ok(Reply::AlreadyDecided) => {
                writeln!(output)?;
            }
            Err(e) => {
                writeln!(output, "{}", e.kind())?;
                write!(output, "{}", PROMPT)?;
                output.flush()?;
                continue;
            }
        }

        writeln!(output, "{}\n", ai.grid().display())?;
        if ai.is_over() {
            writeln!(output, "{}", describe(ai.status()))?;
            return Ok(ai.status());
        }
        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    Ok(ai.status())
}

fn describe(status: GameStatus) -> String {
    match status {
        GameStatus::Won(mark) => format!("{} wins!", mark),
        GameStatus::Draw => "Draw.".to_string(),
        GameStatus::InProgress => "Game abandoned.".to_string(),
    }
}
