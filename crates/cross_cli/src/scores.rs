//! Score listings for inspecting the engine.

use anyhow::{Context, bail};
use cross_engine::{Engine, Position, State};
use tracing::instrument;

/// Replays board indices alternately from the empty board, X first.
///
/// # Errors
///
/// Fails on an index outside 0-8, an occupied square, or a move after the
/// game is decided.
#[instrument(skip(engine))]
pub fn replay(engine: &Engine, moves: &[usize]) -> anyhow::Result<State> {
    let mut state = State::initial();
    for (ply, index) in moves.iter().enumerate() {
        let pos = Position::from_index(*index)
            .with_context(|| format!("Move {} ({}) is not a board index 0-8", ply + 1, index))?;
        if engine.is_terminal(state) {
            bail!("Move {} ({}) comes after the game is decided", ply + 1, pos);
        }
        if !state.grid().is_empty(pos) {
            bail!("Move {} ({}) is on an occupied square", ply + 1, pos);
        }
        state = state.play(pos);
    }
    Ok(state)
}

/// Lists every reply from `state` with its score, marking the minimum.
pub fn render_candidates(engine: &Engine, state: State) -> String {
    let candidates = engine.candidates(state);
    let header = format!("{} to move, state score {}", state.to_move(), engine.score(state));

    let Some(best) = candidates.iter().map(|c| c.score()).min() else {
        return format!("{}\n  no replies: {}", header, state.status());
    };

    let mut lines = vec![header];
    for candidate in &candidates {
        let pos = candidate.position();
        let marker = if candidate.score() == best { " *" } else { "" };
        lines.push(format!(
            "  {:<13} ({} {}) {:>7}{}",
            pos.label(),
            pos.row(),
            pos.col(),
            candidate.score(),
            marker
        ));
    }
    lines.join("\n")
}

/// Replays `moves` and renders the replies of the resulting state.
pub fn score_report(engine: &Engine, moves: &[usize]) -> anyhow::Result<String> {
    let state = replay(engine, moves)?;
    let mut out = format!("{}\n\n", state.grid().display());
    out.push_str(&render_candidates(engine, state));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_alternates_marks() {
        let engine = Engine::default();
        let state = replay(&engine, &[4, 0]).unwrap();
        assert_eq!(state.grid().occupied(), 2);
        assert_eq!(state.to_move(), cross_engine::Mark::X);
    }

    #[test]
    fn test_replay_rejects_bad_moves() {
        let engine = Engine::default();
        assert!(replay(&engine, &[9]).is_err());
        assert!(replay(&engine, &[4, 4]).is_err());
        // X takes the top row on move 5; a sixth move is refused.
        assert!(replay(&engine, &[0, 3, 1, 4, 2, 5]).is_err());
    }

    #[test]
    fn test_render_marks_minimum() {
        let engine = Engine::default();
        let text = render_candidates(&engine, State::initial().play(Position::TopLeft));
        let marked: Vec<&str> = text.lines().filter(|l| l.ends_with('*')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("Center"));
        assert!(marked[0].contains("124"));
    }

    #[test]
    fn test_render_terminal_state() {
        let engine = Engine::default();
        let state = replay(&engine, &[0, 3, 1, 4, 2]).unwrap();
        let text = render_candidates(&engine, state);
        assert_eq!(text, "O to move, state score 1\n  no replies: Player X wins");
    }
}
