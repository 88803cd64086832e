use crate::game::{Board, GameState, Player, PITS_PER_SIDE};

use super::agent::Agent;

/// Pick the best pit for `side` by searching `depth` plies ahead.
///
/// Returns the chosen relative pit and its value, where higher is better for
/// `side`. The value is the side's captured-seed count at the best reachable
/// leaf; seeds still on the board count for nothing. `(None, current score)`
/// when `depth` is 0 or `side` has no seeded pit.
pub fn select_move(board: &Board, side: Player, depth: u32) -> (Option<usize>, i32) {
    negamax(board, false, side, depth, side)
}

/// Exhaustive negamax, no pruning. Every node minimizes over sign-adjusted
/// child values; the true max/min alternation comes from the sign flips, so
/// the returned value always reads "higher is better for `root`". Sign
/// adjustment and the final re-negation happen at `!minimizing` nodes, and
/// the root is one of them.
fn negamax(
    board: &Board,
    minimizing: bool,
    side: Player,
    plies_left: u32,
    root: Player,
) -> (Option<usize>, i32) {
    if plies_left == 0 {
        return (None, board.score(root) as i32);
    }

    let mut best_pit = None;
    let mut best_value = i32::MAX;
    for pit in 0..PITS_PER_SIDE {
        let mut child = *board;
        let Ok(last) = child.sow(side, pit) else {
            continue;
        };
        child.capture(side, last);
        let (_, child_value) = negamax(&child, !minimizing, side.other(), plies_left - 1, root);
        let value = if minimizing { child_value } else { -child_value };
        if value < best_value {
            best_value = value;
            best_pit = Some(pit);
        }
    }

    match best_pit {
        Some(pit) => {
            let value = if minimizing { best_value } else { -best_value };
            (Some(pit), value)
        }
        // Starved: no pit on this side can be sown. Settle a copy and score
        // the terminal position instead of searching deeper.
        None => {
            let mut settled = *board;
            settled.settle();
            (None, settled.score(root) as i32)
        }
    }
}

/// Agent that plays the move picked by a fixed-depth negamax search.
pub struct NegamaxAgent {
    depth: u32,
}

impl NegamaxAgent {
    pub fn new(depth: u32) -> Self {
        NegamaxAgent { depth }
    }
}

impl Agent for NegamaxAgent {
    fn choose(&mut self, state: &GameState) -> usize {
        let (pit, _) = select_move(state.board(), state.current_player(), self.depth);
        pit.unwrap_or(0)
    }

    fn name(&self) -> &str {
        "Negamax"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(NegamaxAgent::new(self.depth))
    }
}
