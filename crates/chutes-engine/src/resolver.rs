//! Pure move resolution: overshoot rule, one obstacle hop, win check.

use chutes_board::Board;
use chutes_core::{Cell, MoveResult};

/// Resolve one roll from `position` against `board`.
///
/// The algorithm, in order:
///
/// 1. `raw_target = position + roll`.
/// 2. Overshoot rule: if `raw_target` lies past the final cell, the
///    player stays put. Movement requires landing exactly on or before
///    the last cell; the turn is consumed either way.
/// 3. Otherwise the landing cell is resolved through the obstacle
///    table exactly once — a destination is never re-checked for a
///    further obstacle within the same move.
/// 4. The move wins iff the final position is the board's final cell,
///    including arrival there via an obstacle destination.
///
/// Pure function of its inputs: no player is mutated and no die is
/// consulted here, which is what makes the rules testable independent
/// of any randomness strategy.
///
/// # Examples
///
/// ```
/// use chutes_board::Board;
/// use chutes_core::{Cell, Obstacle};
/// use chutes_engine::resolve_move;
///
/// let board = Board::new(10, [Obstacle::new(Cell(3), Cell(9)).unwrap()]).unwrap();
///
/// // Landing on 3 rides the shortcut to 9.
/// let result = resolve_move(Cell(0), 3, &board);
/// assert_eq!(result.final_position, Cell(9));
/// assert!(result.obstacle_applied.is_some());
///
/// // From 9, a 6 overshoots: stay at 9.
/// let result = resolve_move(Cell(9), 6, &board);
/// assert_eq!(result.final_position, Cell(9));
/// assert!(!result.won);
/// ```
pub fn resolve_move(position: Cell, roll: u8, board: &Board) -> MoveResult {
    let raw_target = position.advance(roll);

    // Widen before comparing: near the cell ceiling the u32 sum in
    // `advance` saturates, and the saturated value can alias the final
    // cell of a maximum-size board.
    if u64::from(position.0) + u64::from(roll) > u64::from(board.size()) {
        return MoveResult {
            raw_target,
            final_position: position,
            obstacle_applied: None,
            won: false,
        };
    }

    let obstacle_applied = board.obstacles().get(raw_target).copied();
    let final_position = board.obstacles().resolve(raw_target);

    MoveResult {
        raw_target,
        final_position,
        obstacle_applied,
        won: final_position == board.final_cell(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chutes_core::Obstacle;

    fn board() -> Board {
        Board::new(
            10,
            [
                Obstacle::new(Cell(3), Cell(9)).unwrap(),
                Obstacle::new(Cell(8), Cell(2)).unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn plain_move_lands_on_raw_target() {
        let result = resolve_move(Cell(0), 4, &board());
        assert_eq!(result.raw_target, Cell(4));
        assert_eq!(result.final_position, Cell(4));
        assert_eq!(result.obstacle_applied, None);
        assert!(!result.won);
    }

    #[test]
    fn shortcut_redirects_forward() {
        let result = resolve_move(Cell(0), 3, &board());
        assert_eq!(result.raw_target, Cell(3));
        assert_eq!(result.final_position, Cell(9));
        assert_eq!(
            result.obstacle_applied,
            Some(Obstacle::new(Cell(3), Cell(9)).unwrap())
        );
    }

    #[test]
    fn setback_redirects_backward() {
        let result = resolve_move(Cell(5), 3, &board());
        assert_eq!(result.raw_target, Cell(8));
        assert_eq!(result.final_position, Cell(2));
        assert!(!result.won);
    }

    #[test]
    fn overshoot_stays_put() {
        let result = resolve_move(Cell(9), 6, &board());
        assert_eq!(result.raw_target, Cell(15));
        assert_eq!(result.final_position, Cell(9));
        assert_eq!(result.obstacle_applied, None);
        assert!(!result.won);
    }

    #[test]
    fn exact_landing_wins() {
        let result = resolve_move(Cell(7), 3, &board());
        assert_eq!(result.final_position, Cell(10));
        assert!(result.won);
    }

    #[test]
    fn one_past_the_end_is_already_overshoot() {
        let result = resolve_move(Cell(7), 4, &board());
        assert_eq!(result.final_position, Cell(7));
        assert!(!result.won);
    }

    #[test]
    fn winning_through_an_obstacle_counts() {
        let board = Board::new(10, [Obstacle::new(Cell(6), Cell(10)).unwrap()]).unwrap();
        let result = resolve_move(Cell(2), 4, &board);
        assert_eq!(result.final_position, Cell(10));
        assert!(result.won);
        assert!(result.obstacle_applied.is_some());
    }

    #[test]
    fn chained_obstacles_apply_a_single_hop() {
        // 3 -> 6 and 6 -> 10: landing on 3 ends on 6, not 10, so the
        // chained obstacle neither moves nor wins the player.
        let board = Board::new(
            10,
            [
                Obstacle::new(Cell(3), Cell(6)).unwrap(),
                Obstacle::new(Cell(6), Cell(10)).unwrap(),
            ],
        )
        .unwrap();
        let result = resolve_move(Cell(0), 3, &board);
        assert_eq!(result.final_position, Cell(6));
        assert!(!result.won);
    }

    #[test]
    fn overshoot_near_the_cell_ceiling_stays_put() {
        // A maximum-size board can legally park a player within a die's
        // reach of u32::MAX via an obstacle destination. The raw target
        // must not wrap or masquerade as an exact landing: every roll
        // from here overshoots except the exact remainder.
        let board = Board::new(
            u32::MAX,
            [Obstacle::new(Cell(1), Cell(u32::MAX - 2)).unwrap()],
        )
        .unwrap();
        let position = Cell(u32::MAX - 2);

        let result = resolve_move(position, 6, &board);
        assert_eq!(result.final_position, position);
        assert_eq!(result.obstacle_applied, None);
        assert!(!result.won);
        assert!(result.overshot());

        // The exact remainder still wins.
        let result = resolve_move(position, 2, &board);
        assert_eq!(result.final_position, Cell(u32::MAX));
        assert!(result.won);
        assert!(!result.overshot());
    }

    #[test]
    fn setback_can_return_to_the_starting_cell() {
        // From 5, roll 3 onto a setback 8 -> 5: a legal no-op move that
        // is still a Redirected outcome, not an overshoot.
        let board = Board::new(10, [Obstacle::new(Cell(8), Cell(5)).unwrap()]).unwrap();
        let result = resolve_move(Cell(5), 3, &board);
        assert_eq!(result.final_position, Cell(5));
        assert!(result.obstacle_applied.is_some());
    }
}
