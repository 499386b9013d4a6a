//! The turn state machine.

use crate::player::Player;
use crate::resolver::resolve_move;
use chutes_board::Board;
use chutes_core::{Die, EventKind, GameEvent, MoveResult, PlayerId, RollError, StateError, TurnId};
use smallvec::SmallVec;
use std::fmt;

/// Where the engine is in its turn cycle.
///
/// `AwaitingRoll → Resolving → AwaitingRoll` each ordinary turn, and
/// `Resolving → GameOver` once a player reaches the final cell.
/// `GameOver` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Ready for the active player's roll.
    AwaitingRoll,
    /// A roll is being resolved and observers notified. Externally
    /// visible only from inside an observer callback.
    Resolving,
    /// A player has won; no further rolls are accepted.
    GameOver,
}

/// The turn-strict game engine.
///
/// Owns the board, the roster, and a die strategy. Exactly one move is
/// in flight at a time: [`roll()`](GameEngine::roll) resolves the
/// active player's turn completely — including synchronous observer
/// notification — before returning. Turn order is registration order,
/// cyclic.
///
/// Independent games share nothing; build one engine per simulation
/// and they can run side by side without coordination.
///
/// # Example
///
/// ```
/// use chutes_board::Board;
/// use chutes_core::{Cell, Obstacle};
/// use chutes_engine::{GameEngine, Phase, Player};
/// use chutes_dice::FairDie;
///
/// let board = Board::new(10, [Obstacle::new(Cell(3), Cell(9)).unwrap()]).unwrap();
/// let players = vec![Player::new("ada").unwrap(), Player::new("grace").unwrap()];
/// let mut engine = GameEngine::new(board, players, Box::new(FairDie::seeded(42))).unwrap();
///
/// while engine.phase() != Phase::GameOver {
///     engine.roll().unwrap();
/// }
/// assert!(engine.winner().is_some());
/// ```
pub struct GameEngine {
    board: Board,
    players: SmallVec<[Player; 4]>,
    die: Box<dyn Die>,
    current: usize,
    phase: Phase,
    turn: TurnId,
    winner: Option<usize>,
}

impl GameEngine {
    /// Assemble an engine from a validated board, an ordered roster,
    /// and a die strategy.
    ///
    /// Returns `Err(StateError::EmptyRoster)` for an empty roster —
    /// a configuration error detected at start, so `roll()` never has
    /// to deal with a playerless game.
    pub fn new(
        board: Board,
        players: Vec<Player>,
        die: Box<dyn Die>,
    ) -> Result<Self, StateError> {
        if players.is_empty() {
            return Err(StateError::EmptyRoster);
        }
        Ok(Self {
            board,
            players: players.into(),
            die,
            current: 0,
            phase: Phase::AwaitingRoll,
            turn: TurnId(0),
            winner: None,
        })
    }

    /// Resolve one turn for the active player.
    ///
    /// Draws a die value, resolves the move (overshoot rule, single
    /// obstacle hop, win check), commits the new position, then emits
    /// the movement event — [`Blocked`](EventKind::Blocked) on
    /// overshoot, [`Redirected`](EventKind::Redirected) when an
    /// obstacle applied, otherwise [`Moved`](EventKind::Moved) — to the
    /// active player's observers. A winning turn additionally emits
    /// [`Won`](EventKind::Won) and leaves the engine in
    /// [`Phase::GameOver`]; otherwise the next registered player
    /// becomes active.
    ///
    /// # Errors
    ///
    /// - [`RollError::GameOver`] once the game has concluded.
    /// - [`RollError::Reentrant`] if called while a turn is already
    ///   resolving, i.e. from inside an observer callback. Safe code
    ///   holding the engine by `&mut` cannot trigger this; the check
    ///   guards interior-mutability setups that smuggle a handle into
    ///   an observer.
    pub fn roll(&mut self) -> Result<MoveResult, RollError> {
        match self.phase {
            Phase::GameOver => return Err(RollError::GameOver),
            Phase::Resolving => return Err(RollError::Reentrant),
            Phase::AwaitingRoll => {}
        }
        self.phase = Phase::Resolving;

        let rolled = self.die.roll();
        let index = self.current;
        let from = self.players[index].position();
        let result = resolve_move(from, rolled, &self.board);

        // Mutation happens only after resolution is complete.
        self.players[index].set_position(result.final_position);
        let turn = self.turn;
        self.turn = TurnId(turn.0 + 1);

        let kind = if result.overshot() {
            EventKind::Blocked
        } else if result.obstacle_applied.is_some() {
            EventKind::Redirected
        } else {
            EventKind::Moved
        };
        let event = GameEvent {
            kind,
            turn,
            player: PlayerId(index as u32),
            player_name: self.players[index].name().to_string(),
            rolled,
            from,
            to: result.final_position,
            obstacle_applied: result.obstacle_applied,
            won: result.won,
        };
        self.players[index].notify(&event);

        if result.won {
            let won = GameEvent {
                kind: EventKind::Won,
                ..event
            };
            self.players[index].notify(&won);
            self.winner = Some(index);
            self.phase = Phase::GameOver;
        } else {
            self.current = (self.current + 1) % self.players.len();
            self.phase = Phase::AwaitingRoll;
        }

        Ok(result)
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The board this game is played on.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of rolls resolved so far.
    pub fn turn(&self) -> TurnId {
        self.turn
    }

    /// The roster, in registration (= turn) order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player who rolls next (the winner once the game is over).
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Mutable access to one player, for subscription management after
    /// the engine has taken ownership of the roster.
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.0 as usize)
    }

    /// The winning player, once there is one.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|index| &self.players[index])
    }
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("phase", &self.phase)
            .field("turn", &self.turn)
            .field("current", &self.current)
            .field("players", &self.players.len())
            .field("board_size", &self.board.size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chutes_core::{Cell, Obstacle};

    /// A die cycling through a fixed sequence, enough for unit tests;
    /// the scripted/recording test doubles live in chutes-test-utils
    /// and are exercised by the integration suite.
    struct Cycle {
        values: Vec<u8>,
        at: usize,
    }

    impl Cycle {
        fn new(values: impl Into<Vec<u8>>) -> Box<Self> {
            Box::new(Self {
                values: values.into(),
                at: 0,
            })
        }
    }

    impl Die for Cycle {
        fn roll(&mut self) -> u8 {
            let v = self.values[self.at % self.values.len()];
            self.at += 1;
            v
        }
    }

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

    fn solo(die: Box<dyn Die>) -> GameEngine {
        GameEngine::new(board(), vec![Player::new("ada").unwrap()], die).unwrap()
    }

    #[test]
    fn empty_roster_is_rejected() {
        let result = GameEngine::new(board(), vec![], Cycle::new([1]));
        assert!(matches!(result, Err(StateError::EmptyRoster)));
    }

    #[test]
    fn new_engine_awaits_the_first_roll() {
        let engine = solo(Cycle::new([1]));
        assert_eq!(engine.phase(), Phase::AwaitingRoll);
        assert_eq!(engine.turn(), TurnId(0));
        assert_eq!(engine.current_player().name(), "ada");
        assert!(engine.winner().is_none());
    }

    #[test]
    fn roll_consumes_a_turn_even_when_blocked() {
        // 3 rides the shortcut to 9, then 6 overshoots from 9.
        let mut engine = solo(Cycle::new([3, 6]));
        let first = engine.roll().unwrap();
        assert_eq!(first.final_position, Cell(9), "shortcut 3 -> 9");
        assert_eq!(engine.turn(), TurnId(1));

        let second = engine.roll().unwrap();
        assert_eq!(second.raw_target, Cell(15));
        assert_eq!(second.final_position, Cell(9));
        assert!(!second.won);
        assert_eq!(engine.turn(), TurnId(2));
        assert_eq!(engine.phase(), Phase::AwaitingRoll);
    }

    #[test]
    fn turn_order_is_cyclic_registration_order() {
        let players = vec![
            Player::new("ada").unwrap(),
            Player::new("grace").unwrap(),
            Player::new("edsger").unwrap(),
        ];
        let mut engine = GameEngine::new(board(), players, Cycle::new([1])).unwrap();
        assert_eq!(engine.current_player().name(), "ada");
        engine.roll().unwrap();
        assert_eq!(engine.current_player().name(), "grace");
        engine.roll().unwrap();
        assert_eq!(engine.current_player().name(), "edsger");
        engine.roll().unwrap();
        assert_eq!(engine.current_player().name(), "ada");
    }

    #[test]
    fn winning_freezes_the_engine() {
        // 5 then 5: 0 -> 5, then 5 -> 10 == final cell.
        let mut engine = solo(Cycle::new([5, 5]));
        engine.roll().unwrap();
        let winning = engine.roll().unwrap();
        assert!(winning.won);
        assert_eq!(engine.phase(), Phase::GameOver);
        assert_eq!(engine.winner().unwrap().name(), "ada");

        assert_eq!(engine.roll().unwrap_err(), RollError::GameOver);
        // Still frozen after repeated attempts.
        assert_eq!(engine.roll().unwrap_err(), RollError::GameOver);
        assert_eq!(engine.turn(), TurnId(2));
    }

    #[test]
    fn reentrant_roll_is_rejected() {
        // Safe callers cannot observe Phase::Resolving from outside a
        // callback; force it to verify the guard itself.
        let mut engine = solo(Cycle::new([1]));
        engine.phase = Phase::Resolving;
        assert_eq!(engine.roll().unwrap_err(), RollError::Reentrant);
    }

    #[test]
    fn winner_stays_current_player_after_game_over() {
        let players = vec![Player::new("ada").unwrap(), Player::new("grace").unwrap()];
        // ada: 0 -> 5; grace: 0 -> 4; ada: 5 -> 10 wins.
        let mut engine = GameEngine::new(board(), players, Cycle::new([5, 4, 5])).unwrap();
        engine.roll().unwrap();
        engine.roll().unwrap();
        let result = engine.roll().unwrap();
        assert!(result.won);
        assert_eq!(engine.current_player().name(), "ada");
        assert_eq!(engine.winner().unwrap().position(), Cell(10));
        // grace kept her position.
        assert_eq!(engine.players()[1].position(), Cell(4));
    }

    #[test]
    fn debug_impl_doesnt_panic() {
        let engine = solo(Cycle::new([1]));
        let debug = format!("{engine:?}");
        assert!(debug.contains("GameEngine"));
        assert!(debug.contains("phase"));
    }
}
