//! Players: identity, position, and the observer registry.

use chutes_core::{Cell, GameEvent, Observer, ObserverId, StateError};
use indexmap::IndexMap;
use std::fmt;

/// A participant in one game: a name, a track position, and the
/// observers subscribed to that player's events.
///
/// Positions start at [`Cell::START`] (off-board) and are mutated only
/// by the engine as turns resolve — external callers read positions,
/// they never write them mid-turn.
///
/// # Examples
///
/// ```
/// use chutes_core::Cell;
/// use chutes_engine::Player;
///
/// let player = Player::new("ada").unwrap();
/// assert_eq!(player.name(), "ada");
/// assert_eq!(player.position(), Cell::START);
///
/// // Empty names are rejected at construction.
/// assert!(Player::new("").is_err());
/// ```
pub struct Player {
    name: String,
    position: Cell,
    observers: IndexMap<ObserverId, Box<dyn Observer>>,
}

impl Player {
    /// Create a player off-board with no subscriptions.
    ///
    /// Returns `Err(StateError::EmptyPlayerName)` for an empty name.
    pub fn new(name: impl Into<String>) -> Result<Self, StateError> {
        let name = name.into();
        if name.is_empty() {
            return Err(StateError::EmptyPlayerName);
        }
        Ok(Self {
            name,
            position: Cell::START,
            observers: IndexMap::new(),
        })
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current track position (0 before the first move).
    pub fn position(&self) -> Cell {
        self.position
    }

    /// Commit a resolved position. Engine-only.
    pub(crate) fn set_position(&mut self, position: Cell) {
        self.position = position;
    }

    /// Register an observer for this player's events.
    ///
    /// Returns the token that [`unsubscribe`](Player::unsubscribe)
    /// takes. Observers are notified synchronously in registration
    /// order.
    pub fn subscribe(&mut self, observer: Box<dyn Observer>) -> ObserverId {
        let id = ObserverId::next();
        self.observers.insert(id, observer);
        id
    }

    /// Remove a subscription. Returns `false` if the token was unknown
    /// (already removed, or issued by another player).
    ///
    /// Uses `shift_remove` so the remaining observers keep their
    /// registration order.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.shift_remove(&id).is_some()
    }

    /// Number of active subscriptions.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Deliver one event to every observer, in registration order.
    pub(crate) fn notify(&mut self, event: &GameEvent) {
        for observer in self.observers.values_mut() {
            observer.on_event(event);
        }
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("position", &self.position)
            .field("observers", &self.observers.len())
            .finish()
    }
}
