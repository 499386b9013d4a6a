//! Seedable die strategies for the chutes board-race engine.
//!
//! Two [`Die`] implementations over a ChaCha8 RNG:
//!
//! - [`FairDie`]: uniform over `1..=6`.
//! - [`LoadedDie`]: uniform over `4..=6`, modelling a die loaded toward
//!   high values. Useful for exercising overshoot-heavy endgames.
//!
//! Both respect the determinism contract: a die built with
//! [`seeded`](FairDie::seeded) produces an identical roll sequence for
//! an identical seed, which is what makes whole games replayable.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use chutes_core::Die;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A fair six-sided die: uniform over `1..=6`.
///
/// # Examples
///
/// ```
/// use chutes_core::Die;
/// use chutes_dice::FairDie;
///
/// let mut a = FairDie::seeded(7);
/// let mut b = FairDie::seeded(7);
/// assert_eq!(a.roll(), b.roll());
/// ```
#[derive(Clone, Debug)]
pub struct FairDie {
    rng: ChaCha8Rng,
}

impl FairDie {
    /// A die with a fixed seed, for deterministic runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// A die seeded from OS entropy, for interactive play.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl Die for FairDie {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }
}

/// A loaded die: uniform over `4..=6`.
///
/// Every face is high, so a player near the end of the track overshoots
/// often — handy for stress-testing the stay-put rule.
#[derive(Clone, Debug)]
pub struct LoadedDie {
    rng: ChaCha8Rng,
}

impl LoadedDie {
    /// A die with a fixed seed, for deterministic runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// A die seeded from OS entropy, for interactive play.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl Die for LoadedDie {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(4..=6)
    }
}
