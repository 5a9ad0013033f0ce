//! Frame-trap game trees and their equilibria.
//!
//! A [`Scenario`] describes a fighting-game confrontation as a state machine of
//! simultaneous-move situations. The [`TreeBuilder`] expands it into a finite
//! [`GameTree`], and the two solvers compute mixed strategies for every node:
//!
//! - [`CfrSolver`]: counterfactual regret minimization by self-play
//! - [`LpSolver`]: exact minimax by backward induction over matrix games
//!
//! [`Sweep`] re-solves a subtree while sweeping one resource, and the
//! [`worker`] module wraps everything in a command/response protocol.

pub mod cfr;
pub mod control;
pub mod lp;
pub mod reward;
pub mod scenario;
pub mod sensitivity;
pub mod strategy;
pub mod tree;
pub mod worker;

pub use cfr::*;
pub use control::*;
pub use lp::*;
pub use reward::*;
pub use scenario::*;
pub use sensitivity::*;
pub use strategy::*;
pub use tree::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Expected values, regrets, and payoffs.
pub type Utility = f64;
/// Strategy weights and reach probabilities.
pub type Probability = f64;
/// Integral resource quantities (health, gauge stocks).
pub type Amount = i32;
/// Identifier of a player or opponent action within a scenario.
pub type ActionId = u32;
/// Identifier of a situation or terminal situation within a scenario.
pub type SituationId = u32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
}

impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self::from(uuid::Uuid::now_v7())
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner.serialize(serializer)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        uuid::Uuid::deserialize(deserializer).map(Self::from)
    }
}

// ============================================================================
// REWARD MODEL
// Win probabilities map linearly onto [-SCALE, +SCALE].
// ============================================================================
/// Reward magnitude of a certain win.
pub const WIN_PROBABILITY_SCALE: Utility = 10000.0;

// ============================================================================
// CFR SOLVER
// Iterations run in batches; control flags are observed between batches.
// ============================================================================
/// Default number of self-play iterations.
pub const CFR_ITERATIONS: usize = 10000;
/// Number of batches a run is split into (one progress message each).
pub const CFR_BATCH_COUNT: usize = 100;
/// Sleep between polls of the pause flag.
pub const PAUSE_POLL: std::time::Duration = std::time::Duration::from_millis(10);

// ============================================================================
// LP SOLVER
// ============================================================================
/// Pivot tolerance for the simplex tableau.
pub const SIMPLEX_EPSILON: f64 = 1e-9;
/// Pivot budget before a tableau is declared stalled.
pub const SIMPLEX_MAX_PIVOTS: usize = 10000;
/// Minimum accumulated weight considered a visit.
pub const POLICY_MIN: Probability = Probability::MIN_POSITIVE;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
