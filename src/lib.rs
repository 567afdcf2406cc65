//! Running-order scheduling for performances with performer spacing rules.
//!
//! Builds candidate running orders so that no performer reappears too soon
//! after a previous appearance, and scores each candidate so several
//! variations can be compared side by side.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Performance`, `PerformerSet`, `Schedule`, `Warning`
//! - **`random`**: Seeded, reproducible shuffle for each variation's base order
//! - **`dispatching`**: Candidate selection strategies (greedy, score-weighted, top-three)
//! - **`scheduler`**: `ScheduleBuilder`, violation detection and scoring, comparison
//! - **`validation`**: Input integrity checks
//! - **`tabular`**: Header-addressed row parsing and text rendering
//! - **`config`**: Run parameters loadable from TOML
//!
//! # Architecture
//!
//! The scheduling core (`random`, `dispatching`, `scheduler`) is pure and
//! synchronous: typed performances in, typed variations out. Reading rows
//! and rendering tables live in `tabular`, at the edge.
//!
//! The builder is a greedy/stochastic heuristic. It does not guarantee a
//! zero-violation order; requesting more variations is how a better one
//! is found.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod random;
pub mod scheduler;
pub mod tabular;
pub mod validation;

pub use error::{Result, RunningOrderError};
