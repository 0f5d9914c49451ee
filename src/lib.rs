//! Restart scheduling for a CDCL SAT solver: glue-based restarts,
//! alternation of stable and unstable search modes, reluctant doubling,
//! and trail reuse on restart.
/// Module `assign` implements the trail, the decision stack and backtracking.
pub mod assign;
/// Module `config` provides solver's configuration.
pub mod config;
/// Module `restart` provides restart heuristics and the mode scheduler.
pub mod restart;
/// Module `solver` provides the conflict driver.
pub mod solver;
/// Module `state` is a collection of internal data.
pub mod state;
/// Module `types` provides various building blocks, including some common traits.
pub mod types;

pub use {
    config::Config,
    restart::{RestartIF, Restarter},
    solver::{SearchIF, Solver, SolverEvent},
    types::{Instantiate, Lit},
};
