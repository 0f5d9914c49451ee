//! Module `types' provides various building blocks, including
//! some common traits.

/// clause identifiers
pub mod cid;
/// methods on exponential moving averages
pub mod ema;
/// methods on flags used in Var
pub mod flags;
/// methods on literals
pub mod lit;

pub use self::{cid::*, ema::*, flags::*, lit::*};

pub use crate::{assign::AssignReason, config::Config, solver::SolverEvent};

/// Var index.
pub type VarId = usize;

/// Decision Level Representation.
pub type DecisionLevel = u32;

/// API for accessing internal data in a module.
/// For example, `Solver` reports need to access misc parameters and statistics,
/// which, however, should be used locally in the defining modules.
/// To avoid to make them public, we define a generic accessor or exporter here.
pub trait PropertyReference<I, O> {
    fn refer(&self, key: I) -> &O;
}

pub trait PropertyDereference<I, O: Sized> {
    fn derefer(&self, key: I) -> O;
}

/// API for object instantiation based on `Configuration` and `CNFDescription`.
/// This is implemented by *all the modules* except `Configuration` and `CNFDescription`.
///
/// # Example
///
/// ```
/// use cdcl_restart::{assign::AssignStack, restart::Restarter, types::*};
/// let _ = AssignStack::instantiate(&Config::default(), &CNFDescription::default());
/// let _ = Restarter::instantiate(&Config::default(), &CNFDescription::default());
///```
pub trait Instantiate {
    /// make and return an object from `Config` and `CNFDescription`.
    fn instantiate(conf: &Config, cnf: &CNFDescription) -> Self;
    /// update by a solver event.
    fn handle(&mut self, _e: SolverEvent) {}
}

/// Data storage about a problem.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CNFDescription {
    pub num_of_variables: usize,
    pub num_of_clauses: usize,
}

impl std::fmt::Display for CNFDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "CNF({} vars, {} clauses)",
            self.num_of_variables, self.num_of_clauses
        )
    }
}

impl From<usize> for CNFDescription {
    /// make a description of a problem with `n` vars.
    fn from(n: usize) -> Self {
        CNFDescription {
            num_of_variables: n,
            ..CNFDescription::default()
        }
    }
}
