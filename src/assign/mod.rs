// Module `assign` implements the assignment side the restart scheduler works on:
// variable records, the trail, the decision stack and the backtrack primitive.
// This version can handle Chronological and Non Chronological Backtrack.

/// backjump
mod backtrack;
/// decision var selection and ranking
mod select;
/// assignment management
mod stack;
/// properties
pub mod stats;
/// Var struct
mod var;

pub use self::{
    backtrack::BacktrackIF,
    select::{score_smaller, Ranking, VarSelectIF},
    stack::{AssignStack, Frame},
    var::{Var, VarManipulateIF},
};
use {
    crate::types::*,
    std::fmt,
};

/// Reasons of assignments
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum AssignReason {
    /// Assigned by decision
    Decision(DecisionLevel),
    /// Assigned by a clause, held as an index into the clause arena.
    Implication(ClauseId),
    /// None of the above.
    None,
}

impl fmt::Display for AssignReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssignReason::Decision(0) => write!(f, "Asserted"),
            AssignReason::Decision(lvl) => write!(f, "Decided at level {lvl}"),
            AssignReason::Implication(cid) => write!(f, "Implied by {cid}"),
            AssignReason::None => write!(f, "Not assigned"),
        }
    }
}

/// API about the trail and the decision stack.
pub trait AssignIF {
    /// return the current decision level.
    fn decision_level(&self) -> DecisionLevel;
    /// return the frame of decision level `lv` if it exists.
    fn frame(&self, lv: DecisionLevel) -> Option<&Frame>;
    /// return the decision literal of level `lv`; `None` for a pseudo-decision level.
    fn decision_at(&self, lv: DecisionLevel) -> Option<Lit>;
    /// return the assumption literals.
    fn assumptions(&self) -> &[Lit];
    /// return the number of assumptions.
    fn num_assumptions(&self) -> usize {
        self.assumptions().len()
    }
    /// return the number of assigned literals.
    fn stack_len(&self) -> usize;
    /// return the length of the trail up to the end of level `lv`.
    fn len_upto(&self, lv: DecisionLevel) -> usize;
}
