use super::{AssignIF, AssignStack};
use crate::types::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tusize {
    NumBacktrack,
    NumConflict,
    NumDecision,
    NumPropagation,
    NumTick,
    //
    //## decision stack
    //
    DecisionLevel,
    NumAssumption,
    NumAssignedVar,
}

pub const USIZES: [Tusize; 8] = [
    Tusize::NumBacktrack,
    Tusize::NumConflict,
    Tusize::NumDecision,
    Tusize::NumPropagation,
    Tusize::NumTick,
    Tusize::DecisionLevel,
    Tusize::NumAssumption,
    Tusize::NumAssignedVar,
];

impl PropertyDereference<Tusize, usize> for AssignStack {
    #[inline]
    fn derefer(&self, k: Tusize) -> usize {
        match k {
            Tusize::NumBacktrack => self.num_backtrack,
            Tusize::NumConflict => self.num_conflict,
            Tusize::NumDecision => self.num_decision,
            Tusize::NumPropagation => self.num_propagation,
            Tusize::NumTick => self.num_tick,
            Tusize::DecisionLevel => self.decision_level() as usize,
            Tusize::NumAssumption => self.assumptions.len(),
            Tusize::NumAssignedVar => self.trail.len(),
        }
    }
}
