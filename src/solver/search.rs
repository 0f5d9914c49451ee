/// The conflict driver of the restart schedule
use {
    super::{Solver, SolverEvent},
    crate::{
        assign::{AssignIF, BacktrackIF, VarSelectIF},
        restart::RestartIF,
        types::*,
    },
    log::trace,
};

/// API for the search loop around conflicts.
pub trait SearchIF {
    /// open a new decision level, by the next assumption if any remains.
    /// Return `false` if all vars are assigned or an assumption is falsified.
    fn decide(&mut self) -> bool;
    /// count a conflict which produced a learnt clause with `glue`,
    /// then restart if the schedule says so. Return `true` on restart.
    fn handle_conflict(&mut self, glue: usize) -> bool;
}

impl SearchIF for Solver {
    fn decide(&mut self) -> bool {
        let Solver {
            ref mut asg,
            ref rst,
            ..
        } = self;
        if (asg.decision_level() as usize) < asg.num_assumptions() {
            return asg.assign_by_assumption();
        }
        match asg.next_decision_var(rst.use_scores()) {
            Some(vi) => {
                asg.assign_by_decision(Lit::from((vi, true)));
                true
            }
            None => false,
        }
    }
    fn handle_conflict(&mut self, glue: usize) -> bool {
        let Solver {
            ref mut asg,
            ref mut rst,
            ref mut state,
        } = self;
        asg.handle(SolverEvent::Conflict);
        rst.update_glue(glue);
        if !rst.restarting(asg, state) {
            return false;
        }
        trace!("conflict {} triggers a restart", asg.num_conflict);
        rst.restart(asg, state);
        true
    }
}
