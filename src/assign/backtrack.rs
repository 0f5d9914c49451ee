/// implement assignment and backjump on the decision stack.
/// This version can handle Chronological and Non Chronological Backtrack.
use {
    super::{AssignIF, AssignStack, Frame, VarManipulateIF},
    crate::types::*,
    log::trace,
};

/// API for assignment and backtrack.
pub trait BacktrackIF {
    /// register an assumption, which is decided before any other decision.
    fn add_assumption(&mut self, l: Lit);
    /// open a new decision level by the next assumption.
    /// If it is already satisfied, a pseudo-decision level is opened instead.
    /// Return `false` if it is falsified.
    fn assign_by_assumption(&mut self) -> bool;
    /// open a new decision level by a decision.
    fn assign_by_decision(&mut self, l: Lit);
    /// open a decision level without decision.
    fn new_pseudo_decision_level(&mut self);
    /// assign by an implication at level `lv`, which can be lower than the current one.
    fn assign_by_implication(&mut self, l: Lit, cid: ClauseId, lv: DecisionLevel);
    /// add search cost.
    fn add_ticks(&mut self, n: usize);
    /// execute *backjump*: undo the assignments and frames above level `lv`.
    fn cancel_until(&mut self, lv: DecisionLevel);
}

impl BacktrackIF for AssignStack {
    fn add_assumption(&mut self, l: Lit) {
        debug_assert!(l.vi() <= self.num_vars);
        self.assumptions.push(l);
    }
    fn assign_by_assumption(&mut self) -> bool {
        let i = self.decision_level() as usize;
        debug_assert!(i < self.assumptions.len(), "no assumption left");
        let l = self.assumptions[i];
        match self.assigned(l) {
            Some(true) => {
                self.new_pseudo_decision_level();
                true
            }
            Some(false) => false,
            None => {
                self.assign_by_decision(l);
                self.var[l.vi()].turn_on(FlagVar::ASSUMED);
                true
            }
        }
    }
    fn assign_by_decision(&mut self, l: Lit) {
        debug_assert!(self.assign[l.vi()].is_none(), "double assignment of {l}");
        self.trail_lim.push(Frame {
            decision: Some(l),
            trail_len: self.trail.len(),
        });
        let lv = self.decision_level();
        self.set_assign(l, AssignReason::Decision(lv), lv);
        self.num_decision += 1;
    }
    fn new_pseudo_decision_level(&mut self) {
        self.trail_lim.push(Frame {
            decision: None,
            trail_len: self.trail.len(),
        });
        trace!("pseudo-decision level {}", self.decision_level());
    }
    fn assign_by_implication(&mut self, l: Lit, cid: ClauseId, lv: DecisionLevel) {
        debug_assert!(lv <= self.decision_level());
        debug_assert!(self.assign[l.vi()].is_none(), "double assignment of {l}");
        self.set_assign(l, AssignReason::Implication(cid), lv);
        self.num_propagation += 1;
    }
    fn add_ticks(&mut self, n: usize) {
        self.num_tick += n;
    }
    fn cancel_until(&mut self, lv: DecisionLevel) {
        if self.decision_level() <= lv {
            return;
        }
        let lim = self.len_upto(lv);
        let mut ooo_assigned: Vec<Lit> = Vec::new();
        for i in lim..self.trail.len() {
            let l = self.trail[i];
            let vi = l.vi();
            debug_assert!(
                self.assign[vi].is_some(),
                "cancel_until found unassigned var in trail {}{:?}",
                vi,
                &self.var[vi],
            );
            if self.var[vi].level <= lv {
                ooo_assigned.push(l);
                continue;
            }
            // var fields are kept as they are.
            self.assign[vi] = None;
        }
        self.trail.truncate(lim);
        for l in ooo_assigned {
            self.var[l.vi()].trail = self.trail.len();
            self.trail.push(l);
        }
        self.trail_lim.truncate(lv as usize);
        self.num_backtrack += 1;
        trace!("backtrack to level {lv}, trail {}", self.trail.len());
        #[cfg(feature = "boundary_check")]
        {
            for (i, l) in self.trail.iter().enumerate() {
                let v = &self.var[l.vi()];
                assert!(self.assigned(*l) == Some(true));
                assert!(v.level <= lv);
                assert_eq!(v.trail, i);
            }
        }
    }
}

impl AssignStack {
    fn set_assign(&mut self, l: Lit, reason: AssignReason, lv: DecisionLevel) {
        let vi = l.vi();
        self.assign[vi] = Some(bool::from(l));
        let v = &mut self.var[vi];
        v.level = lv;
        v.trail = self.trail.len();
        v.reason = reason;
        v.missed_implication = None;
        v.flags = FlagVar::empty();
        self.trail.push(l);
    }
}
