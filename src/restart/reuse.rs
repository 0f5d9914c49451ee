/// Trail reuse on restart: keep the decisions the heuristics would make again.
use {
    super::Restarter,
    crate::{
        assign::{AssignIF, AssignStack, VarSelectIF},
        types::*,
    },
};

impl Restarter {
    /// return the number of levels fixed by assumptions, plus one if
    /// a pseudo-decision level follows them.
    pub fn trivial_decisions(asg: &AssignStack) -> DecisionLevel {
        let n = asg.num_assumptions() as DecisionLevel;
        match asg.frame(n + 1) {
            Some(frame) if frame.decision.is_none() => n + 1,
            _ => n,
        }
    }
    /// return the deepest level above `from` whose decisions all outrank
    /// the var the heuristics pick next. If every var is assigned, all
    /// decisions are kept. A pseudo-decision level stops the walk.
    pub fn reusable_level(
        asg: &AssignStack,
        use_scores: bool,
        from: DecisionLevel,
    ) -> DecisionLevel {
        let ranking = asg.ranking(use_scores);
        let next = asg.next_decision_var(use_scores);
        let level = asg.decision_level();
        let mut reusable = from;
        while reusable < level {
            let Some(decision) = asg.decision_at(reusable + 1) else {
                break;
            };
            if let Some(vi) = next {
                if !ranking.outranks(decision.vi(), vi) {
                    break;
                }
            }
            reusable += 1;
        }
        reusable
    }
}
