/// Decision var selection and the orders among vars
use {
    super::{AssignStack, VarManipulateIF},
    crate::types::*,
};

/// A comparator on vars, used to check whether a decided var would be picked
/// again before the next decision var.
#[derive(Clone, Copy, Debug)]
pub enum Ranking<'a> {
    /// by scores; used in stable phase
    Score(&'a [f64]),
    /// by bump timestamps, or the position in the decision queue
    Bumped(&'a [u64]),
}

impl Ranking<'_> {
    /// return `true` if `decided` has a higher priority than `next`.
    #[inline]
    pub fn outranks(&self, decided: VarId, next: VarId) -> bool {
        match self {
            Ranking::Score(score) => score_smaller(score, next, decided),
            Ranking::Bumped(stamp) => stamp[next] < stamp[decided],
        }
    }
}

/// the strict order on scores; ties are broken towards smaller var indices.
#[inline]
pub fn score_smaller(score: &[f64], a: VarId, b: VarId) -> bool {
    let s = score[a];
    let t = score[b];
    if s < t {
        return true;
    }
    if t < s {
        return false;
    }
    b < a
}

/// API for var selection.
pub trait VarSelectIF {
    /// return the var the decision heuristics would pick now.
    fn next_decision_var(&self, use_scores: bool) -> Option<VarId>;
    /// return the comparator of the active heuristics.
    fn ranking(&self, use_scores: bool) -> Ranking<'_>;
    /// add `inc` to the score of a var.
    fn bump_score(&mut self, vi: VarId, inc: f64);
    /// move a var to the front of the decision queue.
    fn bump_var(&mut self, vi: VarId);
    /// return the score of a var.
    fn score(&self, vi: VarId) -> f64;
    /// return the bump timestamp of a var.
    fn bumped(&self, vi: VarId) -> u64;
}

impl VarSelectIF for AssignStack {
    fn next_decision_var(&self, use_scores: bool) -> Option<VarId> {
        let ranking = self.ranking(use_scores);
        let mut best: Option<VarId> = None;
        for vi in 1..=self.num_vars {
            if self.assign(vi).is_some() {
                continue;
            }
            match best {
                Some(b) if !ranking.outranks(vi, b) => (),
                _ => best = Some(vi),
            }
        }
        best
    }
    fn ranking(&self, use_scores: bool) -> Ranking<'_> {
        if use_scores {
            Ranking::Score(&self.score)
        } else {
            Ranking::Bumped(&self.bumped)
        }
    }
    fn bump_score(&mut self, vi: VarId, inc: f64) {
        self.score[vi] += inc;
    }
    fn bump_var(&mut self, vi: VarId) {
        self.bump_stamp += 1;
        self.bumped[vi] = self.bump_stamp;
    }
    fn score(&self, vi: VarId) -> f64 {
        self.score[vi]
    }
    fn bumped(&self, vi: VarId) -> u64 {
        self.bumped[vi]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::BacktrackIF;

    #[test]
    fn test_score_smaller() {
        let score = [0.0, 1.0, 2.0, 2.0];
        assert!(score_smaller(&score, 1, 2));
        assert!(!score_smaller(&score, 2, 1));
        // a tie favors the smaller index
        assert!(score_smaller(&score, 3, 2));
        assert!(!score_smaller(&score, 2, 3));
        assert!(!score_smaller(&score, 2, 2));
    }

    #[test]
    fn test_next_decision_var() {
        let mut asg = AssignStack::instantiate(&Config::default(), &CNFDescription::from(4));
        // the queue starts in var order; the last one is the front.
        assert_eq!(asg.next_decision_var(false), Some(4));
        // all scores are zero; the smallest index wins.
        assert_eq!(asg.next_decision_var(true), Some(1));
        asg.bump_score(3, 2.5);
        asg.bump_var(2);
        assert_eq!(asg.next_decision_var(true), Some(3));
        assert_eq!(asg.next_decision_var(false), Some(2));
        asg.assign_by_decision(Lit::from(2i32));
        asg.assign_by_decision(Lit::from(-3i32));
        assert_eq!(asg.next_decision_var(true), Some(1));
        assert_eq!(asg.next_decision_var(false), Some(4));
        asg.assign_by_decision(Lit::from(1i32));
        asg.assign_by_decision(Lit::from(4i32));
        assert_eq!(asg.next_decision_var(false), None);
    }

    #[test]
    fn test_ranking() {
        let mut asg = AssignStack::instantiate(&Config::default(), &CNFDescription::from(3));
        asg.bump_var(1);
        assert!(asg.ranking(false).outranks(1, 3));
        assert!(!asg.ranking(false).outranks(3, 1));
        asg.bump_score(2, 1.0);
        assert!(asg.ranking(true).outranks(2, 1));
        assert!(asg.ranking(true).outranks(1, 3));
        assert!(!asg.ranking(true).outranks(3, 1));
    }
}
