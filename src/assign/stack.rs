/// main struct AssignStack
use {
    super::{AssignIF, Var},
    crate::types::*,
    std::fmt,
};

/// A frame of the decision stack.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Frame {
    /// the decision literal; `None` for a pseudo-decision level, which is opened
    /// when an assumption is already satisfied by the implications of the former ones.
    pub decision: Option<Lit>,
    /// the trail height when this level was opened.
    pub trail_len: usize,
}

/// A record of assignment. It's called 'trail' in Glucose.
#[derive(Clone, Debug, Default)]
pub struct AssignStack {
    /// assigns of vars
    pub(super) assign: Vec<Option<bool>>,
    /// vars
    pub(super) var: Vec<Var>,
    /// record of assignment
    pub(super) trail: Vec<Lit>,
    /// decision stack; the frame of level `n` is at `n - 1`.
    pub(super) trail_lim: Vec<Frame>,
    /// assumptions given from outside
    pub(super) assumptions: Vec<Lit>,

    //
    //## Var ranking
    //
    /// scores used in stable phase
    pub(super) score: Vec<f64>,
    /// bump timestamps used in unstable phase
    pub(super) bumped: Vec<u64>,
    /// the last timestamp
    pub(super) bump_stamp: u64,

    //
    //## Statistics
    //
    /// the number of vars.
    pub num_vars: usize,
    /// the number of conflicts.
    pub num_conflict: usize,
    /// search cost ticks accumulated by propagation.
    pub num_tick: usize,
    pub(super) num_decision: usize,
    pub(super) num_propagation: usize,
    pub(super) num_backtrack: usize,
}

impl Instantiate for AssignStack {
    fn instantiate(_config: &Config, cnf: &CNFDescription) -> AssignStack {
        let nv = cnf.num_of_variables;
        AssignStack {
            assign: vec![None; 1 + nv],
            var: Var::new_vars(nv),
            trail: Vec::with_capacity(nv),
            score: vec![0.0; 1 + nv],
            // the initial queue order follows var indices.
            bumped: (0..=nv as u64).collect::<Vec<_>>(),
            bump_stamp: nv as u64,
            num_vars: nv,
            ..AssignStack::default()
        }
    }
    fn handle(&mut self, e: SolverEvent) {
        match e {
            SolverEvent::NewVar => {
                if self.var.is_empty() {
                    self.assign.push(None);
                    self.var.push(Var::default());
                    self.score.push(0.0);
                    self.bumped.push(0);
                }
                self.num_vars += 1;
                self.bump_stamp += 1;
                self.assign.push(None);
                self.var.push(Var::default());
                self.score.push(0.0);
                self.bumped.push(self.bump_stamp);
            }
            SolverEvent::Conflict => {
                self.num_conflict += 1;
            }
            _ => (),
        }
    }
}

impl AssignIF for AssignStack {
    fn decision_level(&self) -> DecisionLevel {
        self.trail_lim.len() as DecisionLevel
    }
    fn frame(&self, lv: DecisionLevel) -> Option<&Frame> {
        if lv == 0 {
            return None;
        }
        self.trail_lim.get(lv as usize - 1)
    }
    fn decision_at(&self, lv: DecisionLevel) -> Option<Lit> {
        debug_assert!(
            0 < lv && lv <= self.decision_level(),
            "no decision level {lv} in a stack of depth {}",
            self.decision_level()
        );
        self.trail_lim[lv as usize - 1].decision
    }
    fn assumptions(&self) -> &[Lit] {
        &self.assumptions
    }
    fn stack_len(&self) -> usize {
        self.trail.len()
    }
    fn len_upto(&self, lv: DecisionLevel) -> usize {
        self.trail_lim
            .get(lv as usize)
            .map_or(self.trail.len(), |f| f.trail_len)
    }
}

impl fmt::Display for AssignStack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let v = self.trail.iter().map(|l| i32::from(*l)).collect::<Vec<_>>();
        let levels = self.decision_level();
        let c = |lv: DecisionLevel| {
            let from = if lv == 0 { 0 } else { self.len_upto(lv - 1) };
            (lv, &v[from..self.len_upto(lv)])
        };
        write!(
            f,
            "ASG:: trail({}):{:?}\n      stats: level: {}, assumptions: {}, conflicts: {}",
            self.trail.len(),
            (0..=levels).map(c).collect::<Vec<_>>(),
            levels,
            self.assumptions.len(),
            self.num_conflict,
        )
    }
}
