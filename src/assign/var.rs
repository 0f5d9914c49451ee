/// Var struct and its access API
use {
    super::AssignStack,
    crate::types::*,
    std::fmt,
};

/// Object representing the assignment data of a variable.
///
/// None of these fields is valid unless the variable is assigned.
/// They are not reset on unassignment; check the assignment first.
#[derive(Clone, Debug)]
pub struct Var {
    /// decision level
    pub(crate) level: DecisionLevel,
    /// trail height at assignment
    pub(crate) trail: usize,
    /// implication graph edge during search
    pub(crate) reason: AssignReason,
    /// missed lower-level reason
    pub(crate) missed_implication: Option<ClauseId>,
    /// level of the missed implication
    pub(crate) missed_level: DecisionLevel,
    /// the `Flag`s (8 bits)
    pub(crate) flags: FlagVar,
}

impl Default for Var {
    fn default() -> Var {
        Var {
            level: DecisionLevel::default(),
            trail: 0,
            reason: AssignReason::None,
            missed_implication: None,
            missed_level: DecisionLevel::default(),
            flags: FlagVar::empty(),
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let st = |flag, mes| if self.is(flag) { mes } else { "" };
        write!(
            f,
            "V{{level: {}, trail: {}, {}{}{}}}",
            self.level,
            self.trail,
            self.reason,
            st(FlagVar::DIRTY, ", dirty"),
            st(FlagVar::ASSUMED, ", assumed"),
        )
    }
}

impl Var {
    /// return a new vector of $n$ `Var`s.
    pub fn new_vars(n: usize) -> Vec<Var> {
        vec![Var::default(); n + 1]
    }
    pub fn level(&self) -> DecisionLevel {
        self.level
    }
    pub fn trail(&self) -> usize {
        self.trail
    }
    pub fn reason(&self) -> AssignReason {
        self.reason
    }
    /// return the missed lower-level reason and its level.
    pub fn missed_implication(&self) -> Option<(ClauseId, DecisionLevel)> {
        self.missed_implication.map(|cid| (cid, self.missed_level))
    }
}

impl FlagIF for Var {
    type FlagType = FlagVar;
    #[inline]
    fn is(&self, flag: Self::FlagType) -> bool {
        self.flags.contains(flag)
    }
    #[inline]
    fn turn_off(&mut self, flag: Self::FlagType) {
        self.flags.remove(flag);
    }
    #[inline]
    fn turn_on(&mut self, flag: Self::FlagType) {
        self.flags.insert(flag);
    }
}

/// Var manipulation
pub trait VarManipulateIF {
    /// return the assignment of var.
    fn assign(&self, vi: VarId) -> Option<bool>;
    /// return *the value* of a literal.
    fn assigned(&self, l: Lit) -> Option<bool>;
    /// return the assign level of var.
    fn level(&self, vi: VarId) -> DecisionLevel;
    /// return the var.
    fn var(&self, vi: VarId) -> &Var;
    /// record a reason found at a level lower than the assigned one.
    /// The literal is marked dirty to be propagated again.
    fn set_missed_implication(&mut self, vi: VarId, cid: ClauseId, lv: DecisionLevel);
}

impl VarManipulateIF for AssignStack {
    #[inline]
    fn assign(&self, vi: VarId) -> Option<bool> {
        self.assign[vi]
    }
    #[inline]
    fn assigned(&self, l: Lit) -> Option<bool> {
        match self.assign[l.vi()] {
            Some(x) if !bool::from(l) => Some(!x),
            x => x,
        }
    }
    #[inline]
    fn level(&self, vi: VarId) -> DecisionLevel {
        self.var[vi].level
    }
    #[inline]
    fn var(&self, vi: VarId) -> &Var {
        &self.var[vi]
    }
    #[inline]
    fn set_missed_implication(&mut self, vi: VarId, cid: ClauseId, lv: DecisionLevel) {
        debug_assert!(self.assign[vi].is_some());
        debug_assert!(lv < self.var[vi].level);
        let v = &mut self.var[vi];
        v.missed_implication = Some(cid);
        v.missed_level = lv;
        v.turn_on(FlagVar::DIRTY);
    }
}
