/// Reluctant doubling, which is Luby series driven by conflicts.
use std::fmt;

/// A generator of sparse restart signals at intervals `period * luby(i)`,
/// where `luby(i)` is 1, 1, 2, 1, 1, 2, 4, 1, ...
/// It is built on Knuth's pair `(u, v)`: `v` is the current factor.
///
/// ```
/// use cdcl_restart::restart::Reluctant;
/// let mut r = Reluctant::new(2, 0);
/// let mut fired_at = Vec::new();
/// for conflict in 1..=16 {
///     r.tick();
///     if r.fire() {
///         fired_at.push(conflict);
///     }
/// }
/// assert_eq!(fired_at, vec![2, 4, 8, 10, 12, 16]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Reluctant {
    u: usize,
    v: usize,
    /// the base interval; zero means disabled.
    period: usize,
    countdown: usize,
    /// `v` wraps to one when it reaches this.
    limit: Option<usize>,
    trigger: bool,
}

impl fmt::Display for Reluctant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.period == 0 {
            write!(f, "Reluctant(deactivated)")
        } else {
            write!(
                f,
                "Reluctant[period:{}, factor:{}, countdown:{}]",
                self.period, self.v, self.countdown
            )
        }
    }
}

impl Reluctant {
    /// make a generator; a zero `period` makes a disabled one, a zero `limit` an unbounded one.
    pub fn new(period: usize, limit: usize) -> Self {
        let mut r = Reluctant::default();
        if 0 < period {
            r.enable(period, limit);
        }
        r
    }
    pub fn enable(&mut self, period: usize, limit: usize) {
        debug_assert!(0 < period);
        self.u = 1;
        self.v = 1;
        self.period = period;
        self.countdown = period;
        self.trigger = false;
        self.limit = (0 < limit).then_some(limit);
    }
    pub fn disable(&mut self) {
        self.period = 0;
        self.trigger = false;
    }
    pub fn is_enabled(&self) -> bool {
        0 < self.period
    }
    /// count a conflict. A pending trigger freezes the countdown.
    pub fn tick(&mut self) {
        if self.period == 0 || self.trigger {
            return;
        }
        self.countdown -= 1;
        if 0 < self.countdown {
            return;
        }
        if self.u & self.u.wrapping_neg() == self.v {
            self.u += 1;
            self.v = 1;
        } else {
            self.v *= 2;
        }
        if self.limit.map_or(false, |l| l <= self.v) {
            self.u = 1;
            self.v = 1;
        }
        self.countdown = self.v * self.period;
        self.trigger = true;
    }
    /// return `true` once per trigger.
    pub fn fire(&mut self) -> bool {
        std::mem::replace(&mut self.trigger, false)
    }
    /// return `true` if a trigger is pending.
    pub fn is_active(&self) -> bool {
        self.trigger
    }
}
