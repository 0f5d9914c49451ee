//! Module `restart` decides when the search restarts, when it switches between
//! stable and unstable modes, and how much of the trail survives a restart.

/// mode-wise glue averages
mod glue;
/// reluctant doubling
mod reluctant;
/// trail reuse
mod reuse;
/// the mode scheduler
mod stabilize;
/// properties
pub mod stats;

pub use self::{glue::GlueAverages, reluctant::Reluctant, stabilize::StageVerdict};

use {
    crate::{
        assign::{AssignIF, AssignStack, BacktrackIF},
        state::{ProgressTag, State, StateIF, Timer},
        types::*,
    },
    log::trace,
    std::fmt,
};

/// API for restart, stabilization and trail reuse.
pub trait RestartIF: Instantiate + PropertyDereference<stats::Tusize, usize> {
    /// return `true` if the search is in stable mode.
    fn is_stable(&self) -> bool;
    /// return `true` if the decision heuristics should rank vars by scores.
    fn use_scores(&self) -> bool;
    /// feed the glue of a new learnt clause.
    /// The reluctant generator counts it as a conflict in stable mode.
    fn update_glue(&mut self, glue: usize);
    /// return the current mode after switching it if the phase limit is exceeded.
    fn stabilizing(&mut self, asg: &AssignStack, state: &mut State) -> bool;
    /// return `true` if the search should restart now.
    fn restarting(&mut self, asg: &AssignStack, state: &mut State) -> bool;
    /// return the level to backtrack to on restart.
    fn reuse_trail(&mut self, asg: &AssignStack) -> DecisionLevel;
    /// backtrack to the reusable level and set the next restart limit.
    fn restart(&mut self, asg: &mut AssignStack, state: &mut State);
    /// set the limits up for a new search from the current counters.
    fn init_search_limits(&mut self, asg: &AssignStack, state: &mut State);
}

/// `Restarter` holds the restart and stabilization schedule.
#[derive(Clone, Debug, Default)]
pub struct Restarter {
    //
    //## switches and parameters
    //
    use_restart: bool,
    rst_step: usize,
    rst_margin: f64,
    rst_reuse_trail: bool,
    use_stabilize: bool,
    stb_init: usize,
    stb_factor: usize,
    stb_only: bool,
    rlc_period: usize,
    rlc_limit: usize,
    use_score: bool,

    //
    //## schedule
    //
    stable: bool,
    /// restarts are blocked until this many conflicts.
    rst_limit: usize,
    /// the current phase ends after this; counted in conflicts while
    /// uncalibrated, and in ticks after that.
    stb_limit: usize,
    /// the phase length in ticks; `None` until the first phase ends.
    stb_interval: Option<usize>,
    /// conflicts at the last mode switch
    last_conflicts: usize,
    /// ticks at the last mode switch
    last_ticks: usize,
    glue: GlueAverages,
    reluctant: Reluctant,

    //
    //## statistics
    //
    num_stab_phase: usize,
    num_restart: usize,
    num_restart_level: usize,
    num_restart_stable: usize,
    num_reuse: usize,
    num_reused_level: usize,
    num_reuse_stable: usize,
}

impl Instantiate for Restarter {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> Self {
        Restarter {
            use_restart: config.use_restart,
            rst_step: config.rst_step,
            rst_margin: config.rst_margin,
            rst_reuse_trail: config.rst_reuse_trail,
            use_stabilize: config.use_stabilize,
            stb_init: config.stb_init,
            stb_factor: config.stb_factor,
            stb_only: config.stb_only,
            rlc_period: config.rlc_period,
            rlc_limit: config.rlc_limit,
            use_score: config.use_score,
            stable: config.use_stabilize && config.stb_only,
            rst_limit: config.rst_step,
            stb_limit: config.stb_init,
            glue: GlueAverages::instantiate(config, cnf),
            reluctant: Reluctant::new(config.rlc_period, config.rlc_limit),
            ..Restarter::default()
        }
    }
}

impl fmt::Display for Restarter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Restarter[{}, restart limit:{}, phase limit:{}, interval:{}, {}]",
            if self.stable { "stable" } else { "unstable" },
            self.rst_limit,
            self.stb_limit,
            self.stb_interval
                .map_or_else(|| "-".to_string(), |i| i.to_string()),
            self.reluctant,
        )
    }
}

impl RestartIF for Restarter {
    fn is_stable(&self) -> bool {
        self.stable
    }
    fn use_scores(&self) -> bool {
        self.use_score && self.stable
    }
    fn update_glue(&mut self, glue: usize) {
        self.glue.update(glue);
        if self.stable {
            self.reluctant.tick();
        }
    }
    fn stabilizing(&mut self, asg: &AssignStack, state: &mut State) -> bool {
        match self.stage_verdict(asg.num_conflict, asg.num_tick) {
            StageVerdict::Disabled => false,
            StageVerdict::Stay(stable) => stable,
            StageVerdict::Flip => self.flip_stage(asg, state),
        }
    }
    fn restarting(&mut self, asg: &AssignStack, state: &mut State) -> bool {
        if !self.use_restart {
            return false;
        }
        if (asg.decision_level() as usize) < asg.num_assumptions() + 2 {
            return false;
        }
        if self.stabilizing(asg, state) {
            return self.reluctant.fire();
        }
        if asg.num_conflict <= self.rst_limit {
            return false;
        }
        self.glue_exceeds_margin()
    }
    fn reuse_trail(&mut self, asg: &AssignStack) -> DecisionLevel {
        let trivial = Restarter::trivial_decisions(asg);
        if !self.rst_reuse_trail {
            return trivial;
        }
        let use_scores = self.use_scores();
        let level = Restarter::reusable_level(asg, use_scores, trivial);
        if trivial < level {
            self.num_reuse += 1;
            self.num_reused_level += (level - trivial) as usize;
            if self.stable {
                self.num_reuse_stable += 1;
            }
            trace!("reuse {} levels of the trail", level - trivial);
        }
        level
    }
    fn restart(&mut self, asg: &mut AssignStack, state: &mut State) {
        state.start_timer(Timer::Restart);
        self.num_restart += 1;
        self.num_restart_level += asg.decision_level() as usize;
        if self.stable {
            self.num_restart_stable += 1;
        }
        trace!(
            "restart {} at level {}",
            self.num_restart,
            asg.decision_level()
        );
        let lv = self.reuse_trail(asg);
        asg.cancel_until(lv);
        self.rst_limit = asg.num_conflict + self.rst_step;
        trace!("new restart limit at {} conflicts", self.rst_limit);
        state.report(ProgressTag::Restart, 2, asg);
        state.stop_timer(Timer::Restart);
    }
    fn init_search_limits(&mut self, asg: &AssignStack, state: &mut State) {
        let conflicts = asg.num_conflict;
        let stable = self.use_stabilize && self.stb_only;
        if stable != self.stable {
            state.stop_timer(self.phase_timer());
            self.stable = stable;
        }
        state.start_timer(self.phase_timer());
        self.rst_limit = conflicts + self.rst_step;
        self.stb_limit = conflicts + self.stb_init;
        self.stb_interval = None;
        self.last_conflicts = conflicts;
        self.last_ticks = asg.num_tick;
        self.glue = GlueAverages::instantiate(&state.config, &state.target);
        self.reluctant = Reluctant::new(self.rlc_period, self.rlc_limit);
        trace!(
            "new search limits: restart at {} conflicts, phase ends at {} conflicts",
            self.rst_limit,
            self.stb_limit
        );
    }
}

impl Restarter {
    /// return `true` if the fast glue average exceeds the slow one by the margin.
    pub fn glue_exceeds_margin(&self) -> bool {
        let fast = self.glue.get_fast();
        let slow = self.glue.get_slow();
        let limit = (100.0 + self.rst_margin) / 100.0 * slow;
        trace!("glue fast {fast:.2}, slow {slow:.2}, limit {limit:.2}");
        limit <= fast
    }
    /// return the timer of the current mode.
    pub fn phase_timer(&self) -> Timer {
        if self.stable {
            Timer::Stable
        } else {
            Timer::Unstable
        }
    }
    pub fn glue(&self) -> &GlueAverages {
        &self.glue
    }
    pub fn glue_mut(&mut self) -> &mut GlueAverages {
        &mut self.glue
    }
    pub fn reluctant(&self) -> &Reluctant {
        &self.reluctant
    }
}
