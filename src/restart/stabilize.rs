/// Alternation of stable and unstable modes.
///
/// The first phase is unstable and ends by conflicts. Its length in ticks
/// becomes the phase interval. The interval grows geometrically at the
/// end of each stable phase; an unstable phase reuses the current one.
use {
    super::Restarter,
    crate::{
        assign::AssignStack,
        state::{ProgressTag, State, StateIF},
    },
    log::debug,
};

/// What the mode scheduler does at a check.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StageVerdict {
    /// stabilization is off; the search is never stable.
    Disabled,
    /// keep the mode
    Stay(bool),
    /// switch the mode
    Flip,
}

impl Restarter {
    /// decide without side effects whether the current phase ends.
    pub fn stage_verdict(&self, num_conflict: usize, num_tick: usize) -> StageVerdict {
        if !self.use_stabilize {
            return StageVerdict::Disabled;
        }
        if self.stable && self.stb_only {
            return StageVerdict::Stay(true);
        }
        let reached = match self.stb_interval {
            None => self.stb_limit < num_conflict,
            Some(_) => self.stb_limit < num_tick,
        };
        if reached {
            StageVerdict::Flip
        } else {
            StageVerdict::Stay(self.stable)
        }
    }
    /// return the next phase interval in ticks.
    pub fn next_stb_interval(&self, delta_ticks: usize) -> usize {
        match self.stb_interval {
            None => delta_ticks,
            Some(interval) if self.stable => interval.saturating_mul(self.stb_factor) / 100,
            Some(interval) => interval,
        }
    }
    /// return the next phase limit, which always exceeds `ticks`.
    pub fn next_stb_limit(ticks: usize, interval: usize) -> usize {
        let limit = ticks.saturating_add(interval);
        if ticks < limit {
            limit
        } else {
            ticks + 1
        }
    }
    pub(super) fn flip_stage(&mut self, asg: &AssignStack, state: &mut State) -> bool {
        let conflicts = asg.num_conflict;
        let ticks = asg.num_tick;
        let delta_conflicts = conflicts - self.last_conflicts;
        let delta_ticks = ticks - self.last_ticks;
        let phase = if self.stable { "stable" } else { "unstable" };
        debug!(
            "{phase} phase {} took {delta_conflicts} conflicts and {delta_ticks} ticks, \
             reaching limit {} at {conflicts} conflicts and {ticks} ticks",
            self.num_stab_phase, self.stb_limit,
        );
        state.report(
            if self.stable {
                ProgressTag::StableEnd
            } else {
                ProgressTag::UnstableEnd
            },
            0,
            asg,
        );
        state.stop_timer(self.phase_timer());

        let interval = self.next_stb_interval(delta_ticks);
        if self.stb_interval.is_none() {
            debug!("phase interval calibrated to {interval} ticks");
        }
        self.stb_interval = Some(interval);
        self.stb_limit = Restarter::next_stb_limit(ticks, interval);
        self.stable = !self.stable;
        if self.stable {
            self.num_stab_phase += 1;
        }
        self.glue.swap();
        self.last_conflicts = conflicts;
        self.last_ticks = ticks;
        debug!(
            "next {} phase {} ends at {} ticks, after {interval} ticks",
            if self.stable { "stable" } else { "unstable" },
            self.num_stab_phase,
            self.stb_limit,
        );

        state.start_timer(self.phase_timer());
        state.report(
            if self.stable {
                ProgressTag::StableBegin
            } else {
                ProgressTag::UnstableBegin
            },
            0,
            asg,
        );
        self.stable
    }
}
