use super::Restarter;
use crate::types::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tusize {
    NumStabPhase,
    NumRestart,
    NumRestartLevel,
    NumRestartStable,
    NumReuse,
    NumReusedLevel,
    NumReuseStable,
    //
    //## schedule
    //
    RestartLimit,
    StabilizeLimit,
    StabilizeInterval,
}

pub const USIZES: [Tusize; 10] = [
    Tusize::NumStabPhase,
    Tusize::NumRestart,
    Tusize::NumRestartLevel,
    Tusize::NumRestartStable,
    Tusize::NumReuse,
    Tusize::NumReusedLevel,
    Tusize::NumReuseStable,
    Tusize::RestartLimit,
    Tusize::StabilizeLimit,
    Tusize::StabilizeInterval,
];

impl PropertyDereference<Tusize, usize> for Restarter {
    #[inline]
    fn derefer(&self, k: Tusize) -> usize {
        match k {
            Tusize::NumStabPhase => self.num_stab_phase,
            Tusize::NumRestart => self.num_restart,
            Tusize::NumRestartLevel => self.num_restart_level,
            Tusize::NumRestartStable => self.num_restart_stable,
            Tusize::NumReuse => self.num_reuse,
            Tusize::NumReusedLevel => self.num_reused_level,
            Tusize::NumReuseStable => self.num_reuse_stable,
            Tusize::RestartLimit => self.rst_limit,
            Tusize::StabilizeLimit => self.stb_limit,
            Tusize::StabilizeInterval => self.stb_interval.unwrap_or(0),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TEma {
    /// glue averages of the running mode
    Glue,
    /// glue averages of the other mode
    GlueSaved,
}

pub const EMAS: [TEma; 2] = [TEma::Glue, TEma::GlueSaved];

impl PropertyReference<TEma, EmaView> for Restarter {
    #[inline]
    fn refer(&self, k: TEma) -> &EmaView {
        match k {
            TEma::Glue => self.glue.current().as_view(),
            TEma::GlueSaved => self.glue.saved().as_view(),
        }
    }
}
