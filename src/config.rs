//! Crate `config` provides the configuration of the restart scheduler.

/// Configuration of restart, stabilization and trail reuse.
#[derive(Clone, Debug)]
pub struct Config {
    //
    //## restarter
    //
    /// Enable restarts
    pub use_restart: bool,

    /// #conflicts between restarts
    pub rst_step: usize,

    /// Glue margin in percent for forcing restart
    pub rst_margin: f64,

    /// Reuse the trail on restart
    pub rst_reuse_trail: bool,

    //
    //## stabilizer
    //
    /// Enable stabilizing phase
    pub use_stabilize: bool,

    /// #conflicts before the first phase change
    pub stb_init: usize,

    /// Growth of stable phases in percent
    pub stb_factor: usize,

    /// Stay in stable phase once entered
    pub stb_only: bool,

    //
    //## reluctant doubling
    //
    /// #conflicts as the base period of reluctant doubling (0 disables)
    pub rlc_period: usize,

    /// Upper bound of reluctant doubling intervals (0 for no bound)
    pub rlc_limit: usize,

    //
    //## decision heuristics
    //
    /// Use scores in stable phase instead of bump timestamps
    pub use_score: bool,

    /// Length of glue fast EMA
    pub ema_glue_fast: usize,

    /// Length of glue slow EMA
    pub ema_glue_slow: usize,

    //
    //## I/O configuration
    //
    /// Disable any progress message
    pub quiet_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            use_restart: true,
            rst_step: 2,
            rst_margin: 10.0,
            rst_reuse_trail: true,
            use_stabilize: true,
            stb_init: 1000,
            stb_factor: 200,
            stb_only: false,
            rlc_period: 1024,
            rlc_limit: 1_048_576,
            use_score: true,
            ema_glue_fast: 33,
            ema_glue_slow: 100_000,
            quiet_mode: false,
        }
    }
}
