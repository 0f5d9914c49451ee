//! Module `state` holds progress reporting and phase timers.
#[cfg(feature = "platform_wasm")]
use instant::Instant;
#[cfg(not(feature = "platform_wasm"))]
use std::time::Instant;
use {
    crate::{
        assign::{AssignIF, AssignStack},
        types::*,
    },
    log::{log, Level},
    std::{fmt, time::Duration},
};

/// Kinds of progress events reported by the scheduler.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProgressTag {
    StableBegin = 0,
    StableEnd,
    UnstableBegin,
    UnstableEnd,
    Restart,
}

impl From<ProgressTag> for char {
    fn from(tag: ProgressTag) -> char {
        match tag {
            ProgressTag::StableBegin => '[',
            ProgressTag::StableEnd => ']',
            ProgressTag::UnstableBegin => '{',
            ProgressTag::UnstableEnd => '}',
            ProgressTag::Restart => 'R',
        }
    }
}

/// Timers the scheduler runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Timer {
    Stable = 0,
    Unstable,
    Restart,
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Timer::Stable => write!(f, "stable"),
            Timer::Unstable => write!(f, "unstable"),
            Timer::Restart => write!(f, "restart"),
        }
    }
}

/// API for progress reporting and timing.
pub trait StateIF {
    /// emit a progress line at verbosity `verbose`.
    /// 0 goes to `info`, 1 to `debug`, and more to `trace`.
    fn report(&mut self, tag: ProgressTag, verbose: usize, asg: &AssignStack);
    /// start a timer. A running one is restarted after its time is accumulated.
    fn start_timer(&mut self, timer: Timer);
    /// stop a timer. Stopping a stopped one does nothing.
    fn stop_timer(&mut self, timer: Timer);
    /// return the accumulated time of a timer.
    fn elapsed(&self, timer: Timer) -> Duration;
    /// return `true` if the timer is running.
    fn is_running(&self, timer: Timer) -> bool;
    /// return the number of reports with a tag, including suppressed ones.
    fn num_reports(&self, tag: ProgressTag) -> usize;
    /// return the tag of the last report.
    fn last_report(&self) -> Option<ProgressTag>;
}

/// Data storage for `Solver`.
#[derive(Clone, Debug)]
pub struct State {
    /// solver configuration
    pub config: Config,
    /// problem description
    pub target: CNFDescription,
    start: Instant,
    running: [Option<Instant>; 3],
    total: [Duration; 3],
    num_report: [usize; 5],
    last_report: Option<ProgressTag>,
}

impl Default for State {
    fn default() -> State {
        State {
            config: Config::default(),
            target: CNFDescription::default(),
            start: Instant::now(),
            running: [None; 3],
            total: [Duration::ZERO; 3],
            num_report: [0; 5],
            last_report: None,
        }
    }
}

impl Instantiate for State {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> State {
        State {
            config: config.clone(),
            target: cnf.clone(),
            ..State::default()
        }
    }
}

impl StateIF for State {
    fn report(&mut self, tag: ProgressTag, verbose: usize, asg: &AssignStack) {
        self.num_report[tag as usize] += 1;
        self.last_report = Some(tag);
        if self.config.quiet_mode {
            return;
        }
        let level = match verbose {
            0 => Level::Info,
            1 => Level::Debug,
            _ => Level::Trace,
        };
        log!(
            level,
            "c {} {:>9.2}s {:>10} conflicts, {:>12} ticks, level {:>5}, trail {:>8}",
            char::from(tag),
            self.start.elapsed().as_secs_f64(),
            asg.num_conflict,
            asg.num_tick,
            asg.decision_level(),
            asg.stack_len(),
        );
    }
    fn start_timer(&mut self, timer: Timer) {
        let now = Instant::now();
        if let Some(since) = self.running[timer as usize].replace(now) {
            self.total[timer as usize] += now.duration_since(since);
        }
    }
    fn stop_timer(&mut self, timer: Timer) {
        if let Some(since) = self.running[timer as usize].take() {
            self.total[timer as usize] += since.elapsed();
        }
    }
    fn elapsed(&self, timer: Timer) -> Duration {
        let t = self.total[timer as usize];
        self.running[timer as usize].map_or(t, |since| t + since.elapsed())
    }
    fn is_running(&self, timer: Timer) -> bool {
        self.running[timer as usize].is_some()
    }
    fn num_reports(&self, tag: ProgressTag) -> usize {
        self.num_report[tag as usize]
    }
    fn last_report(&self) -> Option<ProgressTag> {
        self.last_report
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let t = |timer| self.elapsed(timer).as_secs_f64();
        write!(
            f,
            "State[{}, stable {:.2}s, unstable {:.2}s, restart {:.2}s]",
            self.target,
            t(Timer::Stable),
            t(Timer::Unstable),
            t(Timer::Restart),
        )
    }
}
