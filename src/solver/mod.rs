/// Module `solver` ties the assignment stack, the restarter and the state together.
/// The conflict driver
mod search;

pub use self::search::SearchIF;

use {
    crate::{
        assign::{self, AssignStack, BacktrackIF},
        restart::{self, RestartIF, Restarter},
        state::{State, StateIF},
        types::*,
    },
    log::debug,
    std::fmt,
};

/// define sub-modules' responsibilities
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolverEvent {
    /// conflict by unit propagation.
    Conflict,
    /// increment the number of vars.
    NewVar,
    /// re-initialization for incremental solving.
    Reinitialize,
}

/// The solver object consisting of 3 sub modules.
/// ```
/// use cdcl_restart::{assign::AssignIF, solver::*, types::*};
///
/// let mut s = Solver::instantiate(&Config::default(), &CNFDescription::from(4));
/// assert!(s.decide());
/// assert!(s.decide());
/// assert_eq!(s.asg.decision_level(), 2);
/// // blocked by the restart limit
/// assert!(!s.handle_conflict(3));
/// assert_eq!(s.asg.num_conflict, 1);
/// ```
#[derive(Clone, Debug)]
pub struct Solver {
    /// assignment management
    pub asg: AssignStack,
    /// restart management
    pub rst: Restarter,
    /// misc data holder
    pub state: State,
}

impl Default for Solver {
    fn default() -> Solver {
        Solver::instantiate(&Config::default(), &CNFDescription::default())
    }
}

impl Instantiate for Solver {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> Solver {
        let rst = Restarter::instantiate(config, cnf);
        let mut state = State::instantiate(config, cnf);
        state.start_timer(rst.phase_timer());
        Solver {
            asg: AssignStack::instantiate(config, cnf),
            rst,
            state,
        }
    }
    fn handle(&mut self, e: SolverEvent) {
        match e {
            SolverEvent::Conflict | SolverEvent::NewVar => self.asg.handle(e),
            SolverEvent::Reinitialize => {
                debug!("{self}");
                self.asg.cancel_until(0);
                self.rst.init_search_limits(&self.asg, &mut self.state);
            }
        }
    }
}

/// dump the statistics of the sub modules, one `c key value` line each.
impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "c {}", self.state)?;
        for key in assign::stats::USIZES {
            let name = format!("{key:?}");
            writeln!(f, "c {:<20}{:>12}", name, self.asg.derefer(key))?;
        }
        for key in restart::stats::USIZES {
            let name = format!("{key:?}");
            writeln!(f, "c {:<20}{:>12}", name, self.rst.derefer(key))?;
        }
        for key in restart::stats::EMAS {
            let name = format!("{key:?}");
            let ema = self.rst.refer(key);
            writeln!(
                f,
                "c {:<20}{:>12.4}{:>12.4}",
                name,
                ema.get_fast(),
                ema.get_slow()
            )?;
        }
        Ok(())
    }
}
