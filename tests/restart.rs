use cdcl_restart::{
    assign::{AssignIF, AssignStack, BacktrackIF, VarManipulateIF, VarSelectIF},
    restart::{stats::Tusize, Reluctant, RestartIF, Restarter},
    solver::{SearchIF, Solver, SolverEvent},
    state::{ProgressTag, State, StateIF},
    types::*,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn build(config: &Config, n: usize) -> (AssignStack, Restarter, State) {
    let cnf = CNFDescription::from(n);
    (
        AssignStack::instantiate(config, &cnf),
        Restarter::instantiate(config, &cnf),
        State::instantiate(config, &cnf),
    )
}

fn decide_up_to(asg: &mut AssignStack, level: DecisionLevel) {
    while asg.decision_level() < level {
        let vi = asg.next_decision_var(false).expect("no var left");
        asg.assign_by_decision(Lit::from((vi, true)));
    }
}

#[test]
fn restart_by_glue_margin_after_the_limit() {
    init_logger();
    let config = Config {
        use_stabilize: false,
        rst_step: 5,
        rst_margin: 0.0,
        ..Config::default()
    };
    let (mut asg, mut rst, mut state) = build(&config, 10);
    decide_up_to(&mut asg, 6);
    {
        let glue = rst.glue_mut().current_mut();
        *glue = Ema2::new(33).with_slow(100_000).with_value(4.0);
        glue.reset_to(10.0);
    }
    assert_eq!(rst.glue().get_fast(), 10.0);
    assert_eq!(rst.glue().get_slow(), 4.0);
    asg.num_conflict = 4;
    assert!(!rst.restarting(&asg, &mut state));
    asg.num_conflict = 5;
    assert!(!rst.restarting(&asg, &mut state));
    asg.num_conflict = 6;
    assert!(rst.restarting(&asg, &mut state));
    assert!(!rst.is_stable());
}

#[test]
fn stable_only_mode_follows_reluctant_doubling() {
    init_logger();
    let config = Config {
        stb_only: true,
        rlc_period: 2,
        rlc_limit: 0,
        quiet_mode: true,
        ..Config::default()
    };
    let (mut asg, mut rst, mut state) = build(&config, 10);
    decide_up_to(&mut asg, 4);
    let mut reference = Reluctant::new(2, 0);
    asg.add_ticks(1_000_000);
    for conflict in 1..=64 {
        asg.handle(SolverEvent::Conflict);
        asg.add_ticks(10_000);
        // glues which would force a restart in unstable mode
        let glue = if conflict % 3 == 0 { 90 } else { 2 };
        rst.update_glue(glue);
        reference.tick();
        assert_eq!(rst.restarting(&asg, &mut state), reference.fire());
        assert!(rst.is_stable());
    }
    assert_eq!(state.num_reports(ProgressTag::StableEnd), 0);
    assert_eq!(state.num_reports(ProgressTag::UnstableBegin), 0);
    assert_eq!(rst.derefer(Tusize::NumStabPhase), 0);
}

#[test]
fn disabled_reuse_backtracks_to_the_root() {
    init_logger();
    let config = Config {
        rst_reuse_trail: false,
        quiet_mode: true,
        ..Config::default()
    };
    let (mut asg, mut rst, mut state) = build(&config, 8);
    decide_up_to(&mut asg, 4);
    assert_eq!(rst.reuse_trail(&asg), 0);
    rst.restart(&mut asg, &mut state);
    assert_eq!(asg.decision_level(), 0);
    assert_eq!(asg.stack_len(), 0);
    assert_eq!(rst.derefer(Tusize::NumReuse), 0);
    assert_eq!(state.num_reports(ProgressTag::Restart), 1);
}

#[test]
fn reuse_keeps_levels_outranking_the_next_decision() {
    init_logger();
    let config = Config {
        quiet_mode: true,
        ..Config::default()
    };
    let (mut asg, mut rst, mut state) = build(&config, 6);
    // bump timestamps: 6 > 5 > 4 > 1 > 3 > 2
    for vi in [2, 3, 1, 4, 5, 6] {
        asg.bump_var(vi);
    }
    asg.assign_by_decision(Lit::from(6i32));
    asg.assign_by_decision(Lit::from(-5i32));
    asg.assign_by_decision(Lit::from(3i32));
    assert_eq!(asg.next_decision_var(false), Some(4));
    assert_eq!(Restarter::trivial_decisions(&asg), 0);
    let reuse = rst.derefer(Tusize::NumReuse);
    let reused = rst.derefer(Tusize::NumReusedLevel);
    assert_eq!(rst.reuse_trail(&asg), 2);
    assert_eq!(rst.derefer(Tusize::NumReuse), reuse + 1);
    assert_eq!(rst.derefer(Tusize::NumReusedLevel), reused + 2);
    rst.restart(&mut asg, &mut state);
    assert_eq!(asg.decision_level(), 2);
    assert_eq!(asg.decision_at(2), Some(Lit::from(-5i32)));
    assert_eq!(asg.assigned(Lit::from(3i32)), None);
}

#[test]
fn reuse_never_crosses_assumptions() {
    init_logger();
    let config = Config {
        quiet_mode: true,
        ..Config::default()
    };
    let (mut asg, mut rst, mut state) = build(&config, 6);
    asg.add_assumption(Lit::from(1i32));
    asg.add_assumption(Lit::from(-2i32));
    assert!(asg.assign_by_assumption());
    assert!(asg.assign_by_assumption());
    // 6 outranks 3; nothing above the assumptions survives.
    asg.assign_by_decision(Lit::from(3i32));
    asg.assign_by_decision(Lit::from(4i32));
    rst.restart(&mut asg, &mut state);
    assert_eq!(asg.decision_level(), 2);
    assert_eq!(asg.decision_at(1), Some(Lit::from(1i32)));
}

#[test]
fn restart_limit_moves_after_each_restart() {
    init_logger();
    let config = Config {
        use_stabilize: false,
        rst_reuse_trail: false,
        quiet_mode: true,
        ..Config::default()
    };
    let (mut asg, mut rst, mut state) = build(&config, 10);
    for round in 1..=3 {
        decide_up_to(&mut asg, 5);
        asg.num_conflict = 100 * round;
        rst.restart(&mut asg, &mut state);
        assert_eq!(rst.derefer(Tusize::RestartLimit), 100 * round + 2);
        assert_eq!(asg.decision_level(), 0);
    }
    assert_eq!(rst.derefer(Tusize::NumRestart), 3);
    assert_eq!(rst.derefer(Tusize::NumRestartLevel), 15);
    assert_eq!(rst.derefer(Tusize::NumRestartStable), 0);
}

#[test]
fn restarts_in_stable_only_mode_count_as_stable() {
    init_logger();
    let config = Config {
        stb_only: true,
        quiet_mode: true,
        ..Config::default()
    };
    let (mut asg, mut rst, mut state) = build(&config, 10);
    decide_up_to(&mut asg, 4);
    assert!(rst.is_stable());
    rst.restart(&mut asg, &mut state);
    assert!(rst.is_stable());
    assert_eq!(rst.derefer(Tusize::NumRestart), 1);
    assert_eq!(rst.derefer(Tusize::NumRestartStable), 1);
    assert_eq!(rst.derefer(Tusize::NumStabPhase), 0);
}

#[test]
fn restarts_count_as_stable_only_inside_a_stable_phase() {
    init_logger();
    let config = Config {
        stb_init: 10,
        quiet_mode: true,
        ..Config::default()
    };
    let (mut asg, mut rst, mut state) = build(&config, 10);
    decide_up_to(&mut asg, 4);
    assert!(!rst.is_stable());
    asg.num_conflict = 11;
    asg.num_tick = 400;
    assert!(rst.stabilizing(&asg, &mut state));
    assert_eq!(rst.derefer(Tusize::NumStabPhase), 1);
    rst.restart(&mut asg, &mut state);
    assert_eq!(rst.derefer(Tusize::NumRestart), 1);
    assert_eq!(rst.derefer(Tusize::NumRestartStable), 1);
    // the interval of 400 ticks runs out; back to unstable mode
    decide_up_to(&mut asg, 4);
    asg.num_conflict = 20;
    asg.num_tick = 900;
    assert!(!rst.stabilizing(&asg, &mut state));
    rst.restart(&mut asg, &mut state);
    assert_eq!(rst.derefer(Tusize::NumRestart), 2);
    assert_eq!(rst.derefer(Tusize::NumRestartStable), 1);
}

/// drive a solver by a fixed stream of conflicts and check the schedule
/// invariants at every step.
#[test]
fn long_run_keeps_schedule_invariants() {
    init_logger();
    let config = Config {
        stb_init: 50,
        rlc_period: 4,
        quiet_mode: true,
        ..Config::default()
    };
    let mut s = Solver::instantiate(&config, &CNFDescription::from(40));
    s.asg.add_assumption(Lit::from(7i32));
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        seed
    };
    let mut last_stable = s.rst.is_stable();
    let mut flips = 0;
    for _ in 0..5000 {
        let depth = 3 + (next() % 12) as DecisionLevel;
        while s.asg.decision_level() < depth && s.decide() {}
        let vi = 1 + (next() % 40) as VarId;
        s.asg.bump_var(vi);
        s.asg.bump_score(vi, (next() % 100) as f64);
        s.asg.add_ticks((next() % 300) as usize);
        let glue = 1 + (next() % 20) as usize;
        let level = s.asg.decision_level();
        if s.handle_conflict(glue) {
            assert!(s.asg.decision_level() <= level);
            assert!(1 <= s.asg.decision_level());
            assert_eq!(
                s.rst.derefer(Tusize::RestartLimit),
                s.asg.num_conflict + config.rst_step
            );
        }
        if s.rst.is_stable() != last_stable {
            flips += 1;
            last_stable = s.rst.is_stable();
            assert!(s.asg.num_tick < s.rst.derefer(Tusize::StabilizeLimit));
        }
        // emulate backjumping after the conflict
        let target = s.asg.decision_level().saturating_sub(2).max(1);
        s.asg.cancel_until(target);
    }
    assert!(0 < flips);
    assert_eq!(
        s.state.num_reports(ProgressTag::StableBegin),
        s.rst.derefer(Tusize::NumStabPhase)
    );
    let begins = s.state.num_reports(ProgressTag::StableBegin)
        + s.state.num_reports(ProgressTag::UnstableBegin);
    let ends = s.state.num_reports(ProgressTag::StableEnd)
        + s.state.num_reports(ProgressTag::UnstableEnd);
    assert_eq!(begins, ends);
    assert_eq!(begins, flips);
    assert_eq!(
        s.state.num_reports(ProgressTag::Restart),
        s.rst.derefer(Tusize::NumRestart)
    );
    assert!(0 < s.rst.derefer(Tusize::NumRestart));
}

#[test]
fn stabilizing_settles_after_one_call() {
    init_logger();
    let config = Config {
        stb_init: 10,
        quiet_mode: true,
        ..Config::default()
    };
    let (mut asg, mut rst, mut state) = build(&config, 4);
    for (conflicts, ticks) in [(11, 0), (11, 400), (30, 10_000), (30, 10_000)] {
        asg.num_conflict = conflicts;
        asg.num_tick = ticks;
        let first = rst.stabilizing(&asg, &mut state);
        let phases = rst.derefer(Tusize::NumStabPhase);
        let reports = state.num_reports(ProgressTag::StableBegin)
            + state.num_reports(ProgressTag::UnstableBegin);
        for _ in 0..3 {
            assert_eq!(rst.stabilizing(&asg, &mut state), first);
        }
        assert_eq!(rst.derefer(Tusize::NumStabPhase), phases);
        assert_eq!(
            state.num_reports(ProgressTag::StableBegin)
                + state.num_reports(ProgressTag::UnstableBegin),
            reports
        );
        assert!(asg.num_tick < rst.derefer(Tusize::StabilizeLimit));
    }
}
