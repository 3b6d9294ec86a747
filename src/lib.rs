extern crate flate2;
#[macro_use]
extern crate log;
extern crate time;
extern crate vec_map;

use std::{fs, io, path};
use crate::sat::dpll::{self, budget::Budget, DpllSolver};
use crate::sat::{dimacs, SolveRes, Solver, Stats};

pub mod sat;
pub mod util;


pub struct MainOptions {
    pub strict: bool,
    pub verify: bool,
    pub in_path: path::PathBuf,
    pub out_path: Option<path::PathBuf>,
}


#[derive(Clone, Copy, Default, Debug)]
pub struct Limits {
    pub decisions: Option<u64>,
    pub propagations: Option<u64>,
    pub seconds: Option<f64>,
}


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Answer {
    Sat,
    UnSat,
    Indeterminate,
}

impl Answer {
    // Exit codes follow the minisat convention.
    pub fn exit_code(&self) -> i32 {
        match *self {
            Answer::Sat => 10,
            Answer::UnSat => 20,
            Answer::Indeterminate => 0,
        }
    }
}


pub fn solve(main_opts: MainOptions, settings: dpll::Settings, limits: Limits) -> io::Result<Answer> {
    let solver = DpllSolver::new(settings);
    solve_with(solver, main_opts, limits)
}


pub fn solve_with<S: Solver>(mut solver: S, options: MainOptions, limits: Limits) -> io::Result<Answer> {
    let initial_time = time::precise_time_s();

    info!("============================[ Problem Statistics ]=============================");
    info!("|                                                                             |");

    let header = dimacs::parse_file(&options.in_path, &mut solver, options.strict)?;

    info!("|  Number of variables:  {:12}                                         |", solver.n_vars());
    info!("|  Number of clauses:    {:12}                                         |", solver.n_clauses());
    if header.vars != solver.n_vars() || header.clauses != solver.n_clauses() {
        info!("|  Header declared:      {:12} vars {:12} clauses              |", header.vars, header.clauses);
    }

    let parsed_time = time::precise_time_s();
    info!("|  Parse time:           {:12.2} s                                       |", parsed_time - initial_time);
    info!("|                                                                             |");

    let mut budget = Budget::new();
    if let Some(decisions) = limits.decisions {
        budget.set_decision_budget(decisions);
    }
    if let Some(propagations) = limits.propagations {
        budget.set_propagation_budget(propagations);
    }
    if let Some(seconds) = limits.seconds {
        budget.set_time_limit(seconds);
    }

    let result = solver.solve_limited(&budget);
    print_stats(result.stats(), time::precise_time_s() - parsed_time);

    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        dimacs::write_result(&mut out, &result)?;
    }

    if let Some(ref path) = options.out_path {
        let mut file = fs::File::create(path)?;
        dimacs::write_result(&mut file, &result)?;
    }

    match result {
        SolveRes::UnSAT(_) => Ok(Answer::UnSat),
        SolveRes::Interrupted(_) => Ok(Answer::Indeterminate),
        SolveRes::SAT(ref model, _) => {
            if options.verify && !dimacs::validate_model_file(&options.in_path, &model[..])? {
                return Err(io::Error::new(io::ErrorKind::Other, "SELF-CHECK FAILED!"));
            }
            Ok(Answer::Sat)
        }
    }
}


pub fn print_stats(stats: &Stats, search_time: f64) {
    let per_sec = |n: u64| if search_time > 0.0 { (n as f64) / search_time } else { 0.0 };

    info!("decisions             : {:<12}   ({:.0} /sec)", stats.decisions, per_sec(stats.decisions));
    info!("backtracks            : {:<12}", stats.backtracks);
    info!("conflicts             : {:<12}   ({:.0} /sec)", stats.conflicts, per_sec(stats.conflicts));
    info!("propagations          : {:<12}   ({:.0} /sec)", stats.propagations, per_sec(stats.propagations));
    info!("pure literals         : {:<12}", stats.pure_literals);
    info!("max depth             : {:<12}", stats.max_depth);
    if let Some(mem_kb) = util::mem_used_peak() {
        info!("Memory used           : {:.2} MB", (mem_kb as f64) / 1024.0);
    }
    info!("Search time           : {:.3} s", search_time);
    info!("");
}
