use self::dpll::budget::Budget;
use self::formula::{Lit, Var};

pub mod dimacs;
pub mod dpll;
pub mod formula;


#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Stats {
    pub solves: u64,
    pub decisions: u64,
    pub backtracks: u64,
    pub propagations: u64,
    pub pure_literals: u64,
    pub conflicts: u64,
    pub max_depth: u64,
}


#[derive(Debug)]
pub enum SolveRes {
    UnSAT(Stats),
    // One literal per variable, ordered by variable.
    SAT(Vec<Lit>, Stats),
    Interrupted(Stats),
}

impl SolveRes {
    pub fn stats(&self) -> &Stats {
        match self {
            SolveRes::UnSAT(stats) => stats,
            SolveRes::SAT(_, stats) => stats,
            SolveRes::Interrupted(stats) => stats,
        }
    }
}


pub trait Solver {
    fn n_vars(&self) -> usize;
    fn n_clauses(&self) -> usize;
    fn new_var(&mut self) -> Var;
    fn add_clause(&mut self, clause: &[Lit]) -> bool;
    fn solve_limited(self, budget: &Budget) -> SolveRes;
    fn stats(&self) -> Stats;

    fn solve(self) -> SolveRes
    where
        Self: Sized,
    {
        self.solve_limited(&Budget::new())
    }
}
