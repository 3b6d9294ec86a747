use crate::sat::{SolveRes, Solver, Stats};
use crate::sat::formula::{Lit, Var};
pub use self::decision_heuristic::DecisionHeuristicSettings;
pub use self::propagate::PropagationSettings;
use self::budget::Budget;
use self::search::{SearchRes, Searcher};
use self::store::AddClauseRes;

pub mod budget;
mod decision_heuristic;
mod propagate;
mod search;
mod store;


#[derive(Clone, Copy, Default, Debug)]
pub struct Settings {
    pub heur: DecisionHeuristicSettings,
    pub prop: PropagationSettings,
}


pub struct DpllSolver {
    ok: bool, // If FALSE, an empty clause was added and the formula is unsatisfiable.
    search: Searcher,
}

impl Solver for DpllSolver {
    fn n_vars(&self) -> usize {
        self.search.number_of_vars()
    }

    fn n_clauses(&self) -> usize {
        self.search.number_of_clauses()
    }

    fn new_var(&mut self) -> Var {
        self.search.new_var()
    }

    fn add_clause(&mut self, clause: &[Lit]) -> bool {
        if let AddClauseRes::Empty = self.search.add_clause(clause) {
            self.ok = false;
        }
        self.ok
    }

    fn solve_limited(mut self, budget: &Budget) -> SolveRes {
        if !self.ok {
            return SolveRes::UnSAT(self.search.stats());
        }

        match self.search.search(budget) {
            SearchRes::UnSAT => SolveRes::UnSAT(self.search.stats()),
            SearchRes::SAT => SolveRes::SAT(self.search.model(), self.search.stats()),
            SearchRes::Interrupted => SolveRes::Interrupted(self.search.stats()),
        }
    }

    fn stats(&self) -> Stats {
        self.search.stats()
    }
}

impl DpllSolver {
    pub fn new(settings: Settings) -> Self {
        DpllSolver {
            ok: true,
            search: Searcher::new(settings.heur, settings.prop),
        }
    }
}
