use std::cmp;
use crate::sat;
use crate::sat::formula::{Lit, Var};
use super::budget::Budget;
use super::decision_heuristic::{DecisionHeuristic, DecisionHeuristicSettings};
use super::propagate::{PropagationSettings, Propagator};
use super::store::{AddClauseRes, FormulaStore, Status};


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SearchRes {
    UnSAT,
    SAT,
    Interrupted,
}


#[derive(Default)]
struct Stats {
    solves: u64,
    decisions: u64,
    backtracks: u64,
    conflicts: u64,
    max_depth: u64,
}


// Next decision count at which a progress line is logged.
struct ProgressGuard {
    next: u64,
}

impl ProgressGuard {
    fn new() -> Self {
        ProgressGuard { next: 100 }
    }

    fn bump(&mut self, decisions: u64) -> bool {
        if decisions >= self.next {
            self.next *= 2;
            true
        } else {
            false
        }
    }
}


pub struct Searcher {
    stats: Stats,
    store: FormulaStore,
    prop: Propagator,
    heur: DecisionHeuristic,
    progress: ProgressGuard,
}

impl Searcher {
    pub fn new(heur_set: DecisionHeuristicSettings, prop_set: PropagationSettings) -> Self {
        Searcher {
            stats: Stats::default(),
            store: FormulaStore::new(),
            prop: Propagator::new(prop_set),
            heur: DecisionHeuristic::new(heur_set),
            progress: ProgressGuard::new(),
        }
    }

    pub fn number_of_vars(&self) -> usize {
        self.store.number_of_vars()
    }

    pub fn number_of_clauses(&self) -> usize {
        self.store.number_of_clauses()
    }

    pub fn new_var(&mut self) -> Var {
        self.store.new_var()
    }

    pub fn add_clause(&mut self, clause: &[Lit]) -> AddClauseRes {
        self.store.add_clause(clause)
    }

    pub fn search(&mut self, budget: &Budget) -> SearchRes {
        info!("============================[ Search Statistics ]==============================");
        info!("| Decisions |  Backtracks |   Conflicts | Propagations |  Pure lits |  Depth  |");
        info!("===============================================================================");

        self.stats.solves += 1;
        let res = self.search_rec(budget, 0);

        info!("===============================================================================");
        res
    }

    // One node of the search tree: simplify against the literal assigned by
    // the caller, propagate, then split on the most active variable.
    fn search_rec(&mut self, budget: &Budget, depth: u64) -> SearchRes {
        self.stats.max_depth = cmp::max(self.stats.max_depth, depth);

        match self.store.simplify_on_last_assignment() {
            Status::Sat => return SearchRes::SAT,
            Status::Conflict => return self.conflict(depth),
            Status::Undetermined => {}
        }

        match self.prop.propagate(&mut self.store) {
            Status::Sat => return SearchRes::SAT,
            Status::Conflict => return self.conflict(depth),
            Status::Undetermined => {}
        }

        let v = match self.heur.select_variable(&self.store) {
            Some(v) => v,
            None => return SearchRes::SAT,
        };

        // Only branching is limited; a formula settled by propagation is always answered.
        if !budget.within(self.stats.decisions, self.prop.propagations) {
            return SearchRes::Interrupted;
        }

        let snapshot = self.store.snapshot();
        let lit = self.heur.first_lit(v);
        self.decide(lit, depth);
        match self.search_rec(budget, depth + 1) {
            SearchRes::UnSAT => {}
            res => return res,
        }

        self.store.restore(snapshot);
        self.stats.backtracks += 1;
        trace!("backtrack {:?} at depth {}", !lit, depth);
        self.store.assign(!lit);
        self.search_rec(budget, depth + 1)
    }

    fn decide(&mut self, lit: Lit, depth: u64) {
        self.stats.decisions += 1;
        trace!("decide {:?} at depth {}", lit, depth);
        self.store.assign(lit);

        if self.progress.bump(self.stats.decisions) {
            info!(
                "| {:9} | {:11} | {:11} | {:12} | {:10} | {:7} |",
                self.stats.decisions,
                self.stats.backtracks,
                self.stats.conflicts,
                self.prop.propagations,
                self.prop.pure_literals,
                depth
            );
        }
    }

    fn conflict(&mut self, depth: u64) -> SearchRes {
        self.stats.conflicts += 1;
        debug!("contradiction at depth {}", depth);
        SearchRes::UnSAT
    }

    // Complete assignment after a successful search; open variables are false.
    pub fn model(&self) -> Vec<Lit> {
        self.store
            .assigns()
            .extract_model()
            .iter()
            .map(|(v, &value)| v.sign_lit(!value))
            .collect()
    }

    pub fn stats(&self) -> sat::Stats {
        sat::Stats {
            solves: self.stats.solves,
            decisions: self.stats.decisions,
            backtracks: self.stats.backtracks,
            propagations: self.prop.propagations,
            pure_literals: self.prop.pure_literals,
            conflicts: self.stats.conflicts,
            max_depth: self.stats.max_depth,
        }
    }
}
