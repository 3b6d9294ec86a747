use crate::sat::formula::{assignment::Assignment, clause::*, util, Lit, Var, VarVec};


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Status {
    Sat,
    Conflict,
    Undetermined,
}


// Number of unsatisfied clauses a variable still occurs in, per polarity.
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub struct Occurs {
    pub pos: u32,
    pub neg: u32,
}

impl Occurs {
    #[inline]
    pub fn total(&self) -> u32 {
        self.pos + self.neg
    }

    // Sign of the only polarity left, if the variable is pure. A variable
    // without occurrences is irrelevant rather than pure.
    #[inline]
    pub fn pure_sign(&self) -> Option<bool> {
        match (self.pos, self.neg) {
            (0, 0) => None,
            (_, 0) => Some(false),
            (0, _) => Some(true),
            _ => None,
        }
    }

    #[inline]
    fn inc(&mut self, sign: bool) {
        if sign { self.neg += 1 } else { self.pos += 1 }
    }

    #[inline]
    fn dec(&mut self, sign: bool) {
        if sign { self.neg -= 1 } else { self.pos -= 1 }
    }
}


#[derive(Clone, PartialEq, Debug)]
enum Undo {
    Satisfied { clause: ClauseRef, lits: Vec<Lit> },
    Removed { clause: ClauseRef, pos: usize, lit: Lit },
}


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Snapshot {
    undo: usize,
    trail: usize,
    conflict: bool,
}


#[derive(PartialEq, Eq, Debug)]
pub enum AddClauseRes {
    Added(ClauseRef),
    Tautology(ClauseRef),
    Empty,
}


// The shrinking working formula: active clauses, occurrence index,
// per-variable counters and the assignment they are simplified against.
// Every destructive step is recorded in the undo log, so any earlier
// state can be brought back exactly by `restore`.
#[derive(Clone, PartialEq, Debug)]
pub struct FormulaStore {
    clauses: Vec<Clause>,
    occurs: VarVec<Vec<Occurrence>>,
    counts: VarVec<Occurs>,
    assigns: Assignment,
    unsatisfied: usize,
    conflict: bool,
    undo: Vec<Undo>,
}

impl FormulaStore {
    pub fn new() -> FormulaStore {
        FormulaStore {
            clauses: Vec::new(),
            occurs: VarVec::new(),
            counts: VarVec::new(),
            assigns: Assignment::new(),
            unsatisfied: 0,
            conflict: false,
            undo: Vec::new(),
        }
    }

    #[inline]
    pub fn number_of_vars(&self) -> usize {
        self.assigns.number_of_vars()
    }

    #[inline]
    pub fn number_of_clauses(&self) -> usize {
        self.clauses.len()
    }

    #[inline]
    pub fn number_of_unsatisfied(&self) -> usize {
        self.unsatisfied
    }

    #[inline]
    pub fn assigns(&self) -> &Assignment {
        &self.assigns
    }

    #[inline]
    pub fn counts(&self, v: Var) -> Occurs {
        self.counts[v]
    }

    #[inline]
    pub fn clause(&self, cr: ClauseRef) -> &Clause {
        &self.clauses[cr.index()]
    }

    pub fn new_var(&mut self) -> Var {
        let v = self.assigns.new_var();
        self.occurs.push(Vec::new());
        self.counts.push(Occurs::default());
        v
    }

    pub fn add_clause(&mut self, clause: &[Lit]) -> AddClauseRes {
        assert_eq!(self.assigns.number_of_assigns(), 0, "clauses can only be added before search");
        let cr = ClauseRef::from_index(self.clauses.len());
        match util::normalize(clause) {
            None => {
                self.clauses.push(Clause::tautology());
                AddClauseRes::Tautology(cr)
            }

            Some(ref ps) if ps.is_empty() => {
                self.clauses.push(Clause::new(Vec::new()));
                self.unsatisfied += 1;
                AddClauseRes::Empty
            }

            Some(ps) => {
                for &lit in ps.iter() {
                    self.occurs[lit.var()].push(Occurrence { clause: cr, sign: lit.sign() });
                    self.counts[lit.var()].inc(lit.sign());
                }
                self.clauses.push(Clause::new(ps));
                self.unsatisfied += 1;
                AddClauseRes::Added(cr)
            }
        }
    }


    pub fn assign(&mut self, lit: Lit) {
        self.assigns.assign_lit(lit);
    }

    // Applies the most recently assigned literal to the clauses it occurs
    // in: those containing it become satisfied, the others lose its
    // negation. Falsifying the sole literal of a clause is a contradiction.
    pub fn simplify_on_last_assignment(&mut self) -> Status {
        let lit = match self.assigns.last() {
            Some(lit) => lit,
            None => return self.status(),
        };

        let v = lit.var();
        for occ in self.occurs[v].iter() {
            let ref mut clause = self.clauses[occ.clause.index()];
            if clause.is_satisfied() {
                continue;
            }

            let occ_lit = occ.lit(v);
            if occ_lit == lit {
                let lits = clause.satisfy();
                for &l in lits.iter() {
                    self.counts[l.var()].dec(l.sign());
                }
                self.unsatisfied -= 1;
                self.undo.push(Undo::Satisfied { clause: occ.clause, lits });
            } else if let Some(pos) = clause.position(occ_lit) {
                if clause.len() == 1 {
                    self.conflict = true;
                    return Status::Conflict;
                }

                clause.remove_at(pos);
                self.counts[v].dec(occ.sign);
                self.undo.push(Undo::Removed { clause: occ.clause, pos, lit: occ_lit });
            }
        }

        self.status()
    }

    pub fn status(&self) -> Status {
        if self.conflict {
            Status::Conflict
        } else if self.unsatisfied == 0 {
            Status::Sat
        } else {
            Status::Undetermined
        }
    }


    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            undo: self.undo.len(),
            trail: self.assigns.number_of_assigns(),
            conflict: self.conflict,
        }
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        assert!(snapshot.undo <= self.undo.len(), "snapshot is newer than the store");
        while self.undo.len() > snapshot.undo {
            match self.undo.pop() {
                Some(Undo::Satisfied { clause, lits }) => {
                    for &l in lits.iter() {
                        self.counts[l.var()].inc(l.sign());
                    }
                    self.clauses[clause.index()].unsatisfy(lits);
                    self.unsatisfied += 1;
                }

                Some(Undo::Removed { clause, pos, lit }) => {
                    self.counts[lit.var()].inc(lit.sign());
                    self.clauses[clause.index()].insert_at(pos, lit);
                }

                None => break,
            }
        }

        self.assigns.rewind_to(snapshot.trail);
        self.conflict = snapshot.conflict;
    }


    // Leftmost unsatisfied clause with a single literal.
    pub fn first_unit(&self) -> Option<Lit> {
        self.clauses.iter().filter_map(Clause::unit).next()
    }

    // Lowest unassigned variable occurring with one polarity only.
    pub fn first_pure_literal(&self) -> Option<Lit> {
        for v in self.assigns.vars() {
            if self.assigns.is_undef(v) {
                if let Some(sign) = self.counts[v].pure_sign() {
                    return Some(v.sign_lit(sign));
                }
            }
        }
        None
    }

    pub fn remaining_literals(&self) -> usize {
        self.clauses
            .iter()
            .filter(|c| !c.is_satisfied())
            .map(|c| c.len())
            .sum()
    }
}


#[cfg(test)]
pub mod tests {
    use super::*;

    pub fn store_of(vars: usize, clauses: &[&[i32]]) -> FormulaStore {
        let mut store = FormulaStore::new();
        for _ in 0..vars {
            store.new_var();
        }
        for c in clauses {
            let lits: Vec<Lit> = c.iter().map(|&id| Lit::from_dimacs(id).unwrap()).collect();
            store.add_clause(&lits);
        }
        store
    }

    pub fn lit(id: i32) -> Lit {
        Lit::from_dimacs(id).unwrap()
    }

    fn var(id: u32) -> Var {
        Var::from_dimacs(id).unwrap()
    }

    // Recomputes the counters from scratch and compares them with the maintained ones.
    fn counters_consistent(store: &FormulaStore) -> bool {
        let mut fresh = VarVec::new();
        for _ in 0..store.number_of_vars() {
            fresh.push(Occurs::default());
        }
        for c in store.clauses.iter().filter(|c| !c.is_satisfied()) {
            for &l in c.lits() {
                fresh[l.var()].inc(l.sign());
            }
        }
        fresh == store.counts
    }

    #[test]
    fn load_builds_counters_and_occurrences() {
        let store = store_of(3, &[&[1, -2], &[-1, 2, 3], &[2, 2, 3]]);
        assert_eq!(store.number_of_clauses(), 3);
        assert_eq!(store.number_of_unsatisfied(), 3);
        assert_eq!(store.counts(var(1)), Occurs { pos: 1, neg: 1 });
        assert_eq!(store.counts(var(2)), Occurs { pos: 2, neg: 1 });
        assert_eq!(store.counts(var(3)), Occurs { pos: 2, neg: 0 });
        assert_eq!(store.clause(ClauseRef::from_index(2)).lits(), &[lit(2), lit(3)]);
        assert_eq!(store.occurs[var(2)].len(), 3);
        assert!(counters_consistent(&store));
    }

    #[test]
    fn tautology_is_satisfied_at_load() {
        let mut store = store_of(3, &[]);
        let res = store.add_clause(&[lit(1), lit(-1), lit(2)]);
        assert_eq!(res, AddClauseRes::Tautology(ClauseRef::from_index(0)));
        assert!(store.clause(ClauseRef::from_index(0)).is_satisfied());
        assert!(store.occurs[var(1)].is_empty());
        assert!(store.occurs[var(2)].is_empty());
        assert_eq!(store.counts(var(2)).total(), 0);
        assert_eq!(store.status(), Status::Sat);
    }

    #[test]
    fn empty_clause_keeps_formula_open() {
        let mut store = store_of(1, &[]);
        assert_eq!(store.add_clause(&[]), AddClauseRes::Empty);
        assert_eq!(store.status(), Status::Undetermined);
        assert_eq!(store.first_unit(), None);
    }

    #[test]
    fn simplify_satisfies_and_shrinks() {
        let mut store = store_of(3, &[&[1, 2], &[-1, 2, 3], &[-1, -3]]);
        store.assign(lit(1));
        assert_eq!(store.simplify_on_last_assignment(), Status::Undetermined);

        assert!(store.clause(ClauseRef::from_index(0)).is_satisfied());
        assert!(store.clause(ClauseRef::from_index(0)).is_empty());
        assert_eq!(store.clause(ClauseRef::from_index(1)).lits(), &[lit(2), lit(3)]);
        assert_eq!(store.clause(ClauseRef::from_index(2)).lits(), &[lit(-3)]);
        assert_eq!(store.counts(var(1)).total(), 0);
        assert_eq!(store.counts(var(2)), Occurs { pos: 1, neg: 0 });
        assert_eq!(store.number_of_unsatisfied(), 2);
        assert_eq!(store.first_unit(), Some(lit(-3)));
        assert!(counters_consistent(&store));
    }

    #[test]
    fn falsified_unit_is_a_contradiction() {
        let mut store = store_of(2, &[&[1, 2], &[-1]]);
        store.assign(lit(1));
        assert_eq!(store.simplify_on_last_assignment(), Status::Conflict);
        assert_eq!(store.status(), Status::Conflict);
    }

    #[test]
    fn last_satisfied_clause_gives_sat() {
        let mut store = store_of(2, &[&[1, 2], &[1, -2]]);
        store.assign(lit(1));
        assert_eq!(store.simplify_on_last_assignment(), Status::Sat);
    }

    #[test]
    fn simplify_without_assignment_only_checks() {
        let mut store = store_of(0, &[]);
        assert_eq!(store.simplify_on_last_assignment(), Status::Sat);

        let mut store = store_of(1, &[&[1]]);
        let before = store.clone();
        assert_eq!(store.simplify_on_last_assignment(), Status::Undetermined);
        assert_eq!(store, before);
    }

    #[test]
    fn simplify_is_idempotent() {
        let mut store = store_of(4, &[&[1, 2], &[-1, 3, 4], &[-1, -2], &[2, 3]]);
        store.assign(lit(1));
        store.simplify_on_last_assignment();
        let once = store.clone();
        store.simplify_on_last_assignment();
        assert_eq!(store, once);

        let mut store = store_of(2, &[&[1, 2], &[-1]]);
        store.assign(lit(1));
        store.simplify_on_last_assignment();
        let once = store.clone();
        assert_eq!(store.simplify_on_last_assignment(), Status::Conflict);
        assert_eq!(store, once);
    }

    #[test]
    fn remaining_literals_never_grow() {
        let mut store = store_of(5, &[&[1, 2, 3], &[-1, 4], &[-2, -4, 5], &[-3, -5], &[2, 5]]);
        let mut remaining = store.remaining_literals();
        for &id in &[1, -2, 4, 5] {
            store.assign(lit(id));
            let status = store.simplify_on_last_assignment();
            let now = store.remaining_literals();
            assert!(now <= remaining);
            remaining = now;
            if status != Status::Undetermined {
                break;
            }
        }
    }

    #[test]
    fn restore_right_after_snapshot_changes_nothing() {
        let mut store = store_of(3, &[&[1, 2], &[-2, 3]]);
        store.assign(lit(2));
        store.simplify_on_last_assignment();
        let before = store.clone();
        let snapshot = store.snapshot();
        store.restore(snapshot);
        assert_eq!(store, before);
    }

    #[test]
    fn restore_undoes_branch_exactly() {
        let mut store = store_of(4, &[&[1, 2, 3], &[-3, 2, -1], &[-2, 4], &[3, -4, 1]]);
        store.assign(lit(4));
        store.simplify_on_last_assignment();
        let before = store.clone();
        let snapshot = store.snapshot();

        store.assign(lit(-2));
        assert_eq!(store.simplify_on_last_assignment(), Status::Undetermined);
        store.assign(lit(3));
        store.simplify_on_last_assignment();
        assert_ne!(store, before);

        store.restore(snapshot);
        assert_eq!(store, before);
        assert_eq!(store.assigns().last(), Some(lit(4)));
        assert!(counters_consistent(&store));
    }

    #[test]
    fn restore_clears_contradiction() {
        let mut store = store_of(2, &[&[1, 2], &[-1, 2], &[-2]]);
        let before = store.clone();
        let snapshot = store.snapshot();
        store.assign(lit(2));
        assert_eq!(store.simplify_on_last_assignment(), Status::Conflict);

        store.restore(snapshot);
        assert_eq!(store, before);
        assert_eq!(store.status(), Status::Undetermined);
    }

    #[test]
    fn pure_literal_lookup_skips_irrelevant_vars() {
        let mut store = store_of(3, &[&[-2, 3], &[-2, -3]]);
        assert_eq!(store.first_pure_literal(), Some(lit(-2)));

        store.assign(lit(-2));
        assert_eq!(store.simplify_on_last_assignment(), Status::Sat);
        assert_eq!(store.counts(var(3)).total(), 0);
        assert_eq!(store.first_pure_literal(), None);
    }
}
