use super::{LBool, Lit, Var, VarMap, VarVec};


// Partial interpretation together with the order in which it was built.
// The last trail entry is the literal the formula is simplified against.
#[derive(Clone, PartialEq, Debug)]
pub struct Assignment {
    assignment: VarVec<LBool>,
    trail: Vec<Lit>,
}

impl Assignment {
    pub fn new() -> Assignment {
        Assignment {
            assignment: VarVec::new(),
            trail: Vec::new(),
        }
    }


    #[inline]
    pub fn number_of_vars(&self) -> usize {
        self.assignment.len()
    }

    #[inline]
    pub fn number_of_assigns(&self) -> usize {
        self.trail.len()
    }

    pub fn new_var(&mut self) -> Var {
        self.assignment.push(LBool::Undef)
    }


    #[inline]
    pub fn assign_lit(&mut self, lit: Lit) {
        let ref mut value = self.assignment[lit.var()];
        assert!(value.is_undef(), "{:?} is already assigned", lit.var());
        *value = if lit.sign() { LBool::False } else { LBool::True };
        self.trail.push(lit);
    }

    // Unassigns everything past the first `len` trail entries.
    #[inline]
    pub fn rewind_to(&mut self, len: usize) {
        while self.trail.len() > len {
            if let Some(lit) = self.trail.pop() {
                self.assignment[lit.var()] = LBool::Undef;
            }
        }
    }


    #[inline]
    pub fn last(&self) -> Option<Lit> {
        self.trail.last().cloned()
    }

    #[inline]
    pub fn trail(&self) -> &[Lit] {
        &self.trail[..]
    }

    #[inline]
    pub fn of_var(&self, v: Var) -> LBool {
        self.assignment[v]
    }

    #[inline]
    pub fn of_lit(&self, lit: Lit) -> LBool {
        let value = self.assignment[lit.var()];
        if lit.sign() { !value } else { value }
    }

    #[inline]
    pub fn is_undef(&self, v: Var) -> bool {
        self.assignment[v].is_undef()
    }

    #[inline]
    pub fn vars(&self) -> impl Iterator<Item = Var> {
        self.assignment.keys()
    }

    // Variables left open by the search are irrelevant to satisfaction and get `false`.
    pub fn extract_model(&self) -> VarMap<bool> {
        let mut model = VarMap::new();
        for v in self.vars() {
            model.insert(&v, self.assignment[v] == LBool::True);
        }
        model
    }
}
