use std::{fmt, mem};
use super::{Lit, Var};


#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Debug)]
pub struct ClauseRef(u32);

impl ClauseRef {
    #[inline]
    pub fn from_index(index: usize) -> ClauseRef {
        ClauseRef(index as u32)
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}


// A clause of the working formula. Literals are dropped from it as they
// become false; once some literal becomes true the clause is satisfied and
// its literal list is released.
#[derive(Clone, PartialEq, Eq)]
pub struct Clause {
    lits: Vec<Lit>,
    satisfied: bool,
}

impl Clause {
    pub fn new(lits: Vec<Lit>) -> Clause {
        Clause {
            lits,
            satisfied: false,
        }
    }

    // Tautologies are satisfied under every assignment and never enter the working formula.
    pub fn tautology() -> Clause {
        Clause {
            lits: Vec::new(),
            satisfied: true,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    #[inline]
    pub fn is_satisfied(&self) -> bool {
        self.satisfied
    }

    #[inline]
    pub fn lits(&self) -> &[Lit] {
        &self.lits[..]
    }

    #[inline]
    pub fn unit(&self) -> Option<Lit> {
        match &self.lits[..] {
            [lit] if !self.satisfied => Some(*lit),
            _ => None,
        }
    }

    #[inline]
    pub fn position(&self, lit: Lit) -> Option<usize> {
        self.lits.iter().position(|&l| l == lit)
    }

    // Marks the clause satisfied and hands its remaining literals to the caller.
    #[inline]
    pub fn satisfy(&mut self) -> Vec<Lit> {
        self.satisfied = true;
        mem::replace(&mut self.lits, Vec::new())
    }

    #[inline]
    pub fn unsatisfy(&mut self, lits: Vec<Lit>) {
        assert!(self.satisfied && self.lits.is_empty());
        self.satisfied = false;
        self.lits = lits;
    }

    #[inline]
    pub fn remove_at(&mut self, pos: usize) -> Lit {
        self.lits.remove(pos)
    }

    #[inline]
    pub fn insert_at(&mut self, pos: usize, lit: Lit) {
        self.lits.insert(pos, lit);
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.satisfied {
            write!(f, "⊤")
        } else {
            f.debug_set().entries(self.lits.iter()).finish()
        }
    }
}


// Occurrence of a variable in a clause, tagged with the polarity it occurs with.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct Occurrence {
    pub clause: ClauseRef,
    pub sign: bool,
}

impl Occurrence {
    #[inline]
    pub fn lit(&self, v: Var) -> Lit {
        v.sign_lit(self.sign)
    }
}
