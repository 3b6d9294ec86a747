use std::{fmt, ops};
pub use self::index_map::*;

pub mod assignment;
pub mod clause;
mod index_map;
pub mod util;


#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Var(u32);

impl Var {
    #[inline]
    pub fn sign_lit(&self, sign: bool) -> Lit {
        Lit((self.0 << 1) | (sign as u32))
    }

    #[inline]
    pub fn pos_lit(&self) -> Lit {
        Lit(self.0 << 1)
    }

    #[inline]
    pub fn neg_lit(&self) -> Lit {
        Lit((self.0 << 1) | 1)
    }

    // DIMACS numbering starts from 1.
    #[inline]
    pub fn from_dimacs(id: u32) -> Option<Var> {
        if id == 0 || id > 0x7FFFFFFF {
            None
        } else {
            Some(Var(id - 1))
        }
    }

    #[inline]
    pub fn to_dimacs(&self) -> i32 {
        (self.0 + 1) as i32
    }


    #[inline]
    fn index(&self) -> usize {
        self.0 as usize
    }

    #[inline]
    fn from_index(index: usize) -> Var {
        if index < 0x7FFFFFFF {
            Var(index as u32)
        } else {
            panic!("Var index {} is out of bound", index)
        }
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "x{}", self.0 + 1)
    }
}


#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Lit(u32);

impl Lit {
    // Literal 0 is the clause terminator and never denotes a literal.
    #[inline]
    pub fn from_dimacs(id: i32) -> Option<Lit> {
        if id == i32::min_value() {
            return None;
        }
        Var::from_dimacs(id.abs() as u32).map(|v| v.sign_lit(id < 0))
    }

    #[inline]
    pub fn to_dimacs(&self) -> i32 {
        let id = self.var().to_dimacs();
        if self.sign() { -id } else { id }
    }

    #[inline]
    pub fn sign(&self) -> bool {
        (self.0 & 1) != 0
    }

    #[inline]
    pub fn var(&self) -> Var {
        Var(self.0 >> 1)
    }
}

impl ops::Not for Lit {
    type Output = Lit;

    #[inline]
    fn not(self) -> Lit {
        Lit(self.0 ^ 1)
    }
}

impl fmt::Debug for Lit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.sign() {
            write!(f, "¬")?;
        }
        write!(f, "{:?}", self.var())
    }
}


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum LBool {
    Undef,
    False,
    True,
}

impl LBool {
    #[inline]
    pub fn is_undef(&self) -> bool {
        *self == LBool::Undef
    }
}

impl ops::Not for LBool {
    type Output = LBool;

    #[inline]
    fn not(self) -> LBool {
        match self {
            LBool::Undef => LBool::Undef,
            LBool::False => LBool::True,
            LBool::True => LBool::False,
        }
    }
}
