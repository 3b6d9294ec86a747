use super::{Lit, VarMap};


// Sorts and deduplicates literals. Returns None if the clause contains
// some variable together with its negation.
pub fn normalize(clause: &[Lit]) -> Option<Vec<Lit>> {
    let mut ps = clause.to_vec();
    ps.sort();
    ps.dedup();

    // `x` and `¬x` are adjacent after sorting.
    let mut prev = None;
    for &lit in ps.iter() {
        if prev == Some(!lit) {
            return None;
        }
        prev = Some(lit);
    }

    Some(ps)
}


pub fn satisfied_with_model(clause: &[Lit], model: &VarMap<bool>) -> bool {
    for &lit in clause {
        match model.get(&lit.var()) {
            Some(value) if *value != lit.sign() => return true,
            _ => {}
        }
    }
    false
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::formula::Var;

    fn lits(ids: &[i32]) -> Vec<Lit> {
        ids.iter().map(|&id| Lit::from_dimacs(id).unwrap()).collect()
    }

    #[test]
    fn normalize_drops_duplicates() {
        let ps = normalize(&lits(&[2, -1, 2, -1])).unwrap();
        assert_eq!(ps, lits(&[-1, 2]));
    }

    #[test]
    fn normalize_detects_tautology() {
        assert_eq!(normalize(&lits(&[1, -1, 2])), None);
        assert_eq!(normalize(&lits(&[3, 1, -3])), None);
    }

    #[test]
    fn satisfied_by_one_true_literal() {
        let mut model = VarMap::new();
        model.insert(&Var::from_dimacs(1).unwrap(), false);
        model.insert(&Var::from_dimacs(2).unwrap(), true);

        assert!(satisfied_with_model(&lits(&[-1, -2]), &model));
        assert!(satisfied_with_model(&lits(&[1, 2]), &model));
        assert!(!satisfied_with_model(&lits(&[1, -2]), &model));
        assert!(!satisfied_with_model(&lits(&[3]), &model));
    }
}
