use crate::sat::formula::{Lit, Var};
use super::store::{FormulaStore, Occurs};


#[derive(Clone, Copy, Debug)]
pub struct DecisionHeuristicSettings {
    pub product_weight: u64, // Weight of 'pos * neg' in the activity of a variable.
    pub first_phase: bool,   // Polarity tried first on a branch.
}

impl Default for DecisionHeuristicSettings {
    fn default() -> Self {
        DecisionHeuristicSettings {
            product_weight: 1024,
            first_phase: true,
        }
    }
}


pub struct DecisionHeuristic {
    settings: DecisionHeuristicSettings,
}

impl DecisionHeuristic {
    pub fn new(settings: DecisionHeuristicSettings) -> DecisionHeuristic {
        DecisionHeuristic { settings }
    }

    // Variables occurring often in both polarities shrink the formula most
    // on either branch; the plain sum breaks ties towards frequent ones.
    // Saturates at `u64::max_value()` for huge weights.
    #[inline]
    pub fn activity(&self, occ: Occurs) -> u64 {
        let (pos, neg) = (occ.pos as u64, occ.neg as u64);
        self.settings
            .product_weight
            .saturating_mul(pos * neg)
            .saturating_add(pos + neg)
    }

    // Unassigned variable with the highest activity, the lowest one on ties.
    // None means no open variable occurs in the formula any more.
    pub fn select_variable(&self, store: &FormulaStore) -> Option<Var> {
        let mut best = None;
        let mut best_activity = 0;
        for v in store.assigns().vars() {
            if !store.assigns().is_undef(v) {
                continue;
            }

            let activity = self.activity(store.counts(v));
            if activity > best_activity {
                best_activity = activity;
                best = Some(v);
            }
        }
        best
    }

    #[inline]
    pub fn first_lit(&self, v: Var) -> Lit {
        v.sign_lit(!self.settings.first_phase)
    }
}
