use super::store::{FormulaStore, Status};


#[derive(Clone, Copy, Debug)]
pub struct PropagationSettings {
    pub pure_literals: bool,    // Assign variables that occur with one polarity only.
    pub unit_propagation: bool, // Force the sole literal of unit clauses.
}

impl Default for PropagationSettings {
    fn default() -> Self {
        PropagationSettings {
            pure_literals: true,
            unit_propagation: true,
        }
    }
}


pub struct Propagator {
    settings: PropagationSettings,
    pub propagations: u64,
    pub pure_literals: u64,
}

impl Propagator {
    pub fn new(settings: PropagationSettings) -> Propagator {
        Propagator {
            settings,
            propagations: 0,
            pure_literals: 0,
        }
    }

    // Alternates pure literal elimination and unit propagation until
    // neither of them assigns anything.
    pub fn propagate(&mut self, store: &mut FormulaStore) -> Status {
        loop {
            let assigned = store.assigns().number_of_assigns();

            if self.settings.pure_literals {
                match self.eliminate_pure_literals(store) {
                    Status::Undetermined => {}
                    res => return res,
                }
            }

            if self.settings.unit_propagation {
                match self.unit_propagate(store) {
                    Status::Undetermined => {}
                    res => return res,
                }
            }

            if store.assigns().number_of_assigns() == assigned {
                return Status::Undetermined;
            }
        }
    }

    // Simplification may create new unit clauses anywhere, so the scan restarts
    // from the first clause after every assignment.
    pub fn unit_propagate(&mut self, store: &mut FormulaStore) -> Status {
        while let Some(lit) = store.first_unit() {
            self.propagations += 1;
            trace!("unit {:?}", lit);
            store.assign(lit);
            match store.simplify_on_last_assignment() {
                Status::Undetermined => {}
                res => return res,
            }
        }
        store.status()
    }

    pub fn eliminate_pure_literals(&mut self, store: &mut FormulaStore) -> Status {
        while let Some(lit) = store.first_pure_literal() {
            self.pure_literals += 1;
            trace!("pure {:?}", lit);
            store.assign(lit);
            match store.simplify_on_last_assignment() {
                Status::Undetermined => {}
                res => return res,
            }
        }
        store.status()
    }
}
