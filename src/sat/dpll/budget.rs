use time;


// Resource constraints, consulted before every branching decision.
pub struct Budget {
    decision_budget: Option<u64>,
    propagation_budget: Option<u64>,
    deadline: Option<f64>, // In `time::precise_time_s` seconds.
}

impl Budget {
    pub fn new() -> Budget {
        Budget {
            decision_budget: None,
            propagation_budget: None,
            deadline: None,
        }
    }

    pub fn set_decision_budget(&mut self, decisions: u64) {
        self.decision_budget = Some(decisions);
    }

    pub fn set_propagation_budget(&mut self, propagations: u64) {
        self.propagation_budget = Some(propagations);
    }

    pub fn set_time_limit(&mut self, seconds: f64) {
        self.deadline = Some(time::precise_time_s() + seconds);
    }

    pub fn within(&self, decisions: u64, propagations: u64) -> bool {
        self.decision_budget.map_or(true, |b| decisions < b)
            && self.propagation_budget.map_or(true, |b| propagations < b)
            && self.deadline.map_or(true, |d| time::precise_time_s() < d)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_by_default() {
        let budget = Budget::new();
        assert!(budget.within(u64::max_value() - 1, u64::max_value() - 1));
    }

    #[test]
    fn decision_and_propagation_limits() {
        let mut budget = Budget::new();
        budget.set_decision_budget(3);
        budget.set_propagation_budget(10);
        assert!(budget.within(2, 9));
        assert!(!budget.within(3, 0));
        assert!(!budget.within(0, 10));
    }

    #[test]
    fn expired_deadline() {
        let mut budget = Budget::new();
        budget.set_time_limit(-1.0);
        assert!(!budget.within(0, 0));
    }
}
