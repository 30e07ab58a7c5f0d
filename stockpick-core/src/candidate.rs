use crate::amount::Amount;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// One investable item: a cost and a percentage return on that cost.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(bound = "A: Amount")]
pub struct Candidate<A: Amount> {
    pub name: String,
    pub cost: A,
    pub benefit_pct: A,
}

impl<A: Amount> Candidate<A> {
    pub fn new(name: impl Into<String>, cost: A, benefit_pct: A) -> Self {
        Self {
            name: name.into(),
            cost,
            benefit_pct,
        }
    }

    /// Monetary benefit realized if this candidate is purchased.
    pub fn benefit_value(&self) -> f64 {
        self.cost.to_f64() * self.benefit_pct.to_f64() / 100.0
    }
}

/// The subset an optimizer chose, plus the benefit it realizes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(bound = "A: Amount")]
pub struct Selection<A: Amount> {
    pub picked: Vec<Candidate<A>>,
    pub total_benefit: f64,
}

impl<A: Amount> Selection<A> {
    pub fn empty() -> Self {
        Self {
            picked: Vec::new(),
            total_benefit: 0.0,
        }
    }

    pub fn total_cost(&self) -> A {
        self.picked.iter().map(|c| c.cost).sum()
    }

    /// Checks the feasibility invariant: each candidate picked at most once
    /// and total cost within `budget`.
    pub fn verify(&self, budget: A) -> Result<(), InfeasibleSelection> {
        let mut seen = HashSet::new();
        for candidate in &self.picked {
            if !seen.insert(candidate.name.as_str()) {
                return Err(InfeasibleSelection::DuplicatePick {
                    name: candidate.name.clone(),
                });
            }
        }
        let total_cost = self.total_cost();
        if total_cost > budget {
            return Err(InfeasibleSelection::OverBudget {
                total_cost: total_cost.to_f64(),
                budget: budget.to_f64(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum InfeasibleSelection {
    #[error("candidate {name} picked more than once")]
    DuplicatePick { name: String },
    #[error("total cost {total_cost} exceeds budget {budget}")]
    OverBudget { total_cost: f64, budget: f64 },
}
