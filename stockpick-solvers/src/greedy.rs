use crate::SolveError;
use std::cmp::Ordering;
use stockpick_core::{Amount, Candidate, Selection};

/// Single ranked pass: sort by benefit-per-cost ratio descending, accept
/// whatever still fits. Always feasible, not guaranteed optimal.
pub fn solve<A: Amount>(
    candidates: &[Candidate<A>],
    budget: A,
) -> Result<Selection<A>, SolveError> {
    if budget < A::ZERO {
        return Err(SolveError::InvalidBudget {
            budget: budget.to_f64(),
        });
    }

    // Zero and negative costs cannot be ranked.
    let mut ranked: Vec<&Candidate<A>> =
        candidates.iter().filter(|c| c.cost > A::ZERO).collect();
    // Stable sort keeps input order between equal ratios.
    ranked.sort_by(|a, b| ratio(b).partial_cmp(&ratio(a)).unwrap_or(Ordering::Equal));

    let mut total_cost = A::ZERO;
    let mut total_benefit = 0.0f64;
    let mut picked = Vec::new();

    for candidate in ranked {
        if total_cost + candidate.cost > budget {
            continue;
        }
        total_cost += candidate.cost;
        total_benefit += candidate.benefit_value();
        picked.push(candidate.clone());
    }

    Ok(Selection {
        picked,
        total_benefit,
    })
}

// The cost term cancels, leaving benefit_pct / 100: cost only matters for
// feasibility, never for rank.
fn ratio<A: Amount>(candidate: &Candidate<A>) -> f64 {
    (candidate.cost.to_f64() * candidate.benefit_pct.to_f64() / 100.0) / candidate.cost.to_f64()
}
