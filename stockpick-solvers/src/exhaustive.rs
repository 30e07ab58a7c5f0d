use crate::{combinations::Combinations, SolveError};
use stockpick_core::{Amount, Candidate, Selection};

/// Largest candidate set the subset walk accepts (2^25 subsets).
pub const MAX_CANDIDATES: usize = 25;

/// Finds the maximum-benefit subset within `budget` by checking every subset.
///
/// Subsets are enumerated by ascending size, lexicographic within each size;
/// strict `>` comparison keeps the first subset reaching a given benefit, so
/// repeated runs produce identical output. The returned pick is sorted by
/// name. Runtime is exponential in the candidate count, hence the
/// [`MAX_CANDIDATES`] cap.
pub fn solve<A: Amount>(
    candidates: &[Candidate<A>],
    budget: A,
) -> Result<Selection<A>, SolveError> {
    if budget < A::ZERO {
        return Err(SolveError::InvalidBudget {
            budget: budget.to_f64(),
        });
    }
    if candidates.len() > MAX_CANDIDATES {
        return Err(SolveError::TooManyCandidates {
            count: candidates.len(),
            limit: MAX_CANDIDATES,
        });
    }

    let n = candidates.len();
    let mut best: Vec<usize> = Vec::new();
    let mut max_benefit = 0.0f64;

    for k in 1..=n {
        for combo in Combinations::new(n, k) {
            let total_cost: A = combo.iter().map(|&i| candidates[i].cost).sum();
            if total_cost > budget {
                continue;
            }
            let total_benefit: f64 = combo.iter().map(|&i| candidates[i].benefit_value()).sum();
            if total_benefit > max_benefit {
                max_benefit = total_benefit;
                best = combo;
            }
        }
    }

    let mut picked: Vec<Candidate<A>> =
        best.into_iter().map(|i| candidates[i].clone()).collect();
    picked.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Selection {
        picked,
        total_benefit: max_benefit,
    })
}
