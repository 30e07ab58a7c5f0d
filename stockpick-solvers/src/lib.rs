use thiserror::Error;

pub mod combinations;
pub mod exhaustive;
pub mod greedy;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("budget {budget} is negative")]
    InvalidBudget { budget: f64 },
    #[error("{count} candidates exceeds the exhaustive search limit of {limit}")]
    TooManyCandidates { count: usize, limit: usize },
}
