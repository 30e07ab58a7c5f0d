pub mod amount;
pub mod candidate;
pub mod loader;

pub use amount::Amount;
pub use candidate::{Candidate, InfeasibleSelection, Selection};
pub use loader::{load_candidates, LoadError};
