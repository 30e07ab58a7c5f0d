use std::time::Duration;
use stockpick_core::{Amount, Selection};

/// The two pipelines label their elapsed-time line differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeStyle {
    /// Bare seconds value (exhaustive pipeline).
    Bare,
    /// `Temps : <secs> secondes` (greedy pipeline).
    Labelled,
}

/// Renders the run report: picked set, total benefit, remaining budget
/// (2 decimals, against the configured budget), elapsed solve time.
pub fn render<A: Amount>(
    selection: &Selection<A>,
    budget: A,
    elapsed: Duration,
    time_style: TimeStyle,
) -> String {
    let picks: Vec<String> = selection
        .picked
        .iter()
        .map(|c| format!("({:?}, {}, {})", c.name, c.cost, c.benefit_pct))
        .collect();
    let remaining = budget.to_f64() - selection.total_cost().to_f64();
    let secs = elapsed.as_secs_f64();
    let time_line = match time_style {
        TimeStyle::Bare => format!("{}", secs),
        TimeStyle::Labelled => format!("Temps : {} secondes", secs),
    };
    format!(
        "Best combination: [{}]\nMax benefit: {}\nBudget restant: {:.2}\n{}",
        picks.join(", "),
        selection.total_benefit,
        remaining,
        time_line,
    )
}
