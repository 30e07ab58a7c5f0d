use stockpick_core::{Candidate, InfeasibleSelection, Selection};

#[test]
fn test_benefit_value() {
    assert_eq!(Candidate::new("A", 100i64, 10i64).benefit_value(), 10.0);
    assert_eq!(Candidate::new("C", 150i64, 20i64).benefit_value(), 30.0);
    assert_eq!(Candidate::new("X", 50.0f64, 0.0f64).benefit_value(), 0.0);
}

#[test]
fn test_empty_selection() {
    let selection = Selection::<i64>::empty();
    assert!(selection.picked.is_empty());
    assert_eq!(selection.total_benefit, 0.0);
    assert_eq!(selection.total_cost(), 0);
    selection.verify(0).unwrap();
}

#[test]
fn test_verify_feasible_selection() {
    let selection = Selection {
        picked: vec![Candidate::new("A", 100i64, 10i64), Candidate::new("C", 150, 20)],
        total_benefit: 40.0,
    };
    assert_eq!(selection.total_cost(), 250);
    selection.verify(300).unwrap();
    selection.verify(250).unwrap();
}

#[test]
fn test_verify_rejects_over_budget() {
    let selection = Selection {
        picked: vec![Candidate::new("A", 100i64, 10i64), Candidate::new("C", 150, 20)],
        total_benefit: 40.0,
    };
    let err = selection.verify(249).unwrap_err();
    assert!(matches!(err, InfeasibleSelection::OverBudget { .. }));
}

#[test]
fn test_verify_rejects_duplicate_picks() {
    let selection = Selection {
        picked: vec![Candidate::new("A", 100i64, 10i64), Candidate::new("A", 100, 10)],
        total_benefit: 20.0,
    };
    let err = selection.verify(500).unwrap_err();
    assert!(matches!(err, InfeasibleSelection::DuplicatePick { .. }));
}

#[test]
fn test_selection_json_round_trip() {
    let selection = Selection {
        picked: vec![Candidate::new("A", 100i64, 10i64)],
        total_benefit: 10.0,
    };
    let json = serde_json::to_string(&selection).unwrap();
    let back: Selection<i64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, selection);
}
