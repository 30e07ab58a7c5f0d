use stockpick_solvers::combinations::Combinations;

#[test]
fn test_lexicographic_order() {
    let combos: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
    assert_eq!(
        combos,
        vec![
            vec![0, 1],
            vec![0, 2],
            vec![0, 3],
            vec![1, 2],
            vec![1, 3],
            vec![2, 3],
        ]
    );
}

#[test]
fn test_single_element_combinations() {
    let combos: Vec<Vec<usize>> = Combinations::new(3, 1).collect();
    assert_eq!(combos, vec![vec![0], vec![1], vec![2]]);
}

#[test]
fn test_full_size_combination() {
    let combos: Vec<Vec<usize>> = Combinations::new(3, 3).collect();
    assert_eq!(combos, vec![vec![0, 1, 2]]);
}

#[test]
fn test_empty_combination() {
    let combos: Vec<Vec<usize>> = Combinations::new(3, 0).collect();
    assert_eq!(combos, vec![Vec::<usize>::new()]);
}

#[test]
fn test_k_larger_than_n_yields_nothing() {
    assert_eq!(Combinations::new(2, 3).count(), 0);
}

#[test]
fn test_counts_match_binomials() {
    assert_eq!(Combinations::new(6, 3).count(), 20);
    assert_eq!(Combinations::new(10, 5).count(), 252);
}
